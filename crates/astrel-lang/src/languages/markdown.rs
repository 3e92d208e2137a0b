//! Markdown adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("atx_heading", DEFINITION_MODULE, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("fenced_code_block", LITERAL_OTHER, NameStrategy::None, ValueStrategy::None, 0),
        ("link", EXPRESSION_OTHER, NameStrategy::None, ValueStrategy::None, 0),
        ("list_item", COLLECTION_ARRAY, NameStrategy::None, ValueStrategy::None, 0),
        ("html_block", MISC_OTHER, NameStrategy::None, ValueStrategy::None, 0),
        ("inline", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "markdown",
        extensions: &["md", "markdown"],
        language: || tree_sitter_md::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
