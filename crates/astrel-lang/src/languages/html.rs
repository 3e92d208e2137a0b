//! HTML adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("element", COLLECTION_OBJECT, NameStrategy::None, ValueStrategy::None, 0),
        ("script_element", DEFINITION_MODULE, NameStrategy::None, ValueStrategy::None, 0),
        ("style_element", DEFINITION_MODULE, NameStrategy::None, ValueStrategy::None, 0),
        ("attribute", VARIABLE_PROPERTY, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("attribute_value", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("tag_name", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("doctype", MISC_PREPROCESSOR, NameStrategy::None, ValueStrategy::None, 0),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "html",
        extensions: &["html", "htm"],
        language: || tree_sitter_html::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
