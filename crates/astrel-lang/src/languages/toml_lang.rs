//! TOML adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("table", COLLECTION_OBJECT, NameStrategy::None, ValueStrategy::None, 0),
        ("table_array_element", COLLECTION_ARRAY, NameStrategy::None, ValueStrategy::None, 0),
        ("pair", VARIABLE_PROPERTY, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("float", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("boolean", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("bare_key", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "toml",
        extensions: &["toml"],
        language: || tree_sitter_toml_ng::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
