//! JSON adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("object", COLLECTION_OBJECT, NameStrategy::None, ValueStrategy::None, 0),
        ("array", COLLECTION_ARRAY, NameStrategy::None, ValueStrategy::None, 0),
        ("pair", VARIABLE_PROPERTY, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("number", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("true", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("false", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("null", LITERAL_OTHER, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "json",
        extensions: &["json"],
        language: || tree_sitter_json::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
