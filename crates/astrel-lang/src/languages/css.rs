//! CSS adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("rule_set", DEFINITION_MODULE, NameStrategy::None, ValueStrategy::None, 0),
        ("declaration", VARIABLE_PROPERTY, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("media_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("import_statement", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string_value", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer_value", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("class_selector", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("id_selector", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("property_name", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "css",
        extensions: &["css"],
        language: || tree_sitter_css::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
