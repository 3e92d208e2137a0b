//! GraphQL adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("operation_definition", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("fragment_definition", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("object_type_definition", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("field", VARIABLE_PROPERTY, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("directive", METADATA_ANNOTATION, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string_value", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("int_value", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("boolean_value", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("name", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "graphql",
        extensions: &["graphql", "gql"],
        language: || tree_sitter_graphql::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
