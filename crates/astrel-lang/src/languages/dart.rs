//! Dart adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("function_signature", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("method_signature", DEFINITION_METHOD, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("class_definition", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("import_or_export", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("library_name", ORGANIZATION_NAMESPACE, NameStrategy::None, ValueStrategy::None, 0),
        ("initialized_variable_definition", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("assignment_expression", EXPRESSION_ASSIGNMENT, NameStrategy::FindAssignmentTarget, ValueStrategy::VariableWithType, 0),
        ("method_invocation", CALL_METHOD, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("try_statement", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("on_part", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("annotation", METADATA_ANNOTATION, NameStrategy::None, ValueStrategy::None, 0),
        ("string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("decimal_integer_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("unconditional_assignable_selector", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "dart",
        extensions: &["dart"],
        language: || tree_sitter_dart::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
