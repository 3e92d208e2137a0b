//! R adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("function_definition", DEFINITION_FUNCTION, NameStrategy::None, ValueStrategy::FunctionWithParams, 0),
        ("left_assignment", EXPRESSION_ASSIGNMENT, NameStrategy::FindAssignmentTarget, ValueStrategy::VariableWithType, 0),
        ("right_assignment", EXPRESSION_ASSIGNMENT, NameStrategy::FindAssignmentTarget, ValueStrategy::VariableWithType, 0),
        ("super_assignment", EXPRESSION_ASSIGNMENT, NameStrategy::FindAssignmentTarget, ValueStrategy::VariableWithType, 0),
        ("call", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("dollar", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("if", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("repeat", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("float", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("integer", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("true", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("false", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("function", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "r",
        extensions: &["r", "R"],
        language: || tree_sitter_r::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
