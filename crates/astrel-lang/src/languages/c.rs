//! C adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("function_definition", DEFINITION_FUNCTION, NameStrategy::FindQualifiedIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("struct_specifier", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("enum_specifier", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("preproc_include", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("call_expression", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("binary_expression", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("return_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("number_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("field_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (";", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "c",
        extensions: &["c", "h"],
        language: || tree_sitter_c::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &["binary_expression"],
    })
}
