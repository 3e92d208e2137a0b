//! Rust adapter. No known generic-strategy gaps; relies entirely on the
//! static table plus the shared extraction strategies.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("function_item", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("impl_item", DEFINITION_CLASS, NameStrategy::FindQualifiedIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("struct_item", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("enum_item", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("trait_item", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("mod_item", ORGANIZATION_NAMESPACE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("use_declaration", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("let_declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("call_expression", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("macro_invocation", CALL_MACRO, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("binary_expression", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("if_expression", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("match_expression", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_expression", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_expression", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("loop_expression", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("return_expression", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("break_expression", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("line_comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("block_comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("attribute_item", METADATA_ANNOTATION, NameStrategy::None, ValueStrategy::None, 0),
        ("string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("boolean_literal", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("field_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("{", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("}", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("fn", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("pub", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

use crate::strategy::{NameStrategy, ValueStrategy};

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "rust",
        extensions: &["rs"],
        language: || tree_sitter_rust::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &["binary_expression"],
    })
}
