//! Kotlin adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("function_declaration", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("class_declaration", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("object_declaration", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("import_header", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("package_header", ORGANIZATION_PACKAGE, NameStrategy::None, ValueStrategy::None, 0),
        ("property_declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("call_expression", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("navigation_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("if_expression", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("when_expression", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("try_expression", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("catch_block", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("line_comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("multiline_comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("annotation", METADATA_ANNOTATION, NameStrategy::None, ValueStrategy::None, 0),
        ("string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("boolean_literal", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("simple_identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("fun", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("public", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("private", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "kotlin",
        extensions: &["kt", "kts"],
        language: || tree_sitter_kotlin::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
