//! Java adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("method_declaration", DEFINITION_METHOD, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("constructor_declaration", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("class_declaration", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("interface_declaration", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("import_declaration", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("package_declaration", ORGANIZATION_PACKAGE, NameStrategy::None, ValueStrategy::None, 0),
        ("local_variable_declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("method_invocation", CALL_METHOD, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("object_creation_expression", CALL_CONSTRUCTOR, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("binary_expression", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("try_statement", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("catch_clause", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("throw_statement", ERROR_THROW, NameStrategy::None, ValueStrategy::None, 0),
        ("line_comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("block_comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("annotation", METADATA_ANNOTATION, NameStrategy::None, ValueStrategy::None, 0),
        ("string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("decimal_integer_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("field_access", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("public", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("private", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "java",
        extensions: &["java"],
        language: || tree_sitter_java::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &["binary_expression"],
    })
}
