//! C# adapter.

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
        ("using_directive", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("namespace_declaration", ORGANIZATION_NAMESPACE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("variable_declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("invocation_expression", CALL_METHOD, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("object_creation_expression", CALL_CONSTRUCTOR, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("binary_expression", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("try_statement", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("catch_clause", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("throw_statement", ERROR_THROW, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("attribute", METADATA_ANNOTATION, NameStrategy::None, ValueStrategy::None, 0),
        ("string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("member_access_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("public", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("private", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "csharp",
        extensions: &["cs"],
        language: || tree_sitter_c_sharp::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &["binary_expression"],
    })
}
