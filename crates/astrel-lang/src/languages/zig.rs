//! Zig adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("FnProto", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("TestDecl", DEFINITION_FUNCTION, NameStrategy::None, ValueStrategy::FunctionWithParams, 0),
        ("ContainerDecl", TYPE_COMPOSITE, NameStrategy::None, ValueStrategy::None, 0),
        ("VarDecl", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("CallExpr", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("FieldExpr", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("IfExpr", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("ForExpr", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("WhileExpr", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("line_comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("STRINGLITERALSINGLE", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("INTEGER", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("IDENTIFIER", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("pub", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "zig",
        extensions: &["zig"],
        language: || tree_sitter_zig::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
