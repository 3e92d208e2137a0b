//! SQL adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("create_function_statement", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("create_table_statement", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("select_statement", EXPRESSION_OTHER, NameStrategy::None, ValueStrategy::None, 0),
        ("invocation", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("field", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("keyword_select", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "sql",
        extensions: &["sql"],
        language: || tree_sitter_sql::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
