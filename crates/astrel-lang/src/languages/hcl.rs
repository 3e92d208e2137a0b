//! HCL (Terraform) adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("block", DEFINITION_MODULE, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("attribute", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("function_call", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("get_attr", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("conditional", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_expr", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string_lit", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("numeric_lit", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("bool_lit", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "hcl",
        extensions: &["hcl", "tf"],
        language: || tree_sitter_hcl::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
