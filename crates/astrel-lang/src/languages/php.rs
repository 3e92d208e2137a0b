//! PHP adapter.
//!
//! Overrides: `simple_parameter` takes its name from `variable_name`
//! (keeping the `$` prefix), where the generic identifier search would
//! otherwise miss it.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::generic::{find_identifier_child, node_text};
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> TypeTable {
    build_table(&[
        ("function_definition", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("method_declaration", DEFINITION_METHOD, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("class_declaration", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("simple_parameter", VARIABLE_PARAMETER, NameStrategy::Custom, ValueStrategy::None, 0),
        ("namespace_use_declaration", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("function_call_expression", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("member_call_expression", CALL_METHOD, NameStrategy::FindProperty, ValueStrategy::FunctionCall, 0),
        ("assignment_expression", EXPRESSION_ASSIGNMENT, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("foreach_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("variable_name", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("member_access_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("function", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("public", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("private", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

pub struct PhpAdapter {
    table: TypeTable,
}

impl PhpAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for PhpAdapter {
    fn name(&self) -> &'static str {
        "php"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["php"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_php::LANGUAGE_PHP.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::Custom if node.kind() == "simple_parameter" => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "variable_name" {
                        return node_text(child, source).to_string();
                    }
                }
                String::new()
            }
            NameStrategy::NodeText => node_text(node, source).to_string(),
            NameStrategy::FindIdentifier => find_identifier_child(node, source),
            NameStrategy::FindQualifiedIdentifier => {
                crate::generic::find_qualified_identifier(node, source)
            }
            NameStrategy::FindAssignmentTarget => {
                crate::generic::find_assignment_target(node, source)
            }
            NameStrategy::FindProperty => crate::generic::find_property(node, source),
            NameStrategy::FindCallTarget => crate::generic::find_call_target(node, source),
            _ => String::new(),
        }
    }

    fn extract_doc_comment(&self, node: Node, source: &[u8]) -> Option<String> {
        crate::generic::find_preceding_comment(node, source)
    }
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(PhpAdapter::new())
}
