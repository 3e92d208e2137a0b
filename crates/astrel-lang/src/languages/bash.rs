//! Bash adapter.
//!
//! Overrides: identifier search additionally looks at `variable_name` and
//! `word`, since bash's grammar uses those for what other languages would
//! call a plain identifier.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::generic::node_text;
use crate::strategy::{NameStrategy, ValueStrategy};

const BASH_IDENTIFIER_TYPES: &[&str] = &["variable_name", "word", "identifier"];

fn find_bash_identifier(node: Node, source: &[u8]) -> String {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if BASH_IDENTIFIER_TYPES.contains(&child.kind()) {
            return node_text(child, source).to_string();
        }
    }
    String::new()
}

fn table() -> TypeTable {
    build_table(&[
        ("function_definition", DEFINITION_FUNCTION, NameStrategy::Custom, ValueStrategy::FunctionWithParams, 0),
        ("variable_assignment", VARIABLE_DECLARATION, NameStrategy::Custom, ValueStrategy::VariableWithType, 0),
        ("command", CALL_FUNCTION, NameStrategy::Custom, ValueStrategy::FunctionCall, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("raw_string", LITERAL_STRING, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("number", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("variable_name", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("word", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("function", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

pub struct BashAdapter {
    table: TypeTable,
}

impl BashAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for BashAdapter {
    fn name(&self) -> &'static str {
        "bash"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["sh", "bash"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_bash::LANGUAGE.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::Custom if node.kind() == "function_definition" => {
                find_bash_identifier(node, source)
            }
            NameStrategy::Custom if node.kind() == "variable_assignment" => {
                node.child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_else(|| find_bash_identifier(node, source))
            }
            NameStrategy::Custom if node.kind() == "command" => {
                node.named_child(0)
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default()
            }
            NameStrategy::NodeText => node_text(node, source).to_string(),
            NameStrategy::FindIdentifier => find_bash_identifier(node, source),
            _ => String::new(),
        }
    }
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(BashAdapter::new())
}
