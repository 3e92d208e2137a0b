//! Python adapter.
//!
//! Overrides: `function_definition` takes its name from the `identifier`
//! child, decorators are siblings and play no part in name extraction.
//! Docstrings are the first statement of a `block`, not a preceding
//! sibling, so `extract_doc_comment` looks inside the body instead of at
//! `find_preceding_comment`.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::generic::{find_identifier_child, node_text};
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> TypeTable {
    build_table(&[
        ("function_definition", DEFINITION_FUNCTION, NameStrategy::Custom, ValueStrategy::FunctionWithParams, 0),
        ("class_definition", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("lambda", DEFINITION_FUNCTION, NameStrategy::FindAssignmentTarget, ValueStrategy::ArrowFunction, 0),
        ("call", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("import_statement", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("import_from_statement", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("assignment", EXPRESSION_ASSIGNMENT, NameStrategy::None, ValueStrategy::VariableWithType, 0),
        ("comparison_operator", OPERATOR_COMPARISON, NameStrategy::None, ValueStrategy::None, 0),
        ("boolean_operator", OPERATOR_LOGICAL, NameStrategy::None, ValueStrategy::None, 0),
        ("binary_operator", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("not_operator", OPERATOR_LOGICAL, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("return_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("break_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("continue_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("try_statement", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("except_clause", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("finally_clause", ERROR_FINALLY, NameStrategy::None, ValueStrategy::None, 0),
        ("raise_statement", ERROR_THROW, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("decorator", METADATA_ANNOTATION, NameStrategy::None, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("float", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("true", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("false", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("none", LITERAL_OTHER, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("attribute", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("parameters", PARSER_CONSTRUCT, NameStrategy::None, ValueStrategy::None, IS_SYNTAX_ONLY),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (":", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (",", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("def", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("class", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

pub struct PythonAdapter {
    table: TypeTable,
}

impl PythonAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for PythonAdapter {
    fn name(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::Custom if node.kind() == "function_definition" => {
                find_identifier_child(node, source)
            }
            _ => {
                let default = crate::generic::node_text;
                match strategy {
                    NameStrategy::NodeText => default(node, source).to_string(),
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
        }
    }

    fn extract_doc_comment(&self, node: Node, source: &[u8]) -> Option<String> {
        if node.kind() != "function_definition" && node.kind() != "class_definition" {
            return None;
        }
        let body = node.child_by_field_name("body")?;
        let first = body.named_child(0)?;
        if first.kind() == "expression_statement" {
            let string_node = first.named_child(0)?;
            if string_node.kind() == "string" {
                return Some(node_text(string_node, source).to_string());
            }
        }
        None
    }
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(PythonAdapter::new())
}
