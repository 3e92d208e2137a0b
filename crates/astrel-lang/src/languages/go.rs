//! Go adapter.
//!
//! Overrides: method declarations take their name from the `field_identifier`
//! child (not the receiver), and package clauses from `package_identifier`.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::generic::{find_identifier_child, node_text};
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> TypeTable {
    build_table(&[
        ("function_declaration", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("method_declaration", DEFINITION_METHOD, NameStrategy::Custom, ValueStrategy::FunctionWithParams, 0),
        ("type_declaration", TYPE_ALIAS, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("package_clause", ORGANIZATION_PACKAGE, NameStrategy::Custom, ValueStrategy::None, 0),
        ("import_declaration", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("var_declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("const_declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("short_var_declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("call_expression", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("binary_expression", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("return_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("go_statement", FLOW_SYNC, NameStrategy::None, ValueStrategy::None, 0),
        ("defer_statement", FLOW_SYNC, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("interpreted_string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("int_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("true", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("false", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("field_identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("package_identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("selector_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("{", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("}", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("func", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

pub struct GoAdapter {
    table: TypeTable,
}

impl GoAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for GoAdapter {
    fn name(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn classify(&self, node: Node, source: &[u8]) -> (SemanticType, NodeFlags, NameStrategy, ValueStrategy) {
        let (semantic_type, flags, name_strategy, value_strategy) =
            self.table.get(node.kind()).map_or(
                (PARSER_CONSTRUCT, 0, NameStrategy::None, ValueStrategy::None),
                |entry| (entry.semantic_type, entry.flags, entry.name_strategy, entry.value_strategy),
            );
        let semantic_type = match node.kind() {
            "var_declaration" | "short_var_declaration" => {
                with_refinement(semantic_type, refine::VARIABLE_MUTABLE)
            }
            "const_declaration" => with_refinement(semantic_type, refine::VARIABLE_IMMUTABLE),
            "binary_expression" => crate::generic::refine_binary_operator(node, source, semantic_type),
            _ => semantic_type,
        };
        (semantic_type, flags, name_strategy, value_strategy)
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::Custom if node.kind() == "method_declaration" => {
                node.child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_else(|| find_identifier_child(node, source))
            }
            NameStrategy::Custom if node.kind() == "package_clause" => {
                node.named_child(0)
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default()
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
    Arc::new(GoAdapter::new())
}
