//! C++ adapter.
//!
//! Overrides: `function_definition` drills through `function_declarator`
//! and keeps `qualified_identifier` intact so `Foo::bar` survives, and
//! operator overloads (`operator_name` child) are named literally.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::generic::{find_identifier_child, find_qualified_identifier, node_text};
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> TypeTable {
    build_table(&[
        ("function_definition", DEFINITION_FUNCTION, NameStrategy::Custom, ValueStrategy::FunctionWithParams, 0),
        ("class_specifier", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("struct_specifier", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("namespace_definition", ORGANIZATION_NAMESPACE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("call_expression", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("preproc_include", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("declaration", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("binary_expression", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("return_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("break_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("try_statement", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("catch_clause", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("throw_statement", ERROR_THROW, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("number_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("true", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("false", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("qualified_identifier", IDENTIFIER_QUALIFIED, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("field_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("{", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("}", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (";", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("class", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("public", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("private", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("protected", MODIFIER_VISIBILITY, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
    ])
}

pub struct CppAdapter {
    table: TypeTable,
}

impl CppAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for CppAdapter {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["cpp", "cc", "cxx", "hpp", "hh", "hxx"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_cpp::LANGUAGE.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn classify(&self, node: Node, source: &[u8]) -> (SemanticType, NodeFlags, NameStrategy, ValueStrategy) {
        let (semantic_type, flags, name_strategy, value_strategy) = self
            .table
            .get(node.kind())
            .map_or((PARSER_CONSTRUCT, 0, NameStrategy::None, ValueStrategy::None), |entry| {
                (entry.semantic_type, entry.flags, entry.name_strategy, entry.value_strategy)
            });
        let semantic_type = if node.kind() == "binary_expression" {
            crate::generic::refine_binary_operator(node, source, semantic_type)
        } else {
            semantic_type
        };
        (semantic_type, flags, name_strategy, value_strategy)
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::Custom if node.kind() == "function_definition" => {
                if let Some(declarator) = node.child_by_field_name("declarator") {
                    return extract_declarator_name(declarator, source);
                }
                find_qualified_identifier(node, source)
            }
            NameStrategy::NodeText => node_text(node, source).to_string(),
            NameStrategy::FindIdentifier => find_identifier_child(node, source),
            NameStrategy::FindQualifiedIdentifier => find_qualified_identifier(node, source),
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

/// Drill through nested `function_declarator`/`pointer_declarator`/
/// `reference_declarator` wrappers to the identifier or operator name.
fn extract_declarator_name(mut declarator: Node, source: &[u8]) -> String {
    loop {
        match declarator.kind() {
            "function_declarator" => {
                let Some(inner) = declarator.child_by_field_name("declarator") else {
                    return find_identifier_child(declarator, source);
                };
                declarator = inner;
            }
            "pointer_declarator" | "reference_declarator" => {
                let Some(inner) = declarator.child_by_field_name("declarator") else {
                    return String::new();
                };
                declarator = inner;
            }
            "qualified_identifier" | "identifier" | "field_identifier" => {
                return node_text(declarator, source).to_string();
            }
            "operator_name" => return node_text(declarator, source).to_string(),
            _ => return find_qualified_identifier(declarator, source),
        }
    }
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(CppAdapter::new())
}
