//! Swift adapter.
//!
//! Overrides: `property_declaration` must descend into a `pattern` child to
//! find `simple_identifier`; `init_declaration` returns the literal `"init"`
//! since the grammar has no name token for it.

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
        ("init_declaration", DEFINITION_FUNCTION, NameStrategy::Custom, ValueStrategy::FunctionWithParams, 0),
        ("class_declaration", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("protocol_declaration", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("property_declaration", VARIABLE_DECLARATION, NameStrategy::Custom, ValueStrategy::VariableWithType, 0),
        ("import_declaration", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("call_expression", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("line_string_literal", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer_literal", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("simple_identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("navigation_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("func", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("var", MODIFIER_STORAGE, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("let", MODIFIER_STORAGE, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

pub struct SwiftAdapter {
    table: TypeTable,
}

impl SwiftAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for SwiftAdapter {
    fn name(&self) -> &'static str {
        "swift"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["swift"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_swift::LANGUAGE.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::Custom if node.kind() == "init_declaration" => "init".to_string(),
            NameStrategy::Custom if node.kind() == "property_declaration" => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "pattern" {
                        return find_identifier_child(child, source);
                    }
                }
                find_identifier_child(node, source)
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
    Arc::new(SwiftAdapter::new())
}
