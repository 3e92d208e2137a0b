//! JavaScript adapter.
//!
//! Overrides: `arrow_function`/`function_expression` take their name from
//! the enclosing assignment/variable declarator; method calls `obj.m()`
//! leave `name` empty and carry `obj.m` in `signature_type` instead.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::generic::{find_identifier_child, node_text};
use crate::strategy::{NameStrategy, ValueStrategy};

pub fn table() -> TypeTable {
    build_table(&[
        ("function_declaration", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("function_expression", DEFINITION_FUNCTION, NameStrategy::Custom, ValueStrategy::FunctionWithParams, 0),
        ("arrow_function", DEFINITION_FUNCTION, NameStrategy::Custom, ValueStrategy::ArrowFunction, 0),
        ("class_declaration", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("method_definition", DEFINITION_METHOD, NameStrategy::FindProperty, ValueStrategy::FunctionWithParams, 0),
        ("import_statement", ORGANIZATION_IMPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("export_statement", ORGANIZATION_EXPORT, NameStrategy::None, ValueStrategy::None, 0),
        ("call_expression", CALL_FUNCTION, NameStrategy::Custom, ValueStrategy::FunctionCall, 0),
        ("new_expression", CALL_CONSTRUCTOR, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("variable_declarator", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::VariableWithType, 0),
        ("assignment_expression", EXPRESSION_ASSIGNMENT, NameStrategy::None, ValueStrategy::None, 0),
        ("binary_expression", OPERATOR_ARITHMETIC, NameStrategy::None, ValueStrategy::None, 0),
        ("if_statement", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("for_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("for_in_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("while_statement", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("return_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("break_statement", FLOW_JUMP, NameStrategy::None, ValueStrategy::None, 0),
        ("try_statement", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("catch_clause", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("throw_statement", ERROR_THROW, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("template_string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("number", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("true", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("false", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("property_identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("member_expression", EXPRESSION_MEMBER_ACCESS, NameStrategy::FindProperty, ValueStrategy::None, 0),
        ("(", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (")", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("{", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("}", PARSER_DELIMITER, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (";", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        (",", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("function", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("const", MODIFIER_STORAGE, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("let", MODIFIER_STORAGE, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("var", MODIFIER_STORAGE, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

/// Shared between `javascript` and `typescript`: the table default tags
/// `binary_expression` as `OPERATOR_ARITHMETIC`; refine to
/// `OPERATOR_COMPARISON`/`OPERATOR_LOGICAL`/`OPERATOR_BITWISE` by inspecting
/// the actual `operator` field token.
pub fn classify_shared(table: &TypeTable, node: Node, source: &[u8]) -> (SemanticType, NodeFlags, NameStrategy, ValueStrategy) {
    let entry = table.get(node.kind()).unwrap_or(&crate::entry::DEFAULT_ENTRY);
    let semantic_type = if node.kind() == "binary_expression" {
        crate::generic::refine_binary_operator(node, source, entry.semantic_type)
    } else {
        entry.semantic_type
    };
    (semantic_type, entry.flags, entry.name_strategy, entry.value_strategy)
}

/// Shared between `javascript` and `typescript`: an arrow/function
/// expression's name is whatever it's assigned to; a call's name is empty
/// when the callee is a member access (the dotted path lives in the
/// signature instead).
pub fn extract_name_shared(node: Node, source: &[u8], strategy: NameStrategy) -> String {
    match strategy {
        NameStrategy::Custom if matches!(node.kind(), "arrow_function" | "function_expression") => {
            crate::generic::find_assignment_target(node, source)
        }
        NameStrategy::Custom if node.kind() == "call_expression" => {
            let Some(func) = node.child_by_field_name("function") else {
                return find_identifier_child(node, source);
            };
            if func.kind() == "member_expression" {
                String::new()
            } else {
                node_text(func, source).to_string()
            }
        }
        NameStrategy::NodeText => node_text(node, source).to_string(),
        NameStrategy::FindIdentifier => find_identifier_child(node, source),
        NameStrategy::FindQualifiedIdentifier => crate::generic::find_qualified_identifier(node, source),
        NameStrategy::FindAssignmentTarget => crate::generic::find_assignment_target(node, source),
        NameStrategy::FindProperty => crate::generic::find_property(node, source),
        NameStrategy::FindCallTarget => crate::generic::find_call_target(node, source),
        _ => String::new(),
    }
}

/// A call's signature_type carries the full dotted callee (`obj.m`) when
/// `extract_name` left `name` empty for a method-like call.
pub fn extract_signature_type_shared(node: Node, source: &[u8]) -> String {
    if node.kind() != "call_expression" {
        return String::new();
    }
    node.child_by_field_name("function")
        .filter(|f| f.kind() == "member_expression")
        .map(|f| node_text(f, source).to_string())
        .unwrap_or_default()
}

pub struct JavaScriptAdapter {
    table: TypeTable,
}

impl JavaScriptAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for JavaScriptAdapter {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["js", "mjs", "cjs", "jsx"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn classify(&self, node: Node, source: &[u8]) -> (SemanticType, NodeFlags, NameStrategy, ValueStrategy) {
        classify_shared(&self.table, node, source)
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        extract_name_shared(node, source, strategy)
    }

    fn extract_signature_type(&self, node: Node, source: &[u8]) -> String {
        extract_signature_type_shared(node, source)
    }

    fn extract_doc_comment(&self, node: Node, source: &[u8]) -> Option<String> {
        crate::generic::find_preceding_comment(node, source)
    }
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(JavaScriptAdapter::new())
}
