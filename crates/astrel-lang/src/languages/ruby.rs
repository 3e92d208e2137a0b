//! Ruby adapter.
//!
//! `require`/`require_relative` parse as ordinary `call` nodes and are
//! deliberately left classified as `CALL_FUNCTION`, not reclassified to
//! `ORGANIZATION_IMPORT` — a documented gap, not a bug to silently patch.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::generic::{find_identifier_child, node_text};
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> TypeTable {
    build_table(&[
        ("method", DEFINITION_FUNCTION, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("singleton_method", DEFINITION_METHOD, NameStrategy::FindIdentifier, ValueStrategy::FunctionWithParams, 0),
        ("class", DEFINITION_CLASS, NameStrategy::FindIdentifier, ValueStrategy::ClassWithMethods, 0),
        ("module", ORGANIZATION_NAMESPACE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        // require/require_relative: ordinary calls, intentionally not ORGANIZATION_IMPORT.
        ("call", CALL_FUNCTION, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("method_call", CALL_METHOD, NameStrategy::FindCallTarget, ValueStrategy::FunctionCall, 0),
        ("assignment", EXPRESSION_ASSIGNMENT, NameStrategy::FindAssignmentTarget, ValueStrategy::VariableWithType, 0),
        ("if", FLOW_CONDITIONAL, NameStrategy::None, ValueStrategy::None, 0),
        ("while", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("for", FLOW_LOOP, NameStrategy::None, ValueStrategy::None, 0),
        ("begin", ERROR_TRY, NameStrategy::None, ValueStrategy::None, 0),
        ("rescue", ERROR_CATCH, NameStrategy::None, ValueStrategy::None, 0),
        ("ensure", ERROR_FINALLY, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("string", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("integer", LITERAL_NUMBER, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("true", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("false", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, IS_KEYWORD),
        ("identifier", IDENTIFIER_NAME, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("def", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
        ("end", MODIFIER_KEYWORD, NameStrategy::None, ValueStrategy::None, IS_KEYWORD | IS_SYNTAX_ONLY),
    ])
}

pub struct RubyAdapter {
    table: TypeTable,
}

impl RubyAdapter {
    pub fn new() -> Self {
        Self { table: table() }
    }
}

impl LanguageAdapter for RubyAdapter {
    fn name(&self) -> &'static str {
        "ruby"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rb"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_ruby::LANGUAGE.into()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::NodeText => node_text(node, source).to_string(),
            NameStrategy::FindIdentifier => find_identifier_child(node, source),
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
    Arc::new(RubyAdapter::new())
}
