//! The per-language capability set: classification, name extraction, and
//! native-context enrichment.

use tree_sitter::Node;

use astrel_taxonomy::{NodeFlags, SemanticType};

use crate::entry::{TypeTable, DEFAULT_ENTRY};
use crate::generic;
use crate::strategy::{NameStrategy, ValueStrategy};

/// A language's classification table, parser handle, and extraction
/// overrides. The flattener resolves one adapter per file and calls it for
/// every node in that file's tree — no per-node dynamic lookup of which
/// language it belongs to.
pub trait LanguageAdapter: Send + Sync {
    /// The registry key (`"python"`, `"cpp"`, ...).
    fn name(&self) -> &'static str;

    /// File extensions this adapter claims (without the leading dot).
    fn extensions(&self) -> &'static [&'static str];

    /// The tree-sitter grammar for this language.
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// The static raw-type classification table.
    fn type_table(&self) -> &TypeTable;

    /// Table lookup with default fallback to `PARSER_CONSTRUCT`/empty name.
    /// `source` is available for adapters whose grammar collapses several
    /// operator categories into one raw type (`binary_expression`) and must
    /// inspect the actual operator token to refine the table's default —
    /// most adapters ignore it and classify on `node.kind()` alone.
    fn classify(&self, node: Node, _source: &[u8]) -> (SemanticType, NodeFlags, NameStrategy, ValueStrategy) {
        let entry = self.type_table().get(node.kind()).unwrap_or(&DEFAULT_ENTRY);
        (
            entry.semantic_type,
            entry.flags,
            entry.name_strategy,
            entry.value_strategy,
        )
    }

    /// Dispatches by `name_strategy`; languages with patterns the generic
    /// strategies miss override this and handle `NameStrategy::Custom`
    /// (and any other strategy they want to special-case) themselves.
    fn extract_name(&self, node: Node, source: &[u8], strategy: NameStrategy) -> String {
        match strategy {
            NameStrategy::None => String::new(),
            NameStrategy::NodeText => generic::node_text(node, source).to_string(),
            NameStrategy::FindIdentifier => generic::find_identifier_child(node, source),
            NameStrategy::FindQualifiedIdentifier => {
                generic::find_qualified_identifier(node, source)
            }
            NameStrategy::FindAssignmentTarget => generic::find_assignment_target(node, source),
            NameStrategy::FindProperty => generic::find_property(node, source),
            NameStrategy::FindCallTarget => generic::find_call_target(node, source),
            NameStrategy::Custom => String::new(),
        }
    }

    /// Native-context signature/type text. Default: empty (most raw types
    /// carry no signature).
    fn extract_signature_type(&self, _node: Node, _source: &[u8]) -> String {
        String::new()
    }

    /// Native-context parameter names for `ValueStrategy::FunctionWithParams`
    /// and `ArrowFunction`.
    fn extract_parameters(&self, node: Node, source: &[u8], value_strategy: ValueStrategy) -> Vec<String> {
        match value_strategy {
            ValueStrategy::FunctionWithParams | ValueStrategy::ArrowFunction => {
                generic::collect_parameter_names(node, source)
            }
            _ => Vec::new(),
        }
    }

    /// Native-context modifier list (visibility, storage class, ...).
    fn extract_modifiers(&self, node: Node, source: &[u8]) -> Vec<String> {
        generic::collect_modifier_names(node, source)
    }

    /// Preceding doc-comment text, used only when `context != none` and the
    /// node's `value_strategy` enriches a definition. Skipped by default;
    /// languages that place doc comments as a preceding sibling override
    /// this (Rust/Java/C#/Kotlin `///`/`/**`, Python's docstring-as-first-
    /// statement is handled in `python.rs` instead since it is a child, not
    /// a sibling).
    fn extract_doc_comment(&self, _node: Node, _source: &[u8]) -> Option<String> {
        None
    }
}

/// Every super-type's named entry implements classification purely from its
/// static table; this adapter kind needs no per-language Rust type when a
/// language has no known extraction overrides.
///
/// `binary_expression_types` names the raw grammar type(s), if any, whose
/// table entry is a default (`OPERATOR_ARITHMETIC`) that must be refined by
/// inspecting the node's `operator` field — the fix for the corpus's
/// comparison-vs-arithmetic mis-tagging in languages whose grammar collapses
/// every binary operator into one node type (see
/// [`crate::generic::refine_binary_operator`]). Empty for languages with no
/// such collapsed node type.
pub struct GenericAdapter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub language: fn() -> tree_sitter::Language,
    pub table: TypeTable,
    pub binary_expression_types: &'static [&'static str],
    /// Whether this language places doc comments as a preceding sibling of
    /// the definition they document (Rust `///`, Java/C#/Kotlin `/**`),
    /// making [`generic::find_preceding_comment`] the right strategy.
    /// `false` for languages where comments aren't conventionally attached
    /// that way, or where no adapter-specific override is otherwise needed.
    pub doc_comment: bool,
}

impl LanguageAdapter for GenericAdapter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        (self.language)()
    }

    fn type_table(&self) -> &TypeTable {
        &self.table
    }

    fn classify(&self, node: Node, source: &[u8]) -> (SemanticType, NodeFlags, NameStrategy, ValueStrategy) {
        let entry = self.type_table().get(node.kind()).unwrap_or(&DEFAULT_ENTRY);
        let semantic_type = if self.binary_expression_types.contains(&node.kind()) {
            generic::refine_binary_operator(node, source, entry.semantic_type)
        } else {
            entry.semantic_type
        };
        (semantic_type, entry.flags, entry.name_strategy, entry.value_strategy)
    }

    fn extract_doc_comment(&self, node: Node, source: &[u8]) -> Option<String> {
        if self.doc_comment {
            generic::find_preceding_comment(node, source)
        } else {
            None
        }
    }
}
