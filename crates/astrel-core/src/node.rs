//! The row schema: one [`NodeRecord`] per parse-tree node, plus the
//! file-scope [`ParseResult`] that wraps a complete flattened sequence.

use astrel_taxonomy::{NodeFlags, SemanticType};
use serde::Serialize;

/// One record per parse-tree node. Field-for-field the row schema from the
/// external table-valued interface, plus `doc_comment` — an enrichment
/// beyond the fixed schema, populated only under
/// [`crate::options::ContextMode::Native`] for definitions whose adapter
/// exposes a preceding/enclosing doc comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord {
    /// DFS preorder index within the file, starting at 0. Unique and
    /// monotonic per file.
    pub node_id: i64,
    /// `node_id` of the parent, or `None` at the root.
    pub parent_id: Option<i64>,
    /// Root is 0; a child is `parent.depth + 1`.
    pub depth: u32,
    /// 0-based position among siblings with the same parent.
    pub sibling_index: u32,
    /// Number of direct children kept in the flattened sequence (anonymous
    /// tokens the adapter did not opt into are not counted).
    pub children_count: u32,
    /// Size of the subtree minus 1; satisfies the descendant-sum recurrence
    /// and makes `[node_id, node_id + descendant_count]` the node's subtree.
    pub descendant_count: u32,
    /// Raw grammar node-type string, as produced by tree-sitter.
    pub r#type: String,
    /// 8-bit taxonomy code (see `astrel_taxonomy`).
    pub semantic_type: SemanticType,
    /// Independent 8-bit flags field (keyword, punctuation, syntax-only, ...).
    pub flags: NodeFlags,
    /// Extracted identifier, or empty if the extraction strategy is `None`
    /// or found nothing. Never fabricated.
    pub name: String,
    /// Native-context: language-specific type/signature text.
    pub signature_type: String,
    /// Native-context: parameter names (functions/methods/lambdas).
    pub parameters: Vec<String>,
    /// Native-context: access/declaration modifiers.
    pub modifiers: Vec<String>,
    /// Half-open byte span in the source: `end_byte >= start_byte`.
    pub start_byte: usize,
    pub end_byte: usize,
    /// 1-based inclusive line numbers.
    pub start_line: u32,
    pub end_line: u32,
    /// 1-based column numbers.
    pub start_column: u32,
    pub end_column: u32,
    /// Bounded source snippet; always valid UTF-8, per [`crate::peek`].
    pub peek: String,
    /// Native-context: preceding/enclosing doc comment, when the adapter
    /// exposes one and `context = native`.
    pub doc_comment: String,
    /// Replicated per row so a batch can be consumed independent of which
    /// file it came from.
    pub file_path: String,
    pub language: String,
}

/// A complete file's flattened node sequence, plus file-scope metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub nodes: Vec<NodeRecord>,
    pub file_path: String,
    pub language: String,
    pub metrics: crate::metrics::FlattenMetrics,
}

impl ParseResult {
    /// Every id in `[node.node_id, node.node_id + node.descendant_count]`,
    /// i.e. the contiguous subtree range (invariant 1). Panics if `node` is
    /// not actually a member of `self.nodes` — callers are expected to pass
    /// a record obtained from this same result.
    pub fn subtree<'a>(&'a self, node: &NodeRecord) -> &'a [NodeRecord] {
        let start = node.node_id as usize;
        let end = start + node.descendant_count as usize + 1;
        &self.nodes[start..end]
    }

    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}
