//! TypeScript (and TSX) adapter.
//!
//! Shares the JavaScript table and name-extraction logic since TS grammar
//! is a superset for the node types this taxonomy cares about, adding a
//! handful of TS-only declarations on top.

use std::sync::Arc;

use astrel_taxonomy::*;
use tree_sitter::Node;

use crate::adapter::LanguageAdapter;
use crate::entry::{build_table, TypeTable};
use crate::languages::javascript::{classify_shared, extract_name_shared, extract_signature_type_shared};
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> TypeTable {
    let mut table = crate::languages::javascript::table();
    table.extend(build_table(&[
        ("interface_declaration", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("type_alias_declaration", TYPE_ALIAS, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("enum_declaration", TYPE_COMPOSITE, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("ambient_declaration", ORGANIZATION_NAMESPACE, NameStrategy::None, ValueStrategy::None, 0),
    ]));
    table
}

pub struct TypeScriptAdapter {
    table: TypeTable,
    tsx: bool,
}

impl TypeScriptAdapter {
    pub fn new() -> Self {
        Self {
            table: table(),
            tsx: false,
        }
    }

    pub fn new_tsx() -> Self {
        Self {
            table: table(),
            tsx: true,
        }
    }
}

impl LanguageAdapter for TypeScriptAdapter {
    fn name(&self) -> &'static str {
        if self.tsx {
            "tsx"
        } else {
            "typescript"
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        if self.tsx {
            &["tsx"]
        } else {
            &["ts", "mts", "cts"]
        }
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        if self.tsx {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        } else {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        }
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
    Arc::new(TypeScriptAdapter::new())
}

pub fn tsx_adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(TypeScriptAdapter::new_tsx())
}
