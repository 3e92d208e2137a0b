//! The unified backend: grammar-driven iterative DFS that turns a parsed
//! tree-sitter tree into a flat, ordered [`crate::node::NodeRecord`]
//! sequence with O(1) descendant counts and stable DFS-preorder ids.

use std::time::Instant;

use astrel_error::{Error, ErrorKind, Result};
use astrel_lang::{LanguageAdapter, NameStrategy, ValueStrategy};
use astrel_taxonomy::PARSER_SYNTAX;
use tree_sitter::Node as TsNode;

use crate::metrics::FlattenMetrics;
use crate::node::{NodeRecord, ParseResult};
use crate::options::{ContextMode, FlattenOptions};
use crate::peek::compute_peek;

/// Parse `source` under `language` and flatten the resulting tree into an
/// ordered node sequence. Pure function of `(source, language, options)` —
/// same inputs always produce byte-identical output (invariant 6).
///
/// Tree-sitter's error-recovery guarantee means this only fails for
/// reasons external to the source text itself: an unregistered language, or
/// (in practice unreachable once the registry's ABI check has passed) the
/// parser refusing to produce a tree at all.
pub fn parse_to_result(
    source: &[u8],
    language: &str,
    file_path: &str,
    options: &FlattenOptions,
) -> Result<ParseResult> {
    let adapter = astrel_lang::REGISTRY.get_by_name(language).ok_or_else(|| {
        Error::unsupported_language(language)
            .with_operation("core::parse_to_result")
            .with_context("file_path", file_path.to_string())
    })?;

    let start = Instant::now();

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&adapter.tree_sitter_language())
        .map_err(|err| {
            Error::new(ErrorKind::GrammarError, err.to_string())
                .with_operation("core::parse_to_result")
                .with_context("language", language.to_string())
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| {
        Error::new(ErrorKind::ParseFailed, "tree-sitter returned no tree")
            .with_operation("core::parse_to_result")
            .with_context("file_path", file_path.to_string())
            .with_context("language", language.to_string())
    })?;

    let mut nodes = flatten_tree(tree.root_node(), source, adapter.as_ref(), options);
    for node in &mut nodes {
        node.file_path = file_path.to_string();
        node.language = language.to_string();
    }
    let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);

    let metrics = FlattenMetrics {
        node_count: nodes.len(),
        max_depth,
        elapsed: start.elapsed(),
    };

    Ok(ParseResult {
        nodes,
        file_path: file_path.to_string(),
        language: language.to_string(),
        metrics,
    })
}

/// One explicit-stack work item. `Enter` assigns a preorder id and records
/// everything knowable at visit time; `Exit` runs after every descendant of
/// that node has been visited and finalizes `descendant_count`. Pushing
/// `Exit(id)` immediately after `Enter` and the node's children *after*
/// that keeps the stack LIFO order correct: children pop (and fully
/// recurse) before their own `Exit` marker is reached.
enum Frame<'tree> {
    Enter {
        node: TsNode<'tree>,
        parent_id: Option<i64>,
        depth: u32,
        sibling_index: u32,
    },
    Exit(usize),
}

/// Iterative preorder DFS with postorder descendant-count finalization.
/// Recursion is deliberately avoided: adversarial or deeply nested source
/// must not risk stack exhaustion.
fn flatten_tree(
    root: TsNode,
    source: &[u8],
    adapter: &dyn LanguageAdapter,
    options: &FlattenOptions,
) -> Vec<NodeRecord> {
    let mut nodes: Vec<NodeRecord> = Vec::new();
    let mut next_id: i64 = 0;

    let mut stack = vec![Frame::Enter {
        node: root,
        parent_id: None,
        depth: 0,
        sibling_index: 0,
    }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Exit(node_id) => {
                let descendant_count = (next_id as usize) - node_id - 1;
                nodes[node_id].descendant_count = descendant_count as u32;
            }
            Frame::Enter {
                node,
                parent_id,
                depth,
                sibling_index,
            } => {
                let node_id = next_id;
                next_id += 1;

                let record = build_record(node, parent_id, node_id, depth, sibling_index, source, adapter, options);
                nodes.push(record);

                stack.push(Frame::Exit(node_id as usize));

                let children = flattened_children(node, adapter);
                let children_count = children.len() as u32;
                nodes[node_id as usize].children_count = children_count;

                for (i, child) in children.into_iter().enumerate().rev() {
                    stack.push(Frame::Enter {
                        node: child,
                        parent_id: Some(node_id),
                        depth: depth + 1,
                        sibling_index: i as u32,
                    });
                }
            }
        }
    }

    nodes
}

/// Children kept in the flattened sequence: every named child, plus any
/// anonymous child whose raw type the adapter's table explicitly opts into
/// (e.g. `(`/`)`/`:` entries present so punctuation can carry
/// `IS_SYNTAX_ONLY`). Anonymous tokens the table says nothing about are
/// grammar noise and are skipped.
fn flattened_children<'tree>(node: TsNode<'tree>, adapter: &dyn LanguageAdapter) -> Vec<TsNode<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.is_named() || adapter.type_table().contains_key(child.kind()))
        .collect()
}

fn build_record(
    node: TsNode,
    parent_id: Option<i64>,
    node_id: i64,
    depth: u32,
    sibling_index: u32,
    source: &[u8],
    adapter: &dyn LanguageAdapter,
    options: &FlattenOptions,
) -> NodeRecord {
    let (semantic_type, flags, name_strategy, value_strategy) = if node.is_error() || node.is_missing() {
        (PARSER_SYNTAX, 0, NameStrategy::None, ValueStrategy::None)
    } else {
        adapter.classify(node, source)
    };

    let name = if options.context.wants_name() {
        adapter.extract_name(node, source, name_strategy)
    } else {
        String::new()
    };

    let start_byte = node.start_byte();
    let end_byte = node.end_byte();
    let start_point = node.start_position();
    let end_point = node.end_position();

    let peek = compute_peek(&source[start_byte..end_byte.max(start_byte)], options.peek);

    let (signature_type, parameters, modifiers, doc_comment) = if options.context.wants_native_context()
        && value_strategy != ValueStrategy::None
    {
        let signature_type = adapter.extract_signature_type(node, source);
        let parameters = adapter.extract_parameters(node, source, value_strategy);
        let modifiers = adapter.extract_modifiers(node, source);
        let doc_comment = adapter.extract_doc_comment(node, source).unwrap_or_default();
        (signature_type, parameters, modifiers, doc_comment)
    } else {
        (String::new(), Vec::new(), Vec::new(), String::new())
    };

    NodeRecord {
        node_id,
        parent_id,
        depth,
        sibling_index,
        // finalized by the caller once children are known (`children_count`)
        // and by the Exit frame (`descendant_count`).
        children_count: 0,
        descendant_count: 0,
        r#type: node.kind().to_string(),
        semantic_type,
        flags,
        name,
        signature_type,
        parameters,
        modifiers,
        start_byte,
        end_byte,
        start_line: start_point.row as u32 + 1,
        end_line: end_point.row as u32 + 1,
        start_column: start_point.column as u32 + 1,
        end_column: end_point.column as u32 + 1,
        peek,
        doc_comment,
        file_path: String::new(),
        language: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peek::PeekMode;

    fn parse(source: &str, language: &str) -> ParseResult {
        parse_to_result(source.as_bytes(), language, "test.src", &FlattenOptions::default()).unwrap()
    }

    // Invariant 1: contiguous subtree.
    #[test]
    fn test_contiguous_subtree_range() {
        let result = parse("if (a) { b(); c(); }\n", "javascript");
        let if_stmt = result
            .nodes
            .iter()
            .find(|n| n.r#type == "if_statement")
            .expect("if_statement present");
        let subtree = result.subtree(if_stmt);
        let ids: Vec<i64> = subtree.iter().map(|n| n.node_id).collect();
        let expected: Vec<i64> =
            (if_stmt.node_id..=if_stmt.node_id + if_stmt.descendant_count as i64).collect();
        assert_eq!(ids, expected);
    }

    // Invariant 2: parent precedes child, depth consistency.
    #[test]
    fn test_parent_precedes_child_and_depth_consistency() {
        let result = parse("def f():\n    pass\n", "python");
        let by_id: std::collections::HashMap<i64, &crate::node::NodeRecord> =
            result.nodes.iter().map(|n| (n.node_id, n)).collect();
        for node in &result.nodes {
            if let Some(parent_id) = node.parent_id {
                assert!(parent_id < node.node_id);
                let parent = by_id[&parent_id];
                assert_eq!(parent.depth + 1, node.depth);
            } else {
                assert_eq!(node.depth, 0);
            }
        }
    }

    // Invariant 3/4: descendant-sum recurrence.
    #[test]
    fn test_descendant_count_recurrence() {
        let result = parse("class Foo:\n    def bar(self):\n        return 1\n", "python");
        let mut children_by_parent: std::collections::HashMap<i64, Vec<i64>> = std::collections::HashMap::new();
        for node in &result.nodes {
            if let Some(parent_id) = node.parent_id {
                children_by_parent.entry(parent_id).or_default().push(node.node_id);
            }
        }
        let by_id: std::collections::HashMap<i64, &crate::node::NodeRecord> =
            result.nodes.iter().map(|n| (n.node_id, n)).collect();
        for node in &result.nodes {
            let children = children_by_parent.get(&node.node_id).cloned().unwrap_or_default();
            let sum: u32 = children.iter().map(|id| by_id[id].descendant_count + 1).sum();
            assert_eq!(node.descendant_count, sum, "node {} ({})", node.node_id, node.r#type);
            assert_eq!(node.children_count as usize, children.len());
        }
    }

    // Invariant 5/6: span nesting.
    #[test]
    fn test_span_nesting() {
        let result = parse("fn main() {\n    let x = 1 + 2;\n}\n", "rust");
        let by_id: std::collections::HashMap<i64, &crate::node::NodeRecord> =
            result.nodes.iter().map(|n| (n.node_id, n)).collect();
        for node in &result.nodes {
            if let Some(parent_id) = node.parent_id {
                let parent = by_id[&parent_id];
                assert!(parent.start_byte <= node.start_byte);
                assert!(node.end_byte <= parent.end_byte);
            }
        }
    }

    // Invariant 5: sibling order = source order.
    #[test]
    fn test_sibling_monotonicity() {
        let result = parse("a; b; c;\n", "javascript");
        let mut children_by_parent: std::collections::HashMap<i64, Vec<&crate::node::NodeRecord>> =
            std::collections::HashMap::new();
        for node in &result.nodes {
            if let Some(parent_id) = node.parent_id {
                children_by_parent.entry(parent_id).or_default().push(node);
            }
        }
        for siblings in children_by_parent.values() {
            for pair in siblings.windows(2) {
                assert!(pair[0].start_byte <= pair[1].start_byte);
            }
        }
    }

    // Invariant 6: determinism.
    #[test]
    fn test_deterministic_across_runs() {
        let source = "def f():\n    return 1\n";
        let a = parse(source, "python");
        let b = parse(source, "python");
        assert_eq!(a.nodes.len(), b.nodes.len());
        for (x, y) in a.nodes.iter().zip(b.nodes.iter()) {
            assert_eq!(x, y);
        }
    }

    // Scenario A: Python function count.
    #[test]
    fn test_scenario_python_function_count() {
        let result = parse("def f():\n    pass\ndef g():\n    pass\n", "python");
        let functions: Vec<_> = result
            .nodes
            .iter()
            .filter(|n| astrel_taxonomy::is_function_definition(n.semantic_type))
            .collect();
        assert!(functions.len() >= 2);
        let names: std::collections::HashSet<&str> = functions.iter().map(|n| n.name.as_str()).collect();
        assert!(names.contains("f"));
        assert!(names.contains("g"));
        for f in &functions {
            assert!(f.children_count >= 2);
        }
        let ids: std::collections::HashSet<i64> = functions.iter().map(|n| n.node_id).collect();
        assert_eq!(ids.len(), functions.len());
    }

    // Scenario B: C++ qualified name.
    #[test]
    fn test_scenario_cpp_qualified_name() {
        let result = parse("void Foo::bar() {}\n", "cpp");
        let func = result
            .nodes
            .iter()
            .find(|n| n.r#type == "function_definition")
            .expect("function_definition present");
        assert_eq!(func.name, "Foo::bar");
        assert!(astrel_taxonomy::is_function_definition(func.semantic_type));
    }

    // Scenario C: Go variable mutability refinement.
    #[test]
    fn test_scenario_go_variable_mutability() {
        let result = parse("package p\nvar x int = 1\nconst y = 2\n", "go");
        let x = result
            .nodes
            .iter()
            .find(|n| n.r#type == "var_declaration")
            .expect("var_declaration present");
        assert!(astrel_taxonomy::is_variable_definition(x.semantic_type));
        assert_eq!(
            astrel_taxonomy::refinement(x.semantic_type),
            astrel_taxonomy::refine::VARIABLE_MUTABLE
        );
        let y = result
            .nodes
            .iter()
            .find(|n| n.r#type == "const_declaration")
            .expect("const_declaration present");
        assert!(astrel_taxonomy::is_variable_definition(y.semantic_type));
        assert_eq!(
            astrel_taxonomy::refinement(y.semantic_type),
            astrel_taxonomy::refine::VARIABLE_IMMUTABLE
        );
    }

    // Scenario D: subtree range for an if-statement covers exactly its
    // condition, block, and both call statements.
    #[test]
    fn test_scenario_js_if_subtree_range() {
        let result = parse("if (a) { b(); c(); }\n", "javascript");
        let if_stmt = result.nodes.iter().find(|n| n.r#type == "if_statement").unwrap();
        let subtree = result.subtree(if_stmt);
        let calls: Vec<_> = subtree
            .iter()
            .filter(|n| astrel_taxonomy::is_call(n.semantic_type))
            .collect();
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_error_node_gets_parser_syntax_classification() {
        let result = parse("def f(:\n", "python");
        let has_error = result.nodes.iter().any(|n| n.semantic_type == PARSER_SYNTAX);
        assert!(has_error, "malformed source should surface an ERROR/PARSER_SYNTAX node");
    }

    #[test]
    fn test_context_mode_gates_native_enrichment() {
        let none_result = parse_to_result(
            b"def f(a, b):\n    pass\n",
            "python",
            "t.py",
            &FlattenOptions::default().with_context(ContextMode::None),
        )
        .unwrap();
        assert!(none_result.nodes.iter().all(|n| n.parameters.is_empty()));

        let native_result = parse_to_result(
            b"def f(a, b):\n    pass\n",
            "python",
            "t.py",
            &FlattenOptions::default().with_context(ContextMode::Native),
        )
        .unwrap();
        let func = native_result
            .nodes
            .iter()
            .find(|n| n.r#type == "function_definition")
            .unwrap();
        assert_eq!(func.parameters, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_node_types_only_suppresses_name() {
        let result = parse_to_result(
            b"def f():\n    pass\n",
            "python",
            "t.py",
            &FlattenOptions::default().with_context(ContextMode::NodeTypesOnly),
        )
        .unwrap();
        assert!(result.nodes.iter().all(|n| n.name.is_empty()));
    }

    #[test]
    fn test_peek_none_mode_is_always_empty() {
        let result = parse_to_result(
            b"def f():\n    pass\n",
            "python",
            "t.py",
            &FlattenOptions::default().with_peek(PeekMode::None),
        )
        .unwrap();
        assert!(result.nodes.iter().all(|n| n.peek.is_empty()));
    }

    // Regression: grammars that collapse every binary operator into one
    // `binary_expression` node type must still distinguish comparison from
    // arithmetic by inspecting the operator token, not just the raw type.
    #[test]
    fn test_js_binary_expression_comparison_is_not_arithmetic() {
        let result = parse("a == b;\na + b;\n", "javascript");
        let comparisons: Vec<_> = result
            .nodes
            .iter()
            .filter(|n| n.r#type == "binary_expression" && astrel_taxonomy::is_comparison(n.semantic_type))
            .collect();
        let arithmetic: Vec<_> = result
            .nodes
            .iter()
            .filter(|n| n.r#type == "binary_expression" && astrel_taxonomy::is_arithmetic(n.semantic_type))
            .collect();
        assert_eq!(comparisons.len(), 1);
        assert_eq!(arithmetic.len(), 1);
    }

    #[test]
    fn test_c_binary_expression_comparison_is_not_arithmetic() {
        let result = parse("int f() { return a < b; }\n", "c");
        let has_comparison = result
            .nodes
            .iter()
            .any(|n| n.r#type == "binary_expression" && astrel_taxonomy::is_comparison(n.semantic_type));
        assert!(has_comparison);
    }

    #[test]
    fn test_unsupported_language_errors() {
        let err = parse_to_result(b"x", "cobol", "t.cbl", &FlattenOptions::default()).unwrap_err();
        assert_eq!(err.kind(), astrel_error::ErrorKind::UnsupportedLanguage);
    }
}
