//! Generic, cross-language name- and native-context-extraction helpers.
//!
//! Every one of these operates only on the current node, its immediate
//! children, or a depth-bounded walk toward the root — never by reentering
//! the flattener's main traversal.

use tree_sitter::Node;

use astrel_taxonomy::{SemanticType, OPERATOR_ARITHMETIC, OPERATOR_BITWISE, OPERATOR_COMPARISON, OPERATOR_LOGICAL};

/// Grammar node types across the corpus that represent a plain identifier.
pub const IDENTIFIER_TYPES: &[&str] = &[
    "identifier",
    "simple_identifier",
    "name",
    "property_identifier",
    "field_identifier",
    "qualified_identifier",
    "type_identifier",
    "variable_name",
    "word",
];

const ASSIGNMENT_TYPES: &[&str] = &[
    "assignment",
    "assignment_expression",
    "variable_declarator",
    "short_var_declaration",
];

const PARAMETER_CONTAINER_TYPES: &[&str] =
    &["parameters", "parameter_list", "formal_parameters"];

const MODIFIER_CONTAINER_TYPES: &[&str] = &["modifiers", "visibility_modifier", "access_modifier"];

/// Bound on how far `find_assignment_target` walks toward the root.
const MAX_WALK_DEPTH: u32 = 8;

/// The node's raw source slice, as UTF-8 (lossless for well-formed source;
/// malformed byte ranges yield an empty string rather than panicking).
pub fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.start_byte()..node.end_byte()]).unwrap_or("")
}

/// `NameStrategy::FindIdentifier` — first immediate child whose kind is a
/// known identifier type.
pub fn find_identifier_child(node: Node, source: &[u8]) -> String {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if IDENTIFIER_TYPES.contains(&child.kind()) {
            return node_text(child, source).to_string();
        }
    }
    String::new()
}

/// `NameStrategy::FindQualifiedIdentifier` — descend into a
/// `function_declarator` (the C++ path) before searching for an identifier,
/// so `Foo::bar` keeps its qualifier.
pub fn find_qualified_identifier(node: Node, source: &[u8]) -> String {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "function_declarator" {
            let direct = find_identifier_child(child, source);
            if !direct.is_empty() {
                return direct;
            }
            return find_qualified_identifier(child, source);
        }
    }
    find_identifier_child(node, source)
}

/// `NameStrategy::FindAssignmentTarget` — walk up toward the root looking
/// for the enclosing assignment/declarator, bounded by [`MAX_WALK_DEPTH`].
pub fn find_assignment_target(node: Node, source: &[u8]) -> String {
    let mut current = node;
    for _ in 0..MAX_WALK_DEPTH {
        let Some(parent) = current.parent() else {
            break;
        };
        if ASSIGNMENT_TYPES.contains(&parent.kind()) {
            let name = find_identifier_child(parent, source);
            if !name.is_empty() {
                return name;
            }
        }
        current = parent;
    }
    String::new()
}

/// `NameStrategy::FindProperty` — a `property_identifier`/`field_identifier`
/// child, falling back to the generic identifier search.
pub fn find_property(node: Node, source: &[u8]) -> String {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matches!(child.kind(), "property_identifier" | "field_identifier") {
            return node_text(child, source).to_string();
        }
    }
    find_identifier_child(node, source)
}

/// `NameStrategy::FindCallTarget` — the callee of a call node: its
/// `function` field if the grammar names one, the dotted expression text
/// for method-like calls, otherwise the first identifier child.
pub fn find_call_target(node: Node, source: &[u8]) -> String {
    if let Some(func) = node.child_by_field_name("function") {
        return node_text(func, source).to_string();
    }
    find_identifier_child(node, source)
}

/// Native-context parameter-name collection shared by every
/// `ValueStrategy::FunctionWithParams` adapter: finds the first parameter
/// list container child and collects each named parameter's identifier.
pub fn collect_parameter_names(node: Node, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if PARAMETER_CONTAINER_TYPES.contains(&child.kind()) {
            let mut names = Vec::new();
            let mut pcursor = child.walk();
            for param in child.children(&mut pcursor) {
                if !param.is_named() {
                    continue;
                }
                let name = find_identifier_child(param, source);
                if !name.is_empty() {
                    names.push(name);
                } else if IDENTIFIER_TYPES.contains(&param.kind()) {
                    names.push(node_text(param, source).to_string());
                }
            }
            return names;
        }
    }
    Vec::new()
}

/// Native-context modifier collection: any immediate child that is itself a
/// modifier/visibility container, taken verbatim.
pub fn collect_modifier_names(node: Node, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    let mut names = Vec::new();
    for child in node.children(&mut cursor) {
        if MODIFIER_CONTAINER_TYPES.contains(&child.kind()) {
            names.push(node_text(child, source).to_string());
        }
    }
    names
}

/// Grammars that collapse every binary operator into a single
/// `binary_expression`/`binary_operator` node type (C, C++, Java, C#, Go,
/// Rust, JS/TS) expose the operator token behind a field named `operator`.
/// The corpus bug flagged in the taxonomy design — comparison operators
/// mis-tagged as arithmetic — only reproduces in a table keyed purely by
/// raw type; this refines by inspecting the actual token so `==`/`<`/etc.
/// land on `OPERATOR_COMPARISON` even though `binary_expression` itself
/// defaults to `OPERATOR_ARITHMETIC` in the type table. Falls back to
/// `default` when there is no `operator` field or the token is unknown.
pub fn refine_binary_operator(node: Node, source: &[u8], default: SemanticType) -> SemanticType {
    let Some(operator) = node.child_by_field_name("operator") else {
        return default;
    };
    match node_text(operator, source) {
        "==" | "!=" | "<" | ">" | "<=" | ">=" | "<=>" | "===" | "!==" => OPERATOR_COMPARISON,
        "&&" | "||" => OPERATOR_LOGICAL,
        "&" | "|" | "^" | "<<" | ">>" | ">>>" => OPERATOR_BITWISE,
        "+" | "-" | "*" | "/" | "%" | "**" => OPERATOR_ARITHMETIC,
        _ => default,
    }
}

/// Doc-comment lookup for languages where the comment precedes the
/// definition as a sibling rather than living inside it (`///`, `/** */`
/// blocks ahead of a `fn`/`class`/`struct`).
pub fn find_preceding_comment(node: Node, source: &[u8]) -> Option<String> {
    let mut sibling = node.prev_sibling();
    while let Some(candidate) = sibling {
        if candidate.kind().contains("comment") {
            return Some(node_text(candidate, source).to_string());
        }
        if candidate.is_named() && !candidate.is_extra() {
            break;
        }
        sibling = candidate.prev_sibling();
    }
    None
}
