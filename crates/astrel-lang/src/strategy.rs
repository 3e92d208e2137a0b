//! Name- and value-extraction strategies named by a type configuration entry.

use strum_macros::{Display, EnumString};

/// How `name` is derived from a classified node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Default)]
#[strum(serialize_all = "snake_case")]
pub enum NameStrategy {
    /// Emit an empty name.
    #[default]
    None,
    /// Name is the node's full source slice (literals, keywords).
    NodeText,
    /// Search immediate children for a known identifier-type node.
    FindIdentifier,
    /// Descend into a `function_declarator` (C++), then `FindIdentifier`.
    FindQualifiedIdentifier,
    /// Walk up to the enclosing assignment and return its LHS identifier.
    FindAssignmentTarget,
    /// Find a `property_identifier` / dotted-access head.
    FindProperty,
    /// For a call node, return the callee name or dotted expression.
    FindCallTarget,
    /// Dispatch to the adapter's own `extract_name` override.
    Custom,
}

/// What native-context enrichment a classified node is eligible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Default)]
#[strum(serialize_all = "snake_case")]
pub enum ValueStrategy {
    #[default]
    None,
    FunctionWithParams,
    ClassWithMethods,
    VariableWithType,
    ArrowFunction,
    FunctionCall,
}
