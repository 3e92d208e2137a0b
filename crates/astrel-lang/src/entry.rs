//! Type configuration entries: the per-raw-type classification rule every
//! language's static table is built from.

use std::collections::HashMap;

use astrel_taxonomy::{NodeFlags, SemanticType, PARSER_CONSTRUCT};

use crate::strategy::{NameStrategy, ValueStrategy};

/// `(semantic_type, name_strategy, value_strategy, flags)` for one raw
/// grammar node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeConfigEntry {
    pub semantic_type: SemanticType,
    pub name_strategy: NameStrategy,
    pub value_strategy: ValueStrategy,
    pub flags: NodeFlags,
}

impl TypeConfigEntry {
    pub const fn new(
        semantic_type: SemanticType,
        name_strategy: NameStrategy,
        value_strategy: ValueStrategy,
        flags: NodeFlags,
    ) -> Self {
        Self {
            semantic_type,
            name_strategy,
            value_strategy,
            flags,
        }
    }
}

/// The fallback entry for raw types a language's table does not mention.
pub const DEFAULT_ENTRY: TypeConfigEntry =
    TypeConfigEntry::new(PARSER_CONSTRUCT, NameStrategy::None, ValueStrategy::None, 0);

/// Map from raw grammar node-type string to its classification rule.
pub type TypeTable = HashMap<&'static str, TypeConfigEntry>;

/// A row in a language module's static table literal:
/// `(raw_type, semantic_type, name_strategy, value_strategy, flags)`.
pub type TypeTableRow = (
    &'static str,
    SemanticType,
    NameStrategy,
    ValueStrategy,
    NodeFlags,
);

/// Build a [`TypeTable`] from a static row list. Shared by every language
/// module so the data stays declarative and the construction logic lives in
/// exactly one place.
pub fn build_table(rows: &[TypeTableRow]) -> TypeTable {
    rows.iter()
        .map(|(raw, semantic_type, name_strategy, value_strategy, flags)| {
            (
                *raw,
                TypeConfigEntry::new(*semantic_type, *name_strategy, *value_strategy, *flags),
            )
        })
        .collect()
}
