//! The 8-bit semantic type code: `[SS KK TT RR]`, two bits apiece.
//!
//! `SS` (super-kind) and `KK` (kind) fix a coarse-to-fine category; `TT`
//! (super-type) names the leaf concept; `RR` (refinement) carries optional
//! sub-classification that every predicate in [`crate::predicates`] must
//! ignore. Masking `RR` to zero always yields one of the 64 named base
//! codes declared below.

use strum_macros::{Display, EnumString, FromRepr};

/// A semantic type code: super-kind, kind, super-type and refinement packed
/// into a single byte.
pub type SemanticType = u8;

/// Sentinel returned by [`type_code`] for an unrecognized name.
pub const UNKNOWN_CODE: SemanticType = 255;

/// String returned by [`type_name`] for an unrecognized code.
pub const UNKNOWN_SEMANTIC_TYPE: &str = "UNKNOWN_SEMANTIC_TYPE";

const REFINEMENT_MASK: u8 = 0b0000_0011;
const BASE_MASK: u8 = !REFINEMENT_MASK;

const fn pack(ss: u8, kk: u8, tt: u8) -> SemanticType {
    (ss << 6) | (kk << 4) | (tt << 2)
}

/// The coarsest classification level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, FromRepr, Display)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum SuperKind {
    DataStructure = 0,
    Computation = 1,
    ControlEffects = 2,
    MetaExternal = 3,
}

/// Mask off the refinement bits, leaving one of the 64 base codes.
pub const fn base_code(code: SemanticType) -> SemanticType {
    code & BASE_MASK
}

/// Extract the refinement nibble (low 2 bits).
pub const fn refinement(code: SemanticType) -> u8 {
    code & REFINEMENT_MASK
}

/// OR a refinement value into a base code's low bits.
pub const fn with_refinement(base: SemanticType, refinement: u8) -> SemanticType {
    (base & BASE_MASK) | (refinement & REFINEMENT_MASK)
}

/// Extract the super-kind from a code, refinement-independent.
pub fn super_kind(code: SemanticType) -> SuperKind {
    let ss = (code >> 6) & 0b11;
    SuperKind::from_repr(ss).expect("2-bit field always maps to a SuperKind variant")
}

/// Kind-level names, indexed `[super_kind][kind]`. Mirrors the constant
/// prefixes below (e.g. `DataStructure`/`Literal` → `LITERAL_*`).
const KIND_NAMES: [[&str; 4]; 4] = [
    ["Literal", "Type", "Variable", "Collection"],
    ["Call", "Operator", "Expression", "Definition"],
    ["Flow", "Error", "Organization", "Metadata"],
    ["Parser", "Identifier", "Modifier", "Misc"],
];

const SUPER_KIND_NAMES: [&str; 4] = [
    "DataStructure",
    "Computation",
    "ControlEffects",
    "MetaExternal",
];

/// Textual super-kind, for the query-layer-facing `get_super_kind` surface.
pub fn get_super_kind(code: SemanticType) -> &'static str {
    SUPER_KIND_NAMES[((code >> 6) & 0b11) as usize]
}

/// Textual kind, for the query-layer-facing `get_kind` surface.
pub fn get_kind(code: SemanticType) -> &'static str {
    let ss = ((code >> 6) & 0b11) as usize;
    let kk = ((code >> 4) & 0b11) as usize;
    KIND_NAMES[ss][kk]
}

// =============================================================================
// DataStructure
// =============================================================================

pub const LITERAL_STRING: SemanticType = pack(0, 0, 0);
pub const LITERAL_NUMBER: SemanticType = pack(0, 0, 1);
pub const LITERAL_BOOLEAN: SemanticType = pack(0, 0, 2);
pub const LITERAL_OTHER: SemanticType = pack(0, 0, 3);

pub const TYPE_PRIMITIVE: SemanticType = pack(0, 1, 0);
pub const TYPE_COMPOSITE: SemanticType = pack(0, 1, 1);
pub const TYPE_GENERIC: SemanticType = pack(0, 1, 2);
pub const TYPE_ALIAS: SemanticType = pack(0, 1, 3);

pub const VARIABLE_DECLARATION: SemanticType = pack(0, 2, 0);
pub const VARIABLE_REFERENCE: SemanticType = pack(0, 2, 1);
pub const VARIABLE_PROPERTY: SemanticType = pack(0, 2, 2);
pub const VARIABLE_PARAMETER: SemanticType = pack(0, 2, 3);

pub const COLLECTION_ARRAY: SemanticType = pack(0, 3, 0);
pub const COLLECTION_OBJECT: SemanticType = pack(0, 3, 1);
pub const COLLECTION_TUPLE: SemanticType = pack(0, 3, 2);
pub const COLLECTION_SET: SemanticType = pack(0, 3, 3);

// =============================================================================
// Computation
// =============================================================================

pub const CALL_FUNCTION: SemanticType = pack(1, 0, 0);
pub const CALL_METHOD: SemanticType = pack(1, 0, 1);
pub const CALL_CONSTRUCTOR: SemanticType = pack(1, 0, 2);
pub const CALL_MACRO: SemanticType = pack(1, 0, 3);

pub const OPERATOR_ARITHMETIC: SemanticType = pack(1, 1, 0);
pub const OPERATOR_COMPARISON: SemanticType = pack(1, 1, 1);
pub const OPERATOR_LOGICAL: SemanticType = pack(1, 1, 2);
pub const OPERATOR_BITWISE: SemanticType = pack(1, 1, 3);

pub const EXPRESSION_ASSIGNMENT: SemanticType = pack(1, 2, 0);
pub const EXPRESSION_MEMBER_ACCESS: SemanticType = pack(1, 2, 1);
pub const EXPRESSION_INDEX_ACCESS: SemanticType = pack(1, 2, 2);
pub const EXPRESSION_OTHER: SemanticType = pack(1, 2, 3);

pub const DEFINITION_FUNCTION: SemanticType = pack(1, 3, 0);
pub const DEFINITION_CLASS: SemanticType = pack(1, 3, 1);
pub const DEFINITION_METHOD: SemanticType = pack(1, 3, 2);
pub const DEFINITION_MODULE: SemanticType = pack(1, 3, 3);

// =============================================================================
// ControlEffects
// =============================================================================

pub const FLOW_CONDITIONAL: SemanticType = pack(2, 0, 0);
pub const FLOW_LOOP: SemanticType = pack(2, 0, 1);
pub const FLOW_JUMP: SemanticType = pack(2, 0, 2);
pub const FLOW_SYNC: SemanticType = pack(2, 0, 3);

pub const ERROR_TRY: SemanticType = pack(2, 1, 0);
pub const ERROR_CATCH: SemanticType = pack(2, 1, 1);
pub const ERROR_THROW: SemanticType = pack(2, 1, 2);
pub const ERROR_FINALLY: SemanticType = pack(2, 1, 3);

pub const ORGANIZATION_IMPORT: SemanticType = pack(2, 2, 0);
pub const ORGANIZATION_EXPORT: SemanticType = pack(2, 2, 1);
pub const ORGANIZATION_NAMESPACE: SemanticType = pack(2, 2, 2);
pub const ORGANIZATION_PACKAGE: SemanticType = pack(2, 2, 3);

pub const METADATA_COMMENT: SemanticType = pack(2, 3, 0);
pub const METADATA_ANNOTATION: SemanticType = pack(2, 3, 1);
pub const METADATA_DECORATOR: SemanticType = pack(2, 3, 2);
pub const METADATA_DOCSTRING: SemanticType = pack(2, 3, 3);

// =============================================================================
// MetaExternal
// =============================================================================

pub const PARSER_CONSTRUCT: SemanticType = pack(3, 0, 0);
pub const PARSER_SYNTAX: SemanticType = pack(3, 0, 1);
pub const PARSER_PUNCTUATION: SemanticType = pack(3, 0, 2);
pub const PARSER_DELIMITER: SemanticType = pack(3, 0, 3);

pub const IDENTIFIER_NAME: SemanticType = pack(3, 1, 0);
pub const IDENTIFIER_QUALIFIED: SemanticType = pack(3, 1, 1);
pub const IDENTIFIER_LABEL: SemanticType = pack(3, 1, 2);
pub const IDENTIFIER_ATTRIBUTE: SemanticType = pack(3, 1, 3);

pub const MODIFIER_KEYWORD: SemanticType = pack(3, 2, 0);
pub const MODIFIER_BUILTIN: SemanticType = pack(3, 2, 1);
pub const MODIFIER_VISIBILITY: SemanticType = pack(3, 2, 2);
pub const MODIFIER_STORAGE: SemanticType = pack(3, 2, 3);

pub const MISC_WHITESPACE: SemanticType = pack(3, 3, 0);
pub const MISC_SHEBANG: SemanticType = pack(3, 3, 1);
pub const MISC_PREPROCESSOR: SemanticType = pack(3, 3, 2);
pub const MISC_OTHER: SemanticType = pack(3, 3, 3);

/// Refinement nibble values. Purely informational — every predicate masks
/// these off before comparing.
pub mod refine {
    pub const FUNCTION_REGULAR: u8 = 0;
    pub const FUNCTION_LAMBDA: u8 = 1;
    pub const FUNCTION_ASYNC: u8 = 2;
    pub const FUNCTION_CONSTRUCTOR: u8 = 3;

    pub const LOOP_COUNTER: u8 = 0;
    pub const LOOP_ITERATOR: u8 = 1;
    pub const LOOP_CONDITIONAL: u8 = 2;

    pub const VARIABLE_MUTABLE: u8 = 0;
    pub const VARIABLE_IMMUTABLE: u8 = 1;
    pub const VARIABLE_FIELD: u8 = 2;
    pub const VARIABLE_PARAMETER: u8 = 3;
}

macro_rules! type_table {
    ($($name:ident),* $(,)?) => {
        const TYPE_TABLE: &[(&str, SemanticType)] = &[
            $((stringify!($name), $name)),*
        ];
    };
}

type_table![
    LITERAL_STRING,
    LITERAL_NUMBER,
    LITERAL_BOOLEAN,
    LITERAL_OTHER,
    TYPE_PRIMITIVE,
    TYPE_COMPOSITE,
    TYPE_GENERIC,
    TYPE_ALIAS,
    VARIABLE_DECLARATION,
    VARIABLE_REFERENCE,
    VARIABLE_PROPERTY,
    VARIABLE_PARAMETER,
    COLLECTION_ARRAY,
    COLLECTION_OBJECT,
    COLLECTION_TUPLE,
    COLLECTION_SET,
    CALL_FUNCTION,
    CALL_METHOD,
    CALL_CONSTRUCTOR,
    CALL_MACRO,
    OPERATOR_ARITHMETIC,
    OPERATOR_COMPARISON,
    OPERATOR_LOGICAL,
    OPERATOR_BITWISE,
    EXPRESSION_ASSIGNMENT,
    EXPRESSION_MEMBER_ACCESS,
    EXPRESSION_INDEX_ACCESS,
    EXPRESSION_OTHER,
    DEFINITION_FUNCTION,
    DEFINITION_CLASS,
    DEFINITION_METHOD,
    DEFINITION_MODULE,
    FLOW_CONDITIONAL,
    FLOW_LOOP,
    FLOW_JUMP,
    FLOW_SYNC,
    ERROR_TRY,
    ERROR_CATCH,
    ERROR_THROW,
    ERROR_FINALLY,
    ORGANIZATION_IMPORT,
    ORGANIZATION_EXPORT,
    ORGANIZATION_NAMESPACE,
    ORGANIZATION_PACKAGE,
    METADATA_COMMENT,
    METADATA_ANNOTATION,
    METADATA_DECORATOR,
    METADATA_DOCSTRING,
    PARSER_CONSTRUCT,
    PARSER_SYNTAX,
    PARSER_PUNCTUATION,
    PARSER_DELIMITER,
    IDENTIFIER_NAME,
    IDENTIFIER_QUALIFIED,
    IDENTIFIER_LABEL,
    IDENTIFIER_ATTRIBUTE,
    MODIFIER_KEYWORD,
    MODIFIER_BUILTIN,
    MODIFIER_VISIBILITY,
    MODIFIER_STORAGE,
    MISC_WHITESPACE,
    MISC_SHEBANG,
    MISC_PREPROCESSOR,
    MISC_OTHER,
];

/// Map a code to its constant name. Refinement bits are masked off first;
/// an unrecognized base code yields [`UNKNOWN_SEMANTIC_TYPE`].
pub fn type_name(code: SemanticType) -> &'static str {
    let base = base_code(code);
    TYPE_TABLE
        .iter()
        .find(|(_, c)| *c == base)
        .map(|(name, _)| *name)
        .unwrap_or(UNKNOWN_SEMANTIC_TYPE)
}

/// Map a constant name back to its code. An unrecognized name yields
/// [`UNKNOWN_CODE`].
pub fn type_code(name: &str) -> SemanticType {
    TYPE_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or(UNKNOWN_CODE)
}

/// Codes suitable for user-facing search: definitions, calls, imports and
/// exports. No duplicates.
pub fn get_searchable_types() -> Vec<SemanticType> {
    vec![
        DEFINITION_FUNCTION,
        DEFINITION_CLASS,
        DEFINITION_METHOD,
        DEFINITION_MODULE,
        CALL_FUNCTION,
        CALL_METHOD,
        CALL_CONSTRUCTOR,
        CALL_MACRO,
        ORGANIZATION_IMPORT,
        ORGANIZATION_EXPORT,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_round_trip_every_defined_code() {
        for (name, code) in TYPE_TABLE {
            assert_eq!(type_code(type_name(*code)), *code, "code round-trip for {name}");
            assert_eq!(type_name(type_code(name)), *name, "name round-trip for {name}");
        }
    }

    #[test]
    fn test_unknown_code_and_name() {
        assert_eq!(type_name(UNKNOWN_CODE), UNKNOWN_SEMANTIC_TYPE);
        assert_eq!(type_code("NOT_A_REAL_TYPE"), UNKNOWN_CODE);
    }

    #[test]
    fn test_all_64_base_codes_distinct() {
        let codes: HashSet<_> = TYPE_TABLE.iter().map(|(_, c)| *c).collect();
        assert_eq!(codes.len(), 64);
        assert_eq!(TYPE_TABLE.len(), 64);
    }

    #[test]
    fn test_refinement_round_trip() {
        let with_r = with_refinement(DEFINITION_FUNCTION, refine::FUNCTION_ASYNC);
        assert_eq!(base_code(with_r), DEFINITION_FUNCTION);
        assert_eq!(refinement(with_r), refine::FUNCTION_ASYNC);
    }

    #[test]
    fn test_get_super_kind_and_kind() {
        assert_eq!(get_super_kind(DEFINITION_FUNCTION), "Computation");
        assert_eq!(get_kind(DEFINITION_FUNCTION), "Definition");
        assert_eq!(get_super_kind(FLOW_LOOP), "ControlEffects");
        assert_eq!(get_kind(FLOW_LOOP), "Flow");
    }

    #[test]
    fn test_super_kind_extraction() {
        assert_eq!(super_kind(LITERAL_STRING), SuperKind::DataStructure);
        assert_eq!(super_kind(PARSER_CONSTRUCT), SuperKind::MetaExternal);
    }

    #[test]
    fn test_searchable_types_no_duplicates() {
        let types = get_searchable_types();
        let set: HashSet<_> = types.iter().collect();
        assert_eq!(set.len(), types.len());
    }
}
