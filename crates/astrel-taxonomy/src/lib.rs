//! # astrel-taxonomy
//!
//! The cross-language semantic type taxonomy: an 8-bit code (`[SS KK TT RR]`)
//! that every language adapter classifies its grammar's node types into, a
//! parallel 8-bit flags field, and the predicate/lookup functions defined
//! over both.
//!
//! This crate has no dependency on tree-sitter or any language grammar — it
//! is pure data and pure functions, shared by every adapter in `astrel-lang`
//! and consumed directly by `astrel-core`'s row schema.

mod code;
mod flags;
mod predicates;

pub use code::{
    base_code, get_kind, get_searchable_types, get_super_kind, refine, refinement, super_kind,
    type_code, type_name, with_refinement, SemanticType, SuperKind, UNKNOWN_CODE,
    UNKNOWN_SEMANTIC_TYPE,
};
pub use code::{
    CALL_CONSTRUCTOR, CALL_FUNCTION, CALL_MACRO, CALL_METHOD, COLLECTION_ARRAY, COLLECTION_OBJECT,
    COLLECTION_SET, COLLECTION_TUPLE, DEFINITION_CLASS, DEFINITION_FUNCTION, DEFINITION_METHOD,
    DEFINITION_MODULE, ERROR_CATCH, ERROR_FINALLY, ERROR_THROW, ERROR_TRY,
    EXPRESSION_ASSIGNMENT, EXPRESSION_INDEX_ACCESS, EXPRESSION_MEMBER_ACCESS, EXPRESSION_OTHER,
    FLOW_CONDITIONAL, FLOW_JUMP, FLOW_LOOP, FLOW_SYNC, IDENTIFIER_ATTRIBUTE, IDENTIFIER_LABEL,
    IDENTIFIER_NAME, IDENTIFIER_QUALIFIED, LITERAL_BOOLEAN, LITERAL_NUMBER, LITERAL_OTHER,
    LITERAL_STRING, METADATA_ANNOTATION, METADATA_COMMENT, METADATA_DECORATOR,
    METADATA_DOCSTRING, MISC_OTHER, MISC_PREPROCESSOR, MISC_SHEBANG, MISC_WHITESPACE,
    MODIFIER_BUILTIN, MODIFIER_KEYWORD, MODIFIER_STORAGE, MODIFIER_VISIBILITY,
    OPERATOR_ARITHMETIC, OPERATOR_BITWISE, OPERATOR_COMPARISON, OPERATOR_LOGICAL,
    ORGANIZATION_EXPORT, ORGANIZATION_IMPORT, ORGANIZATION_NAMESPACE, ORGANIZATION_PACKAGE,
    PARSER_CONSTRUCT, PARSER_DELIMITER, PARSER_PUNCTUATION, PARSER_SYNTAX, TYPE_ALIAS,
    TYPE_COMPOSITE, TYPE_GENERIC, TYPE_PRIMITIVE, VARIABLE_DECLARATION, VARIABLE_PARAMETER,
    VARIABLE_PROPERTY, VARIABLE_REFERENCE,
};
pub use flags::{has_flag, set_flag, NodeFlags, IS_BUILTIN, IS_KEYWORD, IS_PUBLIC, IS_PUNCTUATION, IS_SYNTAX_ONLY};
pub use predicates::*;
