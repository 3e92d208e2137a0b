//! Category predicates over semantic type codes.
//!
//! Every predicate here tests the base code only — refinement bits (the low
//! 2 bits) are masked off first, so `is_X(c) == is_X(c | refinement)` for
//! any refinement value.

use crate::code::*;

pub fn is_definition(code: SemanticType) -> bool {
    matches!(
        base_code(code),
        DEFINITION_FUNCTION | DEFINITION_CLASS | DEFINITION_METHOD | DEFINITION_MODULE
    )
}

pub fn is_call(code: SemanticType) -> bool {
    matches!(
        base_code(code),
        CALL_FUNCTION | CALL_METHOD | CALL_CONSTRUCTOR | CALL_MACRO
    )
}

pub fn is_control_flow(code: SemanticType) -> bool {
    matches!(base_code(code), FLOW_CONDITIONAL | FLOW_LOOP | FLOW_JUMP | FLOW_SYNC)
}

pub fn is_identifier(code: SemanticType) -> bool {
    matches!(
        base_code(code),
        IDENTIFIER_NAME | IDENTIFIER_QUALIFIED | IDENTIFIER_LABEL | IDENTIFIER_ATTRIBUTE
    )
}

pub fn is_literal(code: SemanticType) -> bool {
    matches!(base_code(code), LITERAL_STRING | LITERAL_NUMBER | LITERAL_BOOLEAN | LITERAL_OTHER)
}

pub fn is_operator(code: SemanticType) -> bool {
    matches!(
        base_code(code),
        OPERATOR_ARITHMETIC | OPERATOR_COMPARISON | OPERATOR_LOGICAL | OPERATOR_BITWISE
    )
}

pub fn is_loop(code: SemanticType) -> bool {
    base_code(code) == FLOW_LOOP
}

pub fn is_conditional(code: SemanticType) -> bool {
    base_code(code) == FLOW_CONDITIONAL
}

pub fn is_jump(code: SemanticType) -> bool {
    base_code(code) == FLOW_JUMP
}

pub fn is_import(code: SemanticType) -> bool {
    base_code(code) == ORGANIZATION_IMPORT
}

pub fn is_export(code: SemanticType) -> bool {
    base_code(code) == ORGANIZATION_EXPORT
}

pub fn is_comment(code: SemanticType) -> bool {
    base_code(code) == METADATA_COMMENT
}

pub fn is_annotation(code: SemanticType) -> bool {
    base_code(code) == METADATA_ANNOTATION
}

pub fn is_function_definition(code: SemanticType) -> bool {
    base_code(code) == DEFINITION_FUNCTION
}

pub fn is_class_definition(code: SemanticType) -> bool {
    base_code(code) == DEFINITION_CLASS
}

pub fn is_variable_definition(code: SemanticType) -> bool {
    base_code(code) == VARIABLE_DECLARATION
}

pub fn is_function_call(code: SemanticType) -> bool {
    base_code(code) == CALL_FUNCTION
}

pub fn is_assignment(code: SemanticType) -> bool {
    base_code(code) == EXPRESSION_ASSIGNMENT
}

pub fn is_comparison(code: SemanticType) -> bool {
    base_code(code) == OPERATOR_COMPARISON
}

pub fn is_arithmetic(code: SemanticType) -> bool {
    base_code(code) == OPERATOR_ARITHMETIC
}

pub fn is_logical(code: SemanticType) -> bool {
    base_code(code) == OPERATOR_LOGICAL
}

pub fn is_string_literal(code: SemanticType) -> bool {
    base_code(code) == LITERAL_STRING
}

pub fn is_number_literal(code: SemanticType) -> bool {
    base_code(code) == LITERAL_NUMBER
}

pub fn is_boolean_literal(code: SemanticType) -> bool {
    base_code(code) == LITERAL_BOOLEAN
}

pub fn is_member_access(code: SemanticType) -> bool {
    base_code(code) == EXPRESSION_MEMBER_ACCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::refine;

    const ALL_PREDICATES: &[(&str, fn(SemanticType) -> bool, SemanticType)] = &[
        ("is_definition", is_definition, DEFINITION_FUNCTION),
        ("is_call", is_call, CALL_METHOD),
        ("is_control_flow", is_control_flow, FLOW_JUMP),
        ("is_identifier", is_identifier, IDENTIFIER_QUALIFIED),
        ("is_literal", is_literal, LITERAL_NUMBER),
        ("is_operator", is_operator, OPERATOR_BITWISE),
        ("is_loop", is_loop, FLOW_LOOP),
        ("is_conditional", is_conditional, FLOW_CONDITIONAL),
        ("is_jump", is_jump, FLOW_JUMP),
        ("is_import", is_import, ORGANIZATION_IMPORT),
        ("is_export", is_export, ORGANIZATION_EXPORT),
        ("is_comment", is_comment, METADATA_COMMENT),
        ("is_annotation", is_annotation, METADATA_ANNOTATION),
        ("is_function_definition", is_function_definition, DEFINITION_FUNCTION),
        ("is_class_definition", is_class_definition, DEFINITION_CLASS),
        ("is_variable_definition", is_variable_definition, VARIABLE_DECLARATION),
        ("is_function_call", is_function_call, CALL_FUNCTION),
        ("is_assignment", is_assignment, EXPRESSION_ASSIGNMENT),
        ("is_comparison", is_comparison, OPERATOR_COMPARISON),
        ("is_arithmetic", is_arithmetic, OPERATOR_ARITHMETIC),
        ("is_logical", is_logical, OPERATOR_LOGICAL),
        ("is_string_literal", is_string_literal, LITERAL_STRING),
        ("is_number_literal", is_number_literal, LITERAL_NUMBER),
        ("is_boolean_literal", is_boolean_literal, LITERAL_BOOLEAN),
        ("is_member_access", is_member_access, EXPRESSION_MEMBER_ACCESS),
    ];

    #[test]
    fn test_predicates_match_their_designated_code() {
        for (name, predicate, code) in ALL_PREDICATES {
            assert!(predicate(*code), "{name} should hold for its designated code");
        }
    }

    #[test]
    fn test_predicates_are_refinement_independent() {
        for refinement_bits in 0u8..4 {
            for (name, predicate, code) in ALL_PREDICATES {
                let refined = with_refinement(*code, refinement_bits);
                assert_eq!(
                    predicate(*code),
                    predicate(refined),
                    "{name} must be refinement-independent (bits={refinement_bits})"
                );
            }
        }
    }

    #[test]
    fn test_comparison_is_not_arithmetic() {
        // Regression guard for the corpus bug where comparison operators
        // were mis-tagged as arithmetic.
        assert!(is_comparison(OPERATOR_COMPARISON));
        assert!(!is_arithmetic(OPERATOR_COMPARISON));
        assert!(is_arithmetic(OPERATOR_ARITHMETIC));
        assert!(!is_comparison(OPERATOR_ARITHMETIC));
    }

    #[test]
    fn test_variable_mutability_refinement_does_not_affect_predicate() {
        let mutable = with_refinement(VARIABLE_DECLARATION, refine::VARIABLE_MUTABLE);
        let immutable = with_refinement(VARIABLE_DECLARATION, refine::VARIABLE_IMMUTABLE);
        assert!(is_variable_definition(mutable));
        assert!(is_variable_definition(immutable));
        assert_ne!(refinement(mutable), refinement(immutable));
    }
}
