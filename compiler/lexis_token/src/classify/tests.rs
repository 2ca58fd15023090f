use pretty_assertions::assert_eq;

use super::*;

fn spellings(range: TokenRange) -> Vec<&'static str> {
    range.iter().map(TokenKind::spelling).collect()
}

// === Contiguous blocks ===

#[test]
fn test_assignment_block_contents() {
    assert_eq!(
        spellings(TokenKind::ASSIGNMENT_OPERATORS),
        ["=", "|=", "^=", "&=", "<<=", ">>=", "+=", "-=", "*=", "~/=", "/=", "%=", "??="]
    );
}

#[test]
fn test_relational_block_contents() {
    assert_eq!(
        spellings(TokenKind::RELATIONAL_OPERATORS),
        ["<", ">", "<=", ">="]
    );
}

#[test]
fn test_equality_block_contents() {
    assert_eq!(
        spellings(TokenKind::EQUALITY_OPERATORS),
        ["==", "!=", "===", "!=="]
    );
}

#[test]
fn test_block_predicates_match_block_membership() {
    for kind in TokenKind::ALL.iter().copied() {
        assert_eq!(
            kind.is_assignment_operator(),
            TokenKind::ASSIGNMENT_OPERATORS.as_slice().contains(&kind),
            "{kind:?}"
        );
        assert_eq!(
            kind.is_relational_operator(),
            TokenKind::RELATIONAL_OPERATORS.as_slice().contains(&kind),
            "{kind:?}"
        );
        assert_eq!(
            kind.is_equality_operator(),
            TokenKind::EQUALITY_OPERATORS.as_slice().contains(&kind),
            "{kind:?}"
        );
    }
}

#[test]
fn test_assignment_block_shares_precedence() {
    for kind in TokenKind::ASSIGNMENT_OPERATORS.iter() {
        assert_eq!(kind.precedence(), crate::precedence::ASSIGNMENT, "{kind:?}");
    }
}

#[test]
fn test_range_len() {
    assert_eq!(TokenKind::ASSIGNMENT_OPERATORS.len(), 13);
    assert_eq!(TokenKind::RELATIONAL_OPERATORS.len(), 4);
    assert!(!TokenKind::EQUALITY_OPERATORS.is_empty());
    assert!(TokenRange::new(TokenKind::Gt, TokenKind::Lt).is_empty());
    assert_eq!(TokenRange::new(TokenKind::Gt, TokenKind::Lt).iter().count(), 0);
}

// === Single-kind predicates ===

#[test]
fn test_strict_equality() {
    assert!(!TokenKind::Eq.is_strict_equality_operator());
    assert!(!TokenKind::Ne.is_strict_equality_operator());
    assert!(TokenKind::EqStrict.is_strict_equality_operator());
    assert!(TokenKind::NeStrict.is_strict_equality_operator());
}

#[test]
fn test_type_operators() {
    assert!(TokenKind::Is.is_type_test_operator());
    assert!(TokenKind::IsNot.is_type_test_operator());
    assert!(!TokenKind::As.is_type_test_operator());
    assert!(TokenKind::As.is_type_cast_operator());
    assert!(!TokenKind::Is.is_type_cast_operator());
}

#[test]
fn test_index_operators() {
    assert!(TokenKind::Index.is_index_operator());
    assert!(TokenKind::AssignIndex.is_index_operator());
    assert!(!TokenKind::LBrack.is_index_operator());
}

#[test]
fn test_keyword_and_pseudo_keyword() {
    assert!(TokenKind::Class.is_keyword());
    assert!(!TokenKind::Class.is_pseudo_keyword());
    assert!(TokenKind::Abstract.is_pseudo_keyword());
    assert!(!TokenKind::Abstract.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Ident.is_pseudo_keyword());
}

#[test]
fn test_identifier_like() {
    assert!(TokenKind::Ident.is_identifier_like());
    assert!(TokenKind::Get.is_identifier_like());
    assert!(TokenKind::Operator.is_identifier_like());
    assert!(!TokenKind::Class.is_identifier_like());
    assert!(!TokenKind::String.is_identifier_like());

    for kind in TokenKind::ALL.iter().copied() {
        if kind.is_pseudo_keyword() {
            assert!(kind.is_identifier_like(), "{kind:?}");
        }
    }
}

#[test]
fn test_can_be_overloaded() {
    assert!(TokenKind::Index.can_be_overloaded());
    assert!(TokenKind::AssignIndex.can_be_overloaded());
    assert!(!TokenKind::Assign.can_be_overloaded());
    assert!(TokenKind::Eq.can_be_overloaded());
    assert!(!TokenKind::Ne.can_be_overloaded());
    assert!(!TokenKind::EqStrict.can_be_overloaded());
    assert!(!TokenKind::And.can_be_overloaded());
    assert!(!TokenKind::Not.can_be_overloaded());
}

#[test]
fn test_overloadable_set_is_exact() {
    let overloadable: Vec<_> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.can_be_overloaded())
        .map(TokenKind::spelling)
        .collect();
    assert_eq!(
        overloadable,
        [
            "|", "^", "&", "~", "<<", ">>", "+", "-", "*", "/", "~/", "%", "==", "<", ">",
            "<=", ">=", "[]", "[]="
        ]
    );
}

#[test]
fn test_needs_literal_token() {
    let literal: Vec<_> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.needs_literal_token())
        .collect();
    assert_eq!(
        literal,
        [
            TokenKind::String,
            TokenKind::Integer,
            TokenKind::Double,
            TokenKind::InterpolVar,
            TokenKind::Error,
        ]
    );
}

#[test]
fn test_operator_arity() {
    assert!(TokenKind::Add.is_binary_operator());
    assert!(TokenKind::Or.is_binary_operator());
    assert!(!TokenKind::Eq.is_binary_operator());
    assert!(!TokenKind::Assign.is_binary_operator());
    assert!(TokenKind::Not.is_unary_operator());
    assert!(TokenKind::Negate.is_unary_operator());
    assert!(!TokenKind::Sub.is_unary_operator());

    assert!(TokenKind::Shl.is_binary_arithmetic_operator());
    assert!(!TokenKind::And.is_binary_arithmetic_operator());
    assert!(TokenKind::BitNot.is_unary_arithmetic_operator());
    assert!(!TokenKind::Not.is_unary_arithmetic_operator());
}

#[test]
fn test_binary_operators_have_precedence() {
    for kind in TokenKind::ALL.iter().copied() {
        if kind.is_binary_operator() {
            assert!(kind.precedence() > crate::precedence::NONE, "{kind:?}");
        }
    }
}

// === Comparison negation ===

#[test]
fn test_negate_comparison() {
    assert_eq!(TokenKind::Lt.negate_comparison(), TokenKind::Gte);
    assert_eq!(TokenKind::Gt.negate_comparison(), TokenKind::Lte);
    assert_eq!(TokenKind::Eq.negate_comparison(), TokenKind::Ne);
    assert_eq!(TokenKind::EqStrict.negate_comparison(), TokenKind::NeStrict);
    assert_eq!(TokenKind::Is.negate_comparison(), TokenKind::IsNot);
}

#[test]
fn test_negate_comparison_is_involution() {
    let comparisons: Vec<_> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.is_comparison())
        .collect();
    assert_eq!(comparisons.len(), 10);
    for kind in comparisons {
        assert_eq!(kind.negate_comparison().negate_comparison(), kind);
        assert_ne!(kind.negate_comparison(), kind);
    }
}

#[test]
fn test_comparison_domain() {
    for kind in TokenKind::ALL.iter().copied() {
        let expected = kind.is_equality_operator()
            || kind.is_relational_operator()
            || kind.is_type_test_operator();
        assert_eq!(kind.is_comparison(), expected, "{kind:?}");
    }
}

#[test]
fn test_checked_negate_comparison_rejects_non_comparison() {
    assert_eq!(TokenKind::And.checked_negate_comparison(), None);
    assert_eq!(TokenKind::As.checked_negate_comparison(), None);
}

#[test]
#[should_panic(expected = "is not a comparison operator")]
fn test_negate_comparison_panics_on_and() {
    let _ = TokenKind::And.negate_comparison();
}
