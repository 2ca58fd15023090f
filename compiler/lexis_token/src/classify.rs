//! Classification queries over token kinds.
//!
//! Block predicates are range tests over ordinals, so they stay O(1) and
//! stay correct as long as each block remains contiguous. The block
//! contents are pinned by tests.

use crate::attrs::TokenAttrs;
use crate::kind::TokenKind;

/// An inclusive, contiguous range of token kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenRange {
    pub first: TokenKind,
    pub last: TokenKind,
}

impl TokenRange {
    pub const fn new(first: TokenKind, last: TokenKind) -> Self {
        TokenRange { first, last }
    }

    /// Check if `kind` lies within the range.
    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.first as u8 <= kind as u8 && kind as u8 <= self.last as u8
    }

    /// Number of kinds in the range.
    pub const fn len(self) -> usize {
        (self.last as usize + 1).saturating_sub(self.first as usize)
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The kinds of the range as a slice of [`TokenKind::ALL`].
    pub fn as_slice(self) -> &'static [TokenKind] {
        TokenKind::ALL
            .get(self.first as usize..=self.last as usize)
            .unwrap_or(&[])
    }

    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        self.as_slice().iter().copied()
    }
}

impl TokenKind {
    /// `= |= ^= &= <<= >>= += -= *= ~/= /= %= ??=`
    pub const ASSIGNMENT_OPERATORS: TokenRange =
        TokenRange::new(TokenKind::Assign, TokenKind::AssignCond);
    /// `== != === !==`
    pub const EQUALITY_OPERATORS: TokenRange =
        TokenRange::new(TokenKind::Eq, TokenKind::NeStrict);
    /// `< > <= >=`
    pub const RELATIONAL_OPERATORS: TokenRange =
        TokenRange::new(TokenKind::Lt, TokenKind::Gte);

    const ARITHMETIC_OPERATORS: TokenRange = TokenRange::new(TokenKind::Add, TokenKind::Mod);
    const BIT_OPERATORS: TokenRange = TokenRange::new(TokenKind::BitOr, TokenKind::Shr);

    #[inline]
    pub const fn is_assignment_operator(self) -> bool {
        Self::ASSIGNMENT_OPERATORS.contains(self)
    }

    #[inline]
    pub const fn is_relational_operator(self) -> bool {
        Self::RELATIONAL_OPERATORS.contains(self)
    }

    #[inline]
    pub const fn is_equality_operator(self) -> bool {
        Self::EQUALITY_OPERATORS.contains(self)
    }

    /// `===` and `!==` only.
    #[inline]
    pub const fn is_strict_equality_operator(self) -> bool {
        matches!(self, TokenKind::EqStrict | TokenKind::NeStrict)
    }

    /// `is` and its internal negation.
    #[inline]
    pub const fn is_type_test_operator(self) -> bool {
        matches!(self, TokenKind::Is | TokenKind::IsNot)
    }

    #[inline]
    pub const fn is_type_cast_operator(self) -> bool {
        matches!(self, TokenKind::As)
    }

    /// Subscript read `[]` and subscript write `[]=`.
    #[inline]
    pub const fn is_index_operator(self) -> bool {
        matches!(self, TokenKind::Index | TokenKind::AssignIndex)
    }

    #[inline]
    pub const fn is_pseudo_keyword(self) -> bool {
        self.attributes().contains(TokenAttrs::PSEUDO_KEYWORD)
    }

    /// Reserved keyword. Pseudo-keywords are not reserved and return `false`.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.attributes().contains(TokenAttrs::KEYWORD)
    }

    /// Identifiers and pseudo-keywords, which the parser accepts wherever
    /// an identifier is expected.
    #[inline]
    pub const fn is_identifier_like(self) -> bool {
        matches!(self, TokenKind::Ident) || self.is_pseudo_keyword()
    }

    /// Operators a class may redefine as an operator method.
    ///
    /// Only `==` of the equality block: `!=` is derived from it and the
    /// strict forms are identity tests.
    pub const fn can_be_overloaded(self) -> bool {
        self.is_relational_operator()
            || matches!(self, TokenKind::Eq)
            || Self::ARITHMETIC_OPERATORS.contains(self)
            || Self::BIT_OPERATORS.contains(self)
            || self.is_index_operator()
    }

    /// Kinds whose token carries a literal payload from the scanner.
    #[inline]
    pub const fn needs_literal_token(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::String
                | TokenKind::InterpolVar
                | TokenKind::Error
                | TokenKind::Double
        )
    }

    pub const fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::TruncDiv
                | TokenKind::Mod
                | TokenKind::Or
                | TokenKind::And
                | TokenKind::BitOr
                | TokenKind::BitXor
                | TokenKind::BitAnd
                | TokenKind::Shl
                | TokenKind::Shr
        )
    }

    pub const fn is_unary_operator(self) -> bool {
        matches!(self, TokenKind::Not | TokenKind::BitNot | TokenKind::Negate)
    }

    /// Binary operators on numbers: the binary operators minus `||`/`&&`.
    pub const fn is_binary_arithmetic_operator(self) -> bool {
        self.is_binary_operator() && !matches!(self, TokenKind::Or | TokenKind::And)
    }

    pub const fn is_unary_arithmetic_operator(self) -> bool {
        matches!(self, TokenKind::BitNot | TokenKind::Negate)
    }

    /// Check if this kind has a logical negation, i.e. is in the domain of
    /// [`negate_comparison`](Self::negate_comparison).
    pub const fn is_comparison(self) -> bool {
        self.checked_negate_comparison().is_some()
    }

    /// Negated comparison: `!(a op b)` is `a op' b`.
    ///
    /// Returns `None` for kinds that are not comparisons.
    pub const fn checked_negate_comparison(self) -> Option<TokenKind> {
        match self {
            TokenKind::Eq => Some(TokenKind::Ne),
            TokenKind::Ne => Some(TokenKind::Eq),
            TokenKind::Lt => Some(TokenKind::Gte),
            TokenKind::Gt => Some(TokenKind::Lte),
            TokenKind::Lte => Some(TokenKind::Gt),
            TokenKind::Gte => Some(TokenKind::Lt),
            TokenKind::EqStrict => Some(TokenKind::NeStrict),
            TokenKind::NeStrict => Some(TokenKind::EqStrict),
            TokenKind::Is => Some(TokenKind::IsNot),
            TokenKind::IsNot => Some(TokenKind::Is),
            _ => None,
        }
    }

    /// Negated comparison: `!(a op b)` is `a op' b`.
    ///
    /// # Panics
    /// Panics if `self` is not a comparison. Callers must only pass
    /// equality, relational or type-test kinds.
    #[must_use]
    pub fn negate_comparison(self) -> TokenKind {
        self.checked_negate_comparison()
            .unwrap_or_else(|| panic!("{} ({self}) is not a comparison operator", self.name()))
    }
}

#[cfg(test)]
mod tests;
