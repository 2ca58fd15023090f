//! Keyword recognition.
//!
//! The keyword block of [`TokenKind`] is declared in alphabetical order of
//! spelling, so lookup is a binary search over that block. Identifiers
//! whose length falls outside the keyword length range are rejected
//! before any comparison.

use crate::classify::TokenRange;
use crate::kind::TokenKind;

pub const FIRST_KEYWORD: TokenKind = TokenKind::Abstract;
pub const LAST_KEYWORD: TokenKind = TokenKind::With;

/// The keyword block, reserved and pseudo-keywords alike.
pub const KEYWORDS: TokenRange = TokenRange::new(FIRST_KEYWORD, LAST_KEYWORD);

pub const NUM_KEYWORDS: usize = KEYWORDS.len();

// Shortest: `as`, `do`, `if`, `in`, `is`. Longest: `implements`.
const MIN_KEYWORD_LEN: usize = 2;
const MAX_KEYWORD_LEN: usize = 10;

impl TokenKind {
    /// Look up a keyword by its spelling.
    ///
    /// Returns `None` for ordinary identifiers. Pseudo-keywords are
    /// returned as their keyword kind; callers decide by position whether
    /// to treat them as identifiers (see
    /// [`is_identifier_like`](Self::is_identifier_like)).
    pub fn keyword(text: &str) -> Option<TokenKind> {
        if !(MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&text.len()) {
            return None;
        }
        if !text.as_bytes().first().is_some_and(u8::is_ascii_lowercase) {
            return None;
        }

        let block = KEYWORDS.as_slice();
        block
            .binary_search_by(|kw| kw.spelling().cmp(text))
            .ok()
            .and_then(|index| block.get(index).copied())
    }

    /// Iterate over the keyword block in alphabetical order.
    pub fn keywords() -> impl Iterator<Item = TokenKind> {
        KEYWORDS.iter()
    }

    /// Check if this kind lies in the keyword block.
    #[inline]
    pub const fn is_in_keyword_block(self) -> bool {
        KEYWORDS.contains(self)
    }
}

#[cfg(test)]
mod tests;
