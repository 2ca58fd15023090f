//! Tagged view of the position space.

use std::fmt;

use crate::classifying::ClassifyingPos;
use crate::error::PosError;
use crate::token_pos::TokenPos;

/// A position with its region made explicit.
///
/// [`TokenPos`] is the storage and persisted format; `SourcePos` is what
/// consumers match on. [`decode`](SourcePos::decode) and
/// [`encode`](SourcePos::encode) convert between the two and are exact
/// inverses for every legal position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SourcePos {
    /// Offset of a token in its source text.
    Real(u32),
    /// Compiler-fabricated node derived from code at this offset.
    Synthetic(u32),
    /// Compiler bookkeeping with no text location.
    Classifying(ClassifyingPos),
    NoSource,
}

impl SourcePos {
    pub fn decode(pos: TokenPos) -> Self {
        if let Some(category) = pos.classifying() {
            return SourcePos::Classifying(category);
        }
        if pos.is_no_source() {
            return SourcePos::NoSource;
        }
        match pos.from_synthetic().offset() {
            Some(offset) if pos.is_synthetic() => SourcePos::Synthetic(offset),
            Some(offset) => SourcePos::Real(offset),
            None => unreachable!("legal position {pos:?} has no source offset"),
        }
    }

    /// Pack into a [`TokenPos`].
    ///
    /// Fails when a real or synthetic offset exceeds
    /// [`TokenPos::MAX_SOURCE`].
    pub fn encode(self) -> Result<TokenPos, PosError> {
        match self {
            SourcePos::Real(offset) => TokenPos::real(offset as usize),
            SourcePos::Synthetic(offset) => {
                TokenPos::real(offset as usize).map(TokenPos::to_synthetic)
            }
            SourcePos::Classifying(category) => Ok(TokenPos::from(category)),
            SourcePos::NoSource => Ok(TokenPos::NO_SOURCE),
        }
    }

    /// The source offset a real or synthetic position points at.
    ///
    /// Diagnostics that want to show a location should check
    /// [`is_real`](Self::is_real) first; synthetic offsets are only
    /// approximately where the fabricated node came from.
    pub const fn offset(self) -> Option<u32> {
        match self {
            SourcePos::Real(offset) | SourcePos::Synthetic(offset) => Some(offset),
            SourcePos::Classifying(_) | SourcePos::NoSource => None,
        }
    }

    pub const fn is_real(self) -> bool {
        matches!(self, SourcePos::Real(_))
    }

    /// The synthetic form of this position, as a desugaring or
    /// optimization pass attaches it to a node it fabricates.
    #[must_use]
    pub const fn to_synthetic(self) -> Self {
        match self {
            SourcePos::Real(offset) => SourcePos::Synthetic(offset),
            other => other,
        }
    }
}

impl From<TokenPos> for SourcePos {
    fn from(pos: TokenPos) -> Self {
        SourcePos::decode(pos)
    }
}

impl TryFrom<SourcePos> for TokenPos {
    type Error = PosError;

    fn try_from(pos: SourcePos) -> Result<Self, Self::Error> {
        pos.encode()
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePos::Real(offset) => write!(f, "{offset}"),
            SourcePos::Synthetic(offset) => write!(f, "synthetic({offset})"),
            SourcePos::Classifying(category) => write!(f, "classifying({category})"),
            SourcePos::NoSource => f.write_str("no-source"),
        }
    }
}
