//! Position construction errors.

use crate::token_pos::TokenPos;

/// A position value that cannot be represented.
///
/// Raised where positions are created (scanner, parser, artifact loader),
/// never inside the position arithmetic itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PosError {
    /// A source offset above [`TokenPos::MAX_SOURCE`].
    #[error("source file too large to represent: offset {offset} exceeds the maximum position {max}")]
    TooLarge { offset: usize, max: isize },

    /// A raw or persisted value outside the legal position range.
    #[error(
        "position {raw} is outside the legal range {}..={}",
        TokenPos::SYNTHETIC_MIN.raw(),
        TokenPos::MAX_SOURCE.raw()
    )]
    OutOfRange { raw: i64 },
}
