//! Packed integer source positions.

use std::fmt;

use crate::classifying::ClassifyingPos;
use crate::error::PosError;
use crate::region::PosRegion;

/// Largest value of a 31-bit Smi, the persisted range of a position.
pub const SMI_MAX_32: isize = (1 << 30) - 1;
/// Smallest value of a 31-bit Smi.
pub const SMI_MIN_32: isize = -(1 << 30);

/// A position in the packed address space.
///
/// Every `TokenPos` is legal: constructors reject values outside
/// `SYNTHETIC_MIN..=MAX_SOURCE`, so the region predicates are mutually
/// exclusive and exhaustive for every value of this type. Ordering is
/// plain integer ordering.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "cache",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct TokenPos(isize);

impl TokenPos {
    /// Not attached to any position.
    pub const NO_SOURCE: TokenPos = TokenPos(-1);
    /// Smallest real position, the start of the source.
    pub const MIN_SOURCE: TokenPos = TokenPos(0);
    /// Largest real position. `MAX_SOURCE + band size + 2` still fits a Smi.
    pub const MAX_SOURCE: TokenPos = TokenPos(SMI_MAX_32 - (-ClassifyingPos::LAST) - 2);
    /// Synthetic encoding of offset 0.
    pub const SYNTHETIC_MAX: TokenPos = TokenPos(ClassifyingPos::LAST - 1);
    /// Synthetic encoding of [`MAX_SOURCE`](Self::MAX_SOURCE); the smallest legal position.
    pub const SYNTHETIC_MIN: TokenPos = TokenPos(ClassifyingPos::LAST - 1 - Self::MAX_SOURCE.0);

    /// Real position for a source offset.
    ///
    /// Fails with [`PosError::TooLarge`] when the offset does not fit the
    /// position space, i.e. the source file is too large to represent.
    pub fn real(offset: usize) -> Result<Self, PosError> {
        match isize::try_from(offset) {
            Ok(raw) if raw <= Self::MAX_SOURCE.0 => Ok(TokenPos(raw)),
            _ => {
                tracing::debug!(
                    offset,
                    max = Self::MAX_SOURCE.0,
                    "source offset exceeds the position space"
                );
                Err(PosError::TooLarge {
                    offset,
                    max: Self::MAX_SOURCE.0,
                })
            }
        }
    }

    /// Position for a raw machine-word value from any region.
    pub fn from_raw(raw: isize) -> Result<Self, PosError> {
        if (Self::SYNTHETIC_MIN.0..=Self::MAX_SOURCE.0).contains(&raw) {
            Ok(TokenPos(raw))
        } else {
            tracing::debug!(raw, "raw position outside the legal range");
            Err(PosError::OutOfRange { raw: raw as i64 })
        }
    }

    #[inline]
    pub const fn raw(self) -> isize {
        self.0
    }

    /// Persisted 32-bit form.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "legal positions lie within the 31-bit Smi range"
    )]
    pub const fn to_i32(self) -> i32 {
        self.0 as i32
    }

    /// Is this a classifying sentinel position?
    #[inline]
    pub const fn is_classifying(self) -> bool {
        ClassifyingPos::LAST <= self.0 && self.0 <= ClassifyingPos::FIRST
    }

    /// Is this the no-source sentinel?
    #[inline]
    pub const fn is_no_source(self) -> bool {
        self.0 == Self::NO_SOURCE.0
    }

    /// Is this a synthetic position?
    #[inline]
    pub const fn is_synthetic(self) -> bool {
        self.0 < Self::MIN_SOURCE.0 && self.0 < ClassifyingPos::LAST
    }

    /// Is this a real source position?
    #[inline]
    pub const fn is_real(self) -> bool {
        self.0 >= Self::MIN_SOURCE.0
    }

    /// Is this a source position: real, synthetic or no-source?
    ///
    /// Classifying positions are bookkeeping, not text locations.
    #[inline]
    pub const fn is_source_position(self) -> bool {
        self.is_real() || self.is_no_source() || self.is_synthetic()
    }

    /// Can the debugger pause here? Only real positions qualify.
    #[inline]
    pub const fn is_debug_pause(self) -> bool {
        self.is_real()
    }

    pub const fn region(self) -> PosRegion {
        if self.is_real() {
            PosRegion::Real
        } else if self.is_no_source() {
            PosRegion::NoSource
        } else if self.is_classifying() {
            PosRegion::Classifying
        } else {
            PosRegion::Synthetic
        }
    }

    /// The classifying category, if this is a classifying position.
    pub const fn classifying(self) -> Option<ClassifyingPos> {
        ClassifyingPos::from_raw(self.0)
    }

    /// Source offset of a real position, `None` in any other region.
    ///
    /// Synthetic positions must be decoded with
    /// [`from_synthetic`](Self::from_synthetic) first.
    pub fn offset(self) -> Option<u32> {
        if self.is_real() {
            u32::try_from(self.0).ok()
        } else {
            None
        }
    }

    /// Encode a real position as synthetic.
    ///
    /// Classifying, no-source and already synthetic positions are returned
    /// unchanged.
    #[must_use]
    pub fn to_synthetic(self) -> Self {
        if self.is_classifying() || self.is_no_source() || self.is_synthetic() {
            return self;
        }
        debug_assert!(self.is_real());
        let value = TokenPos((ClassifyingPos::LAST - 1) - self.0);
        debug_assert!(value.is_synthetic(), "{self:?} encoded outside the synthetic band");
        debug_assert!(value >= Self::SYNTHETIC_MIN, "{self:?} encoded below SYNTHETIC_MIN");
        debug_assert_eq!(-value.0 + (ClassifyingPos::LAST - 1), self.0);
        value
    }

    /// Decode a synthetic position back to the real position it stands for.
    ///
    /// Classifying, no-source and real positions are returned unchanged.
    #[must_use]
    pub fn from_synthetic(self) -> Self {
        if self.is_classifying() || self.is_no_source() || !self.is_synthetic() {
            return self;
        }
        let value = TokenPos(-self.0 + (ClassifyingPos::LAST - 1));
        debug_assert!(value.is_real(), "{self:?} decoded outside the real region");
        debug_assert!(value <= Self::MAX_SOURCE, "{self:?} decoded above MAX_SOURCE");
        debug_assert_eq!((ClassifyingPos::LAST - 1) - value.0, self.0);
        value
    }
}

// The bands must tile the legal range without gaps or overlap.
const _: () = {
    assert!(ClassifyingPos::FIRST == TokenPos::NO_SOURCE.0 - 1);
    assert!(TokenPos::SYNTHETIC_MAX.0 == ClassifyingPos::LAST - 1);
    assert!(TokenPos::SYNTHETIC_MIN.0 >= SMI_MIN_32);
    assert!(TokenPos::MAX_SOURCE.0 + (-ClassifyingPos::LAST) + 2 <= SMI_MAX_32);
    assert!(ClassifyingPos::FIRST - ClassifyingPos::LAST + 1 == ClassifyingPos::ALL.len() as isize);
};

impl Default for TokenPos {
    fn default() -> Self {
        TokenPos::NO_SOURCE
    }
}

impl From<ClassifyingPos> for TokenPos {
    fn from(category: ClassifyingPos) -> Self {
        TokenPos(category.value())
    }
}

impl TryFrom<i32> for TokenPos {
    type Error = PosError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let raw = isize::try_from(value).map_err(|_| PosError::OutOfRange {
            raw: i64::from(value),
        })?;
        TokenPos::from_raw(raw)
    }
}

impl From<TokenPos> for i32 {
    fn from(pos: TokenPos) -> Self {
        pos.to_i32()
    }
}

impl fmt::Debug for TokenPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenPos({})", self.0)
    }
}

/// Real positions print their offset; other regions are labelled so they
/// are never mistaken for a line/column location.
impl fmt::Display for TokenPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.region() {
            PosRegion::Real => write!(f, "{}", self.0),
            PosRegion::NoSource => f.write_str("no-source"),
            PosRegion::Classifying => match self.classifying() {
                Some(category) => write!(f, "classifying({category})"),
                None => write!(f, "classifying({})", self.0),
            },
            PosRegion::Synthetic => write!(f, "synthetic({})", self.from_synthetic().0),
        }
    }
}
