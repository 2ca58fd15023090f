//! The four regions of the position space.

use std::fmt;

/// Region a [`TokenPos`](crate::TokenPos) falls into.
///
/// Variants are listed in ascending order of the values they cover.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PosRegion {
    Synthetic,
    Classifying,
    NoSource,
    Real,
}

impl PosRegion {
    pub const fn name(self) -> &'static str {
        match self {
            PosRegion::Synthetic => "synthetic",
            PosRegion::Classifying => "classifying",
            PosRegion::NoSource => "no-source",
            PosRegion::Real => "real",
        }
    }
}

impl fmt::Display for PosRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
