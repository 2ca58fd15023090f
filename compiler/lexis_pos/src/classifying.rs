//! Classifying positions.
//!
//! Tags for instructions that cannot be tied to a source position but
//! still need a category, e.g. a parallel move inserted by the register
//! allocator or the implicit context of a closure.

use std::fmt;

/// Fixed, named classifying positions.
///
/// Values run from -2 down to [`Last`](ClassifyingPos::Last) (-11), directly
/// below the no-source sentinel. `Last` terminates the band and must stay
/// at the end; the synthetic band and `MAX_SOURCE` are derived from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum ClassifyingPos {
    Private = -2,
    Box = -3,
    ParallelMove = -4,
    TempMove = -5,
    Constant = -6,
    PushArgument = -7,
    ControlFlow = -8,
    Context = -9,
    MethodExtractor = -10,
    Last = -11,
}

impl ClassifyingPos {
    /// Every classifying position, from -2 downwards.
    pub const ALL: [ClassifyingPos; 10] = [
        ClassifyingPos::Private,
        ClassifyingPos::Box,
        ClassifyingPos::ParallelMove,
        ClassifyingPos::TempMove,
        ClassifyingPos::Constant,
        ClassifyingPos::PushArgument,
        ClassifyingPos::ControlFlow,
        ClassifyingPos::Context,
        ClassifyingPos::MethodExtractor,
        ClassifyingPos::Last,
    ];

    /// Upper end of the band (closest to zero).
    pub const FIRST: isize = ClassifyingPos::Private.value();
    /// Lower end of the band.
    pub const LAST: isize = ClassifyingPos::Last.value();

    /// Raw position value.
    #[inline]
    pub const fn value(self) -> isize {
        self as isize
    }

    /// Classifying position for a raw value, `None` outside the band.
    pub const fn from_raw(raw: isize) -> Option<Self> {
        match raw {
            -2 => Some(ClassifyingPos::Private),
            -3 => Some(ClassifyingPos::Box),
            -4 => Some(ClassifyingPos::ParallelMove),
            -5 => Some(ClassifyingPos::TempMove),
            -6 => Some(ClassifyingPos::Constant),
            -7 => Some(ClassifyingPos::PushArgument),
            -8 => Some(ClassifyingPos::ControlFlow),
            -9 => Some(ClassifyingPos::Context),
            -10 => Some(ClassifyingPos::MethodExtractor),
            -11 => Some(ClassifyingPos::Last),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ClassifyingPos::Private => "Private",
            ClassifyingPos::Box => "Box",
            ClassifyingPos::ParallelMove => "ParallelMove",
            ClassifyingPos::TempMove => "TempMove",
            ClassifyingPos::Constant => "Constant",
            ClassifyingPos::PushArgument => "PushArgument",
            ClassifyingPos::ControlFlow => "ControlFlow",
            ClassifyingPos::Context => "Context",
            ClassifyingPos::MethodExtractor => "MethodExtractor",
            ClassifyingPos::Last => "Last",
        }
    }
}

impl fmt::Display for ClassifyingPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
