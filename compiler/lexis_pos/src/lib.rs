//! Lexis source positions.
//!
//! One signed machine-word integer addresses every "where" the compiler
//! needs, split into four disjoint regions:
//!
//! ```text
//!   SYNTHETIC_MIN ..= -12   synthetic    (real offset re-encoded for fabricated nodes)
//!     -11 ..= -2            classifying  (compiler bookkeeping categories, Last = -11)
//!        -1                 no source
//!     0 ..= MAX_SOURCE      real         (offset of a token in its source text)
//! ```
//!
//! A synthetic position of offset `p` is `-12 - p`, so offset 0 encodes as
//! -12 and offset 1 as -13. Keeping all four in one integer lets
//! deoptimization tables, debugger breakpoints and stack traces carry a
//! single comparable field. [`SourcePos`] offers the same space as a tagged
//! enum for code that wants to match on the region.
//!
//! Positions travel as `isize` but are persisted as `i32`. `MAX_SOURCE`
//! is chosen so every legal position fits the 31-bit Smi range, which
//! allows roughly one billion token positions per source file.

/// Compile-time assertion that a type has a specific size.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod classifying;
mod error;
mod region;
mod source_pos;
mod token_pos;

pub use classifying::ClassifyingPos;
pub use error::PosError;
pub use region::PosRegion;
pub use source_pos::SourcePos;
pub use token_pos::{TokenPos, SMI_MAX_32, SMI_MIN_32};

// TokenPos is a plain machine word.
static_assert_size!(TokenPos, std::mem::size_of::<isize>());
