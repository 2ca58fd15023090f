//! Lexis token catalog.
//!
//! The closed set of token kinds a scanner can produce, together with the
//! static metadata each kind carries:
//! - a stable diagnostic name (`ASSIGN_OR`)
//! - a spelling (`|=`), empty for kinds without fixed text
//! - a binary-operator precedence (0 when the kind is not a binary operator)
//! - an attribute set (keyword, pseudo-keyword)
//!
//! # Layout
//!
//! The ordinal of a [`TokenKind`] is its identity and is persisted in
//! compiled-code artifacts, so kinds are never renumbered. Several
//! sub-ranges are contiguous and range-tested by the classification
//! queries:
//!
//! | Block       | Kinds                                         |
//! |-------------|-----------------------------------------------|
//! | assignment  | `= \|= ^= &= <<= >>= += -= *= ~/= /= %= ??=`  |
//! | equality    | `== != === !==`                               |
//! | relational  | `< > <= >=`                                   |
//! | keywords    | `abstract` .. `with`, alphabetical            |
//!
//! All tables are `const` data. Every query is a pure function and may be
//! called from any thread without synchronization.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod attrs;
mod classify;
mod keyword;
mod kind;
pub mod precedence;

pub use attrs::TokenAttrs;
pub use classify::TokenRange;
pub use keyword::{FIRST_KEYWORD, KEYWORDS, LAST_KEYWORD, NUM_KEYWORDS};
pub use kind::{TokenKind, TOKEN_KIND_COUNT};

// TokenKind is stored in every scanned token; keep it one byte.
static_assert_size!(TokenKind, 1);
