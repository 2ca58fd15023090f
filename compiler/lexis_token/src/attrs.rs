//! Categorical token attributes.

use bitflags::bitflags;

bitflags! {
    /// Attribute set carried by every token kind.
    ///
    /// The two flags are mutually exclusive in the catalog: a kind is a
    /// reserved keyword, a pseudo-keyword, or neither.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TokenAttrs: u8 {
        /// Reserved word; never usable as an identifier.
        const KEYWORD = 1 << 0;
        /// Keyword only in specific grammatical positions, an identifier
        /// everywhere else.
        const PSEUDO_KEYWORD = 1 << 1;
    }
}

impl TokenAttrs {
    /// Short label for tables and diagnostics.
    pub const fn label(self) -> &'static str {
        if self.contains(Self::KEYWORD) {
            "keyword"
        } else if self.contains(Self::PSEUDO_KEYWORD) {
            "pseudo-keyword"
        } else {
            "-"
        }
    }
}
