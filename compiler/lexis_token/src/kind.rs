//! Token kinds and their metadata tables.

use std::fmt;

use crate::attrs::TokenAttrs;
use crate::precedence::{
    ADDITIVE, ASSIGNMENT, BITWISE_AND, BITWISE_OR, BITWISE_XOR, COMMA, CONDITIONAL, EQUALITY,
    IF_NULL, LOGICAL_AND, LOGICAL_OR, MULTIPLICATIVE, NONE, RELATIONAL, SHIFT,
};

const PLAIN: TokenAttrs = TokenAttrs::empty();
const KW: TokenAttrs = TokenAttrs::KEYWORD;
const PSEUDO: TokenAttrs = TokenAttrs::PSEUDO_KEYWORD;

/// Declares `TokenKind` and its per-kind tables from a single list.
///
/// Each entry is `Variant => "NAME", "spelling", precedence, attributes;`.
/// The tables are indexed by ordinal, so declaration order is the layout.
macro_rules! define_tokens {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:literal, $spelling:literal, $prec:expr, $attrs:expr;
    )*) => {
        /// A lexical token kind.
        ///
        /// Ordering follows declaration order, which is the persisted
        /// ordinal. Operator blocks and the keyword block are contiguous;
        /// see the crate docs.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum TokenKind {
            $( $(#[$meta])* $variant, )*
        }

        impl TokenKind {
            /// Every kind, in ordinal order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];
        }

        const NAMES: [&str; TOKEN_KIND_COUNT] = [$($name,)*];
        const SPELLINGS: [&str; TOKEN_KIND_COUNT] = [$($spelling,)*];
        const PRECEDENCE: [u8; TOKEN_KIND_COUNT] = [$($prec,)*];
        const ATTRIBUTES: [TokenAttrs; TOKEN_KIND_COUNT] = [$($attrs,)*];
    };
}

define_tokens! {
    /// End of stream.
    Eos => "EOS", "", NONE, PLAIN;

    LParen => "LPAREN", "(", NONE, PLAIN;
    RParen => "RPAREN", ")", NONE, PLAIN;
    LBrack => "LBRACK", "[", NONE, PLAIN;
    RBrack => "RBRACK", "]", NONE, PLAIN;
    LBrace => "LBRACE", "{", NONE, PLAIN;
    RBrace => "RBRACE", "}", NONE, PLAIN;
    Arrow => "ARROW", "=>", NONE, PLAIN;
    Colon => "COLON", ":", NONE, PLAIN;
    Semicolon => "SEMICOLON", ";", NONE, PLAIN;
    Period => "PERIOD", ".", NONE, PLAIN;
    QmPeriod => "QM_PERIOD", "?.", NONE, PLAIN;
    Incr => "INCR", "++", NONE, PLAIN;
    Decr => "DECR", "--", NONE, PLAIN;

    // Assignment operators. `is_assignment_operator` range-tests this block.
    Assign => "ASSIGN", "=", ASSIGNMENT, PLAIN;
    AssignOr => "ASSIGN_OR", "|=", ASSIGNMENT, PLAIN;
    AssignXor => "ASSIGN_XOR", "^=", ASSIGNMENT, PLAIN;
    AssignAnd => "ASSIGN_AND", "&=", ASSIGNMENT, PLAIN;
    AssignShl => "ASSIGN_SHL", "<<=", ASSIGNMENT, PLAIN;
    AssignShr => "ASSIGN_SHR", ">>=", ASSIGNMENT, PLAIN;
    AssignAdd => "ASSIGN_ADD", "+=", ASSIGNMENT, PLAIN;
    AssignSub => "ASSIGN_SUB", "-=", ASSIGNMENT, PLAIN;
    AssignMul => "ASSIGN_MUL", "*=", ASSIGNMENT, PLAIN;
    AssignTruncDiv => "ASSIGN_TRUNCDIV", "~/=", ASSIGNMENT, PLAIN;
    AssignDiv => "ASSIGN_DIV", "/=", ASSIGNMENT, PLAIN;
    AssignMod => "ASSIGN_MOD", "%=", ASSIGNMENT, PLAIN;
    AssignCond => "ASSIGN_COND", "??=", ASSIGNMENT, PLAIN;

    Cascade => "CASCADE", "..", ASSIGNMENT, PLAIN;

    Comma => "COMMA", ",", COMMA, PLAIN;
    Or => "OR", "||", LOGICAL_OR, PLAIN;
    And => "AND", "&&", LOGICAL_AND, PLAIN;
    BitOr => "BIT_OR", "|", BITWISE_OR, PLAIN;
    BitXor => "BIT_XOR", "^", BITWISE_XOR, PLAIN;
    BitAnd => "BIT_AND", "&", BITWISE_AND, PLAIN;
    BitNot => "BIT_NOT", "~", NONE, PLAIN;

    Shl => "SHL", "<<", SHIFT, PLAIN;
    Shr => "SHR", ">>", SHIFT, PLAIN;

    Add => "ADD", "+", ADDITIVE, PLAIN;
    Sub => "SUB", "-", ADDITIVE, PLAIN;

    Mul => "MUL", "*", MULTIPLICATIVE, PLAIN;
    Div => "DIV", "/", MULTIPLICATIVE, PLAIN;
    TruncDiv => "TRUNCDIV", "~/", MULTIPLICATIVE, PLAIN;
    Mod => "MOD", "%", MULTIPLICATIVE, PLAIN;

    Not => "NOT", "!", NONE, PLAIN;
    Conditional => "CONDITIONAL", "?", CONDITIONAL, PLAIN;
    IfNull => "IFNULL", "??", IF_NULL, PLAIN;

    // Equality operators. `is_equality_operator` range-tests this block.
    Eq => "EQ", "==", EQUALITY, PLAIN;
    Ne => "NE", "!=", EQUALITY, PLAIN;
    EqStrict => "EQ_STRICT", "===", EQUALITY, PLAIN;
    NeStrict => "NE_STRICT", "!==", EQUALITY, PLAIN;

    // Relational operators. `is_relational_operator` range-tests this block.
    Lt => "LT", "<", RELATIONAL, PLAIN;
    Gt => "GT", ">", RELATIONAL, PLAIN;
    Lte => "LTE", "<=", RELATIONAL, PLAIN;
    Gte => "GTE", ">=", RELATIONAL, PLAIN;

    /// Internal: negated type test, `!(expr is Type)`.
    IsNot => "ISNOT", "", RELATIONAL, PLAIN;

    Index => "INDEX", "[]", NONE, PLAIN;
    AssignIndex => "ASSIGN_INDEX", "[]=", NONE, PLAIN;
    Negate => "NEGATE", "unary-", NONE, PLAIN;

    Ident => "IDENT", "", NONE, PLAIN;
    String => "STRING", "", NONE, PLAIN;
    Integer => "INTEGER", "", NONE, PLAIN;
    Double => "DOUBLE", "", NONE, PLAIN;

    InterpolVar => "INTERPOL_VAR", "$", NONE, PLAIN;
    InterpolStart => "INTERPOL_START", "${", NONE, PLAIN;
    InterpolEnd => "INTERPOL_END", "}", NONE, PLAIN;

    At => "AT", "@", NONE, PLAIN;
    Hash => "HASH", "#", NONE, PLAIN;

    Newline => "NEWLINE", "\n", NONE, PLAIN;
    Whitesp => "WHITESP", "", NONE, PLAIN;
    Error => "ERROR", "", NONE, PLAIN;
    Illegal => "ILLEGAL", "", NONE, PLAIN;

    /// `#!` line at the start of a script.
    ScriptTag => "SCRIPTTAG", "#!", NONE, PLAIN;

    /// Internal: marker used by optimized code.
    Rem => "REM", "", NONE, PLAIN;

    // Keywords. Alphabetical by spelling; keyword lookup binary-searches
    // this block. Update FIRST_KEYWORD/LAST_KEYWORD when adding at either end.
    Abstract => "ABSTRACT", "abstract", NONE, PSEUDO;
    As => "AS", "as", RELATIONAL, PSEUDO;
    Assert => "ASSERT", "assert", NONE, KW;
    Break => "BREAK", "break", NONE, KW;
    Case => "CASE", "case", NONE, KW;
    Catch => "CATCH", "catch", NONE, KW;
    Class => "CLASS", "class", NONE, KW;
    Const => "CONST", "const", NONE, KW;
    Continue => "CONTINUE", "continue", NONE, KW;
    Default => "DEFAULT", "default", NONE, KW;
    Do => "DO", "do", NONE, KW;
    Else => "ELSE", "else", NONE, KW;
    Enum => "ENUM", "enum", NONE, KW;
    Export => "EXPORT", "export", NONE, PSEUDO;
    Extends => "EXTENDS", "extends", NONE, KW;
    External => "EXTERNAL", "external", NONE, PSEUDO;
    Factory => "FACTORY", "factory", NONE, PSEUDO;
    False => "FALSE", "false", NONE, KW;
    Final => "FINAL", "final", NONE, KW;
    Finally => "FINALLY", "finally", NONE, KW;
    For => "FOR", "for", NONE, KW;
    Get => "GET", "get", NONE, PSEUDO;
    If => "IF", "if", NONE, KW;
    Implements => "IMPLEMENTS", "implements", NONE, PSEUDO;
    Import => "IMPORT", "import", NONE, PSEUDO;
    In => "IN", "in", NONE, KW;
    Is => "IS", "is", RELATIONAL, KW;
    Library => "LIBRARY", "library", NONE, PSEUDO;
    New => "NEW", "new", NONE, KW;
    Null => "NULL", "null", NONE, KW;
    Operator => "OPERATOR", "operator", NONE, PSEUDO;
    Part => "PART", "part", NONE, PSEUDO;
    Rethrow => "RETHROW", "rethrow", NONE, KW;
    Return => "RETURN", "return", NONE, KW;
    Set => "SET", "set", NONE, PSEUDO;
    Static => "STATIC", "static", NONE, PSEUDO;
    Super => "SUPER", "super", NONE, KW;
    Switch => "SWITCH", "switch", NONE, KW;
    This => "THIS", "this", NONE, KW;
    Throw => "THROW", "throw", NONE, KW;
    True => "TRUE", "true", NONE, KW;
    Try => "TRY", "try", NONE, KW;
    Typedef => "TYPEDEF", "typedef", NONE, PSEUDO;
    Var => "VAR", "var", NONE, KW;
    Void => "VOID", "void", NONE, KW;
    While => "WHILE", "while", NONE, KW;
    With => "WITH", "with", NONE, KW;
}

/// Number of [`TokenKind`] variants.
pub const TOKEN_KIND_COUNT: usize = TokenKind::ALL.len();

impl TokenKind {
    /// Persisted ordinal of this kind.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Kind for a persisted ordinal, `None` when out of range.
    #[inline]
    pub fn from_ordinal(ordinal: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Stable diagnostic identifier, e.g. `ASSIGN_OR`.
    #[inline]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Literal text of the kind, or `""` when it has no fixed spelling
    /// (identifiers, literals, error markers, internal kinds).
    #[inline]
    pub const fn spelling(self) -> &'static str {
        SPELLINGS[self as usize]
    }

    /// Binary-operator precedence; [`precedence::NONE`](crate::precedence::NONE)
    /// for everything that is not a binary operator.
    #[inline]
    pub const fn precedence(self) -> u8 {
        PRECEDENCE[self as usize]
    }

    #[inline]
    pub const fn attributes(self) -> TokenAttrs {
        ATTRIBUTES[self as usize]
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = self.spelling();
        if spelling.is_empty() {
            f.write_str(self.name())
        } else {
            f.write_str(spelling)
        }
    }
}
