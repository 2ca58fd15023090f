use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_keyword_block_bounds() {
    assert_eq!(NUM_KEYWORDS, 47);
    assert_eq!(TokenKind::keywords().next(), Some(FIRST_KEYWORD));
    assert_eq!(TokenKind::keywords().last(), Some(LAST_KEYWORD));
    assert_eq!(
        usize::from(LAST_KEYWORD.ordinal()) + 1,
        crate::TOKEN_KIND_COUNT
    );
}

#[test]
fn test_keywords_strictly_alphabetical() {
    let spellings: Vec<_> = TokenKind::keywords().map(TokenKind::spelling).collect();
    for pair in spellings.windows(2) {
        assert!(pair[0] < pair[1], "{} must sort before {}", pair[0], pair[1]);
    }
}

#[test]
fn test_keyword_block_carries_keyword_attributes() {
    for kind in TokenKind::ALL.iter().copied() {
        assert_eq!(
            kind.is_in_keyword_block(),
            kind.is_keyword() || kind.is_pseudo_keyword(),
            "{kind:?}"
        );
    }
}

#[test]
fn test_every_keyword_is_found() {
    for kind in TokenKind::keywords() {
        assert_eq!(TokenKind::keyword(kind.spelling()), Some(kind));
    }
}

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("abstract"), Some(TokenKind::Abstract));
    assert_eq!(TokenKind::keyword("implements"), Some(TokenKind::Implements));
    assert_eq!(TokenKind::keyword("is"), Some(TokenKind::Is));
    assert_eq!(TokenKind::keyword("with"), Some(TokenKind::With));
}

#[test]
fn test_non_keywords() {
    for text in ["", "a", "x", "foo", "Class", "classes", "wit", "withh", "abstracts", "ä"] {
        assert_eq!(TokenKind::keyword(text), None, "{text:?}");
    }
}

#[test]
fn test_length_guard() {
    assert_eq!(TokenKind::keyword("implementss"), None);
    assert_eq!(TokenKind::keyword("_if"), None);
}

#[test]
fn test_operator_spellings_are_not_keywords() {
    assert_eq!(TokenKind::keyword("=="), None);
    assert_eq!(TokenKind::keyword("unary-"), None);
}
