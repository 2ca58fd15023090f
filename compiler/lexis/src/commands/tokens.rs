//! Token catalog commands.

use lexis_token::{TokenKind, KEYWORDS};

use crate::CliError;

/// Render the catalog, one kind per line:
/// ordinal, name, spelling, precedence, attributes.
pub fn tokens(keywords_only: bool) -> String {
    let kinds: &[TokenKind] = if keywords_only {
        KEYWORDS.as_slice()
    } else {
        TokenKind::ALL
    };

    let mut lines = Vec::with_capacity(kinds.len() + 1);
    lines.push(format!(
        "{:>3}  {:<16} {:<10} {:>4}  attributes",
        "#", "name", "spelling", "prec"
    ));
    for kind in kinds {
        let spelling = kind.spelling().escape_debug().to_string();
        lines.push(format!(
            "{:>3}  {:<16} {:<10} {:>4}  {}",
            kind.ordinal(),
            kind.name(),
            spelling,
            kind.precedence(),
            kind.attributes().label()
        ));
    }
    lines.join("\n")
}

/// Report, for each word, whether it is a keyword and of which sort.
pub fn keyword(words: &[String]) -> String {
    words
        .iter()
        .map(|word| match TokenKind::keyword(word) {
            Some(kind) if kind.is_pseudo_keyword() => {
                format!("{word}: pseudo-keyword {}", kind.name())
            }
            Some(kind) => format!("{word}: keyword {}", kind.name()),
            None => format!("{word}: identifier"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Negate a comparison operator given by spelling or name.
pub fn negate(operator: &str) -> Result<String, CliError> {
    let kind = find_kind(operator).ok_or_else(|| CliError::UnknownOperator(operator.to_string()))?;
    let negated = kind
        .checked_negate_comparison()
        .ok_or_else(|| CliError::NotAComparison(operator.to_string()))?;
    Ok(format!("{kind} -> {negated}"))
}

fn find_kind(text: &str) -> Option<TokenKind> {
    TokenKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.name() == text || (!kind.spelling().is_empty() && kind.spelling() == text))
}
