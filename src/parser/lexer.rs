//! Numeric scanner for big-number slides, built on logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    #[regex("[0-9]+")]
    Digits,
    #[token(".")]
    Dot,
    #[token("%")]
    Percent,
    #[regex(r"[^0-9.%]+")]
    Other,
}

/// Tokenize text into spanned tokens
///
/// Every byte belongs to exactly one token class, so nothing is dropped in
/// practice; error slices are skipped.
pub fn tokenize(text: &str) -> Vec<(Token, Span)> {
    Token::lexer(text)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
        .collect()
}

/// Find the first number in `text`: digits, an optional fraction, an optional `%`
///
/// Returns the byte span of the match.
pub fn find_number(text: &str) -> Option<Span> {
    let tokens = tokenize(text);
    let start_idx = tokens.iter().position(|(t, _)| *t == Token::Digits)?;

    let start = tokens[start_idx].1.start;
    let mut end = tokens[start_idx].1.end;
    let mut next = start_idx + 1;

    let adjacent = |idx: usize, kind: Token, at: usize| -> bool {
        tokens
            .get(idx)
            .is_some_and(|(t, span)| *t == kind && span.start == at)
    };

    if adjacent(next, Token::Dot, end) && adjacent(next + 1, Token::Digits, end + 1) {
        end = tokens[next + 1].1.end;
        next += 2;
    }
    if adjacent(next, Token::Percent, end) {
        end = tokens[next].1.end;
    }

    Some(start..end)
}
