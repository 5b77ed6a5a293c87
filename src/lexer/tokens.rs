use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::Span;

lazy_static! {
    /// Token patterns in match precedence order. Every pattern is anchored
    /// with `\A` so it only matches at the lexer's current position.
    pub static ref TOKEN_PATTERNS: Vec<(TokenKind, Regex)> = vec![
        (TokenKind::Whitespace, Regex::new(r"\A[\x00-\x20]+").unwrap()),
        (TokenKind::LineComment, Regex::new(r"\A//[^\r\n]*").unwrap()),
        (TokenKind::BlockComment, Regex::new(r"\A/\*[^*]*\*+(?:[^/*][^*]*\*+)*/").unwrap()),
        (TokenKind::Punctuation, Regex::new(r"\A[~!%^&*()\[\]{}\-+|:;,.<>?/]+").unwrap()),
        (TokenKind::DoubleString, Regex::new(r#"(?s)\A"(?:[^"\\]|\\.)*""#).unwrap()),
        (TokenKind::SingleString, Regex::new(r"(?s)\A'(?:[^'\\]|\\.)*'").unwrap()),
        // Also swallows numeric literals like `0x1F` or `10L`.
        (TokenKind::Word, Regex::new(r"\A[_$\w]+").unwrap()),
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    Punctuation,
    DoubleString,
    SingleString,
    Word,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
    /// Number of newlines embedded in `text`.
    pub line_span: usize,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.text)
    }
}
