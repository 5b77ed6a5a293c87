use crate::{Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, TOKEN_PATTERNS};

/// Lazy scanner over a source text.
///
/// Yields tokens whose texts, concatenated in order, reproduce the input.
/// Patterns in [`TOKEN_PATTERNS`] are tried in order and the first one that
/// matches at the current position wins. A character no pattern accepts is
/// emitted on its own as [`TokenKind::Punctuation`], so the scan never stalls.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, pos: 0 }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn match_length(&self) -> (TokenKind, usize) {
        let remaining = self.remainder();

        for (kind, regex) in TOKEN_PATTERNS.iter() {
            if let Some(found) = regex.find(remaining) {
                if !found.is_empty() {
                    return (*kind, found.end());
                }
            }
        }

        // `remaining` is non-empty here, so there is always a first char.
        let width = remaining.chars().next().map_or(1, char::len_utf8);
        (TokenKind::Punctuation, width)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.at_eof() {
            return None;
        }

        let (kind, len) = self.match_length();
        let source = self.source;
        let start = self.pos;
        self.pos += len;

        Some(MK_TOKEN!(kind, source, start, self.pos))
    }
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
