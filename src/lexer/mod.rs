//! Lexical analysis for source files.
//!
//! This module contains the lexer (tokenizer) that splits source text into
//! a lossless stream of coarse tokens. It handles:
//!
//! - Whitespace runs, line comments and block comments
//! - Runs of punctuation
//! - Double and single quoted literals with backslash escapes
//! - Word runs (identifiers, keywords and, incidentally, numbers)
//!
//! It is not a full Java lexer. It only needs enough structure to find
//! identifier-like words and step over comments and literals.

pub mod lexer;
pub mod tokens;
