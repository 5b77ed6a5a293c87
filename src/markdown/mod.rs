//! Extraction of fenced code sections from markdown documentation.
//!
//! Each ```` ```java ```` block becomes a [`markdown::CodeSection`] tagged with
//! the file and line it came from. Import declarations are lifted out of the
//! bodies into a per-document set, and top-level classes are rewritten as
//! `static` so that many snippets can live inside one enclosing class.

pub mod markdown;
