//! Utility macros for the scanners.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a slice of the source

/// Creates a Token covering `$source[$start..$end]`.
///
/// The token's `line_span` is derived from the sliced text, so callers never
/// have to count newlines themselves.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$source` - The full source text
/// * `$start` - Byte offset where the token begins
/// * `$end` - Byte offset one past the token's last byte
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Word, source, 0, 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $source:expr, $start:expr, $end:expr) => {{
        let text = &$source[$start..$end];
        Token {
            kind: $kind,
            text,
            span: Span {
                start: $start,
                end: $end,
            },
            line_span: $crate::count_newlines(text),
        }
    }};
}
