#![allow(clippy::module_inception)]

use std::io::Write;

use tracing_subscriber::EnvFilter;

use crate::errors::errors::{Error, ErrorTip};

pub mod assembler;
pub mod checker;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod markdown;
pub mod sources;

extern crate regex;

/// Byte range of a token in its source, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

pub fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}

/// Install a stderr subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn display_error<W: Write>(error: &Error, out: &mut W) -> std::io::Result<()> {
    /*
        Error: Io (Check that the path exists)
        -> docs/missing.md
           i/o error: No such file or directory (os error 2)
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }

    if let Some(path) = error.get_path() {
        writeln!(out, "-> {}", path.display())?;
    }
    writeln!(out, "   {}", error)
}
