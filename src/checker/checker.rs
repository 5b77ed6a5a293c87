use std::{
    fmt::Display,
    io::Write,
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::{
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    sources::{find_files, read_source},
};

lazy_static! {
    static ref IDENT_START: Regex = Regex::new(r"\A\w").unwrap();
    static ref CONST_TOKEN: Regex = Regex::new(r"\A[A-Z_0-9]+\z").unwrap();
    // ASCII only, unlike IDENT_START.
    static ref DODGY_CASE: Regex = Regex::new(r"[A-Z]{3,}").unwrap();
}

pub const REPORT_HEADER: &str = "Detected violations of camel case conventions\n\
See https://google.github.io/styleguide/jsguide.html#naming-camel-case-defined";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub root: PathBuf,
    pub extension: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            root: PathBuf::from("src/main/java"),
            extension: String::from("java"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub token: String,
    pub acronyms: Vec<String>,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} has {}",
            self.path.display(),
            self.line,
            self.token,
            self.acronyms.join(",")
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any file had a violation.
    pub fn is_dodgy(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn extend(&mut self, other: CheckReport) {
        self.violations.extend(other.violations);
        self.files_scanned += other.files_scanned;
    }
}

/// Runs of three or more uppercase ASCII letters in `token`, or an empty
/// vector when the token is not an identifier or is constant-style.
///
/// When a run is followed by a lowercase letter its last capital starts the
/// next word (`HTTPResponse`), so it is left out of the reported acronym as
/// long as three letters remain.
pub fn find_acronyms(token: &str) -> Vec<String> {
    if !IDENT_START.is_match(token) || CONST_TOKEN.is_match(token) {
        return vec![];
    }

    DODGY_CASE
        .find_iter(token)
        .map(|m| {
            let run = m.as_str();
            let starts_word = token[m.end()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase());

            if starts_word && run.len() > 3 {
                run[..run.len() - 1].to_string()
            } else {
                run.to_string()
            }
        })
        .collect()
}

pub fn is_constant_style(token: &str) -> bool {
    CONST_TOKEN.is_match(token)
}

/// Scan one file's contents. Line numbers start at 1 and point at the line
/// where the offending word begins.
pub fn check_source(path: &Path, source: &str) -> Vec<Violation> {
    let mut violations = vec![];
    let mut line = 1;

    for token in Lexer::new(source) {
        if token.kind == TokenKind::Word {
            let acronyms = find_acronyms(token.text);
            if !acronyms.is_empty() {
                violations.push(Violation {
                    path: path.to_path_buf(),
                    line,
                    token: token.text.to_string(),
                    acronyms,
                });
            }
        }

        line += token.line_span;
    }

    violations
}

pub fn check_files<P: AsRef<Path>>(paths: &[P]) -> Result<CheckReport, Error> {
    let mut report = CheckReport::new();

    for path in paths {
        let path = path.as_ref();
        let source = read_source(path)?;
        let violations = check_source(path, &source);
        debug!(path = %path.display(), violations = violations.len(), "checked file");

        report.extend(CheckReport {
            violations,
            files_scanned: 1,
        });
    }

    Ok(report)
}

pub fn check_tree(config: &CheckConfig) -> Result<CheckReport, Error> {
    let files = find_files(&config.root, &config.extension)?;
    let report = check_files(&files)?;

    info!(
        files = report.files_scanned,
        violations = report.violations.len(),
        "identifier case check finished"
    );
    Ok(report)
}

/// Print the header once, then one line per violation. A clean report
/// writes nothing.
pub fn write_report<W: Write>(report: &CheckReport, out: &mut W) -> std::io::Result<()> {
    if !report.is_dodgy() {
        return Ok(());
    }

    writeln!(out, "{}", REPORT_HEADER)?;
    for violation in &report.violations {
        writeln!(out, "{}", violation)?;
    }

    Ok(())
}
