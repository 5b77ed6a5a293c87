use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("{internal_error}")]
pub struct Error {
    #[source]
    internal_error: ErrorImpl,
    path: Option<PathBuf>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: Option<PathBuf>) -> Self {
        Error {
            internal_error: error_impl,
            path,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::new(ErrorImpl::Io { source }, Some(path.into()))
    }

    pub fn get_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Io { .. } => "Io",
            ErrorImpl::Walk { .. } => "Walk",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Io { source } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorTip::Suggestion(String::from("Check that the path exists"))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
            ErrorImpl::Walk { .. } => ErrorTip::Suggestion(String::from(
                "Run from the project root, or pass --root",
            )),
            ErrorImpl::InvalidPattern { pattern, .. } => {
                ErrorTip::Suggestion(format!("Pattern `{}` failed to compile", pattern))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("i/o error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
    #[error("directory walk failed: {source}")]
    Walk {
        #[source]
        source: ignore::Error,
    },
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
