//! Error types for rs2-seq
//!
//! Absence of a value is never an error in this crate: empty sources,
//! short sources and failed searches are reported with `Option` or `bool`.
//! The variants below only cover failures that come from the outside world
//! through one of the bridges in [`crate::from`].

use std::path::PathBuf;

/// Main error type for sequence bridges
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// I/O related errors, e.g. a reader failing mid-line
    #[error("IO error: {0}")]
    Io(String),
    /// A directory traversal step that could not be completed
    #[error("walk error at {}: {message}", display_path(.path))]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<unknown>".to_string(),
    }
}

impl From<std::io::Error> for SeqError {
    fn from(err: std::io::Error) -> Self {
        SeqError::Io(err.to_string())
    }
}

impl From<walkdir::Error> for SeqError {
    fn from(err: walkdir::Error) -> Self {
        SeqError::Walk {
            path: err.path().map(|p| p.to_path_buf()),
            message: err.to_string(),
        }
    }
}

/// Result type for rs2-seq bridges
pub type SeqResult<T> = Result<T, SeqError>;
