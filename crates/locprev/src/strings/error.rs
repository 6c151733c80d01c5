//! Error types for `.strings` parsing and loading.

use std::path::PathBuf;

use thiserror::Error;

/// A syntax error in `.strings` content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed input with location context.
    #[error("{line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input ended inside an entry or comment.
    #[error("{line}:{column}: unexpected end of file")]
    UnexpectedEof { line: usize, column: usize },
}

impl ParseError {
    /// Location of the error as (line, column), 1-based.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column } => (*line, *column),
        }
    }
}

/// Errors that occur when loading a `.strings` table from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the table.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}
