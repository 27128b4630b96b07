//! Error type shared by the readers and calculators.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between opening a roster file and
/// computing statistics over it.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The input file does not exist.
    #[error("file {} not found", path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed JSON. The source keeps serde_json's
    /// line and column.
    #[error("invalid JSON in {}: {source}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input parsed but does not have the roster shape.
    #[error("invalid roster structure: {0}")]
    Structure(String),

    /// A plain-text roster line could not be interpreted.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// A rating was requested for a student with no scores.
    #[error("cannot rate student {student}: no subjects recorded")]
    NoSubjects { student: String },
}

impl RosterError {
    /// Maps an I/O failure on `path` to [`RosterError::NotFound`] or
    /// [`RosterError::Io`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            RosterError::NotFound { path }
        } else {
            RosterError::Io { path, source }
        }
    }

    /// Line of a JSON syntax error or a plain-text format error, if this
    /// is one of those.
    pub fn line(&self) -> Option<usize> {
        match self {
            RosterError::Syntax { source, .. } => Some(source.line()),
            RosterError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Column of a JSON syntax error, if this is one.
    pub fn column(&self) -> Option<usize> {
        match self {
            RosterError::Syntax { source, .. } => Some(source.column()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
