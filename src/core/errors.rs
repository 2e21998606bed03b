//! Error types for the fqualify library.
//!
//! A rewrite run has exactly three failure classes: file I/O, directory
//! traversal, and summary serialization. Pattern-match misses on import
//! lines are not errors, and duplicate aliases within a file are resolved
//! last-write-wins without a warning.

use std::io;

use thiserror::Error;

/// Main result type for fqualify operations.
pub type Result<T> = std::result::Result<T, QualifyError>;

/// Error type covering every failure class in a rewrite run.
///
/// All variants are fatal: the run aborts at the first failing file, and
/// files already rewritten stay rewritten.
#[derive(Error, Debug)]
pub enum QualifyError {
    /// Reading or replacing a file failed.
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message with path context
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Walking the directory tree failed.
    #[error("Traversal error: {message}")]
    Walk {
        /// Human-readable error message with root context
        message: String,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// Serializing the run summary failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
        /// Underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

impl QualifyError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new traversal error with context
    pub fn walk(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::Walk {
            message: message.into(),
            source,
        }
    }

    /// Create a new serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}
