//! Error types for semantic index access.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by an [`IndexService`](super::IndexService).
#[derive(Debug, Error)]
pub enum IndexError {
    /// Refreshing the index entry of a unit failed.
    #[error("failed to refresh index for '{}': {message}", .path.display())]
    Refresh { path: PathBuf, message: String },

    /// The read lock could not be acquired.
    #[error("could not acquire index read lock: {0}")]
    Lock(String),

    /// Building the syntax tree of a unit failed.
    #[error("failed to build syntax tree for '{}': {message}", .path.display())]
    SyntaxTree { path: PathBuf, message: String },
}

impl IndexError {
    pub fn refresh(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Refresh {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn lock(message: impl Into<String>) -> Self {
        Self::Lock(message.into())
    }

    pub fn syntax_tree(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SyntaxTree {
            path: path.into(),
            message: message.into(),
        }
    }
}
