use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the static checker or the marker store.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The checker run failed.
    #[error("checker run failed on '{}': {message}", .path.display())]
    Run { path: PathBuf, message: String },

    /// Markers could not be read back.
    #[error("failed to read markers of '{}': {message}", .path.display())]
    Markers { path: PathBuf, message: String },
}

impl CheckerError {
    pub fn run(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Run {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn markers(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Markers {
            path: path.into(),
            message: message.into(),
        }
    }
}
