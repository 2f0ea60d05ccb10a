//! Request-level errors.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::checker::CheckerError;
use crate::index::IndexError;
use crate::project::ProjectError;

/// A failed validation request, with the project and file it was for.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The file could not be mapped to a translation unit.
    #[error("{project}: cannot locate '{}': {source}", .file.display())]
    Unit {
        project: String,
        file: PathBuf,
        #[source]
        source: ProjectError,
    },

    /// Refresh, lock or syntax-tree build failed.
    #[error("{project}: index access failed for '{}': {source}", .file.display())]
    Index {
        project: String,
        file: PathBuf,
        #[source]
        source: IndexError,
    },

    /// The checker run or the marker lookup failed.
    #[error("{project}: static check failed for '{}': {source}", .file.display())]
    Checker {
        project: String,
        file: PathBuf,
        #[source]
        source: CheckerError,
    },

    /// The line offsets of the file could not be loaded.
    #[error("{project}: cannot read line offsets of '{}': {source}", .file.display())]
    Offsets {
        project: String,
        file: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ValidateError {
    pub fn project(&self) -> &str {
        match self {
            ValidateError::Unit { project, .. }
            | ValidateError::Index { project, .. }
            | ValidateError::Checker { project, .. }
            | ValidateError::Offsets { project, .. } => project,
        }
    }

    pub fn file(&self) -> &Path {
        match self {
            ValidateError::Unit { file, .. }
            | ValidateError::Index { file, .. }
            | ValidateError::Checker { file, .. }
            | ValidateError::Offsets { file, .. } => file,
        }
    }
}
