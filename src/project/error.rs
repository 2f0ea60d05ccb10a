//! Error types for project lookups and builds.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the [`LanguageModel`](super::LanguageModel).
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The path does not belong to any translation unit of the project.
    #[error("no translation unit for '{}' in project '{project}'", .path.display())]
    UnitNotFound { project: String, path: PathBuf },
}

impl ProjectError {
    pub fn unit_not_found(project: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::UnitNotFound {
            project: project.into(),
            path: path.into(),
        }
    }
}

/// Errors raised while scheduling or running a build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The build could not be queued.
    #[error("could not schedule build of '{project}': {message}")]
    Schedule { project: String, message: String },

    /// The build ran and failed.
    #[error("build of '{project}' failed: {message}")]
    Failed { project: String, message: String },
}

impl BuildError {
    pub fn schedule(project: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schedule {
            project: project.into(),
            message: message.into(),
        }
    }

    pub fn failed(project: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            project: project.into(),
            message: message.into(),
        }
    }
}
