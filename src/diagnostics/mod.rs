//! Diagnostics: the unified, positioned output of a validation run.
//!
//! Parser problems and checker markers are converted into one [`Diagnostic`]
//! shape by [`normalize`] and put in editor order by [`sort`].

mod normalize;
mod sort;

use std::path::{Path, PathBuf};

pub use normalize::{RawDiagnostic, normalize};
pub use sort::{by_position, sort};

use crate::base::Position;

// ============================================================================
// DIAGNOSTIC
// ============================================================================

/// An error or warning at a 1-based line/column of a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    message: String,
    #[cfg_attr(feature = "serde", serde(rename = "filename"))]
    file: PathBuf,
    line: u32,
    column: u32,
    #[cfg_attr(feature = "serde", serde(rename = "warning"))]
    is_warning: bool,
}

impl Diagnostic {
    pub fn new(
        message: impl Into<String>,
        file: impl Into<PathBuf>,
        position: Position,
        is_warning: bool,
    ) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            line: position.line.max(1),
            column: position.column.max(1),
            is_warning,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>, file: impl Into<PathBuf>, position: Position) -> Self {
        Self::new(message, file, position, false)
    }

    /// Create a warning diagnostic.
    pub fn warning(
        message: impl Into<String>,
        file: impl Into<PathBuf>,
        position: Position,
    ) -> Self {
        Self::new(message, file, position, true)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_warning(&self) -> bool {
        self.is_warning
    }

    pub fn is_error(&self) -> bool {
        !self.is_warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_warning { "warning" } else { "error" };
        write!(
            f,
            "{}:{}:{}: {}: {}",
            self.file.display(),
            self.line,
            self.column,
            level,
            self.message
        )
    }
}

// ============================================================================
// SUMMARIES
// ============================================================================

/// Number of error diagnostics.
pub fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}

/// Number of warning diagnostics.
pub fn warning_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_warning()).count()
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

/// Render diagnostics as the JSON array editor clients consume
/// (`message`, `filename`, `line`, `column`, `warning`).
#[cfg(feature = "serde")]
pub fn to_json(diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
    serde_json::to_string(diagnostics)
}
