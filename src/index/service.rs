//! The semantic index seam and the data it hands back.

use text_size::TextSize;

use super::IndexError;
use crate::project::{Project, TranslationUnit};

/// How much of a unit's index entry a refresh rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UpdateMode {
    /// Re-index unconditionally.
    #[default]
    All,
    /// Re-index if the file timestamp changed.
    CheckTimestamps,
    /// Re-index if the file contents hash changed.
    CheckContentsHash,
}

/// Options for building a unit's syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AstStyle {
    /// Configure the parse from the file's own source context instead of a
    /// prebuilt index entry.
    pub configure_using_source_context: bool,
    /// Don't re-parse headers the index already covers.
    pub skip_indexed_headers: bool,
}

impl Default for AstStyle {
    fn default() -> Self {
        Self {
            configure_using_source_context: true,
            skip_indexed_headers: true,
        }
    }
}

/// A problem reported by the parser or by semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProblem {
    pub message: String,
    /// Byte offset of the problem's first character.
    pub start: TextSize,
    pub is_warning: bool,
}

impl RawProblem {
    pub fn error(message: impl Into<String>, start: impl Into<TextSize>) -> Self {
        Self {
            message: message.into(),
            start: start.into(),
            is_warning: false,
        }
    }

    pub fn warning(message: impl Into<String>, start: impl Into<TextSize>) -> Self {
        Self {
            message: message.into(),
            start: start.into(),
            is_warning: true,
        }
    }
}

/// Problems found while building a unit's syntax tree, split by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub preprocessor_problems: Vec<RawProblem>,
    pub semantic_problems: Vec<RawProblem>,
}

impl SyntaxTree {
    pub fn new(preprocessor_problems: Vec<RawProblem>, semantic_problems: Vec<RawProblem>) -> Self {
        Self {
            preprocessor_problems,
            semantic_problems,
        }
    }

    /// Preprocessor problems first, then semantic problems, each stage in
    /// its own order.
    pub fn into_problems(self) -> Vec<RawProblem> {
        let mut problems = self.preprocessor_problems;
        problems.extend(self.semantic_problems);
        problems
    }
}

/// The shared semantic index.
///
/// `acquire_read_lock` and `release_read_lock` must be paired; use
/// [`IndexReadGuard`](super::IndexReadGuard) rather than calling them directly.
pub trait IndexService: Send + Sync {
    /// Refresh the index entry of `unit`.
    fn refresh(&self, unit: &TranslationUnit, mode: UpdateMode) -> Result<(), IndexError>;

    /// Take a shared lock on the aggregate index of `scope`.
    fn acquire_read_lock(&self, scope: &[Project]) -> Result<(), IndexError>;

    /// Release the lock taken by `acquire_read_lock`.
    fn release_read_lock(&self);

    /// Build the syntax tree of `unit`. Called with the read lock held.
    fn build_syntax_tree(
        &self,
        unit: &TranslationUnit,
        style: AstStyle,
    ) -> Result<SyntaxTree, IndexError>;
}
