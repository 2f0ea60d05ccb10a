//! Validator configuration.

use crate::checker::severity;
use crate::index::{AstStyle, UpdateMode};

/// Knobs of the validation pipeline. `Default` gives the standard behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    /// Marker severity that makes a marker an error. Anything else,
    /// including no severity at all, is a warning.
    pub error_severity: i32,
    /// Style used to build the unit's syntax tree.
    pub ast_style: AstStyle,
    /// Mode of the index refresh done on every run.
    pub update_mode: UpdateMode,
    /// Report file paths with `/` separators.
    pub forward_slashes: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            error_severity: severity::ERROR,
            ast_style: AstStyle::default(),
            update_mode: UpdateMode::All,
            forward_slashes: true,
        }
    }
}

impl ValidatorConfig {
    pub fn with_error_severity(mut self, error_severity: i32) -> Self {
        self.error_severity = error_severity;
        self
    }

    pub fn with_ast_style(mut self, ast_style: AstStyle) -> Self {
        self.ast_style = ast_style;
        self
    }

    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    pub fn with_forward_slashes(mut self, forward_slashes: bool) -> Self {
        self.forward_slashes = forward_slashes;
        self
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
