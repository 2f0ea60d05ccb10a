//! # srcupdate
//!
//! Editor-side source validation: refresh the semantic index for a file,
//! collect parser problems and static-checker markers, and report them as
//! one sorted list of diagnostics.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! validate     → Update command: SourceValidator, config, request errors
//!   ↓
//! diagnostics  → Diagnostic, normalization, position sort
//!   ↓
//! index        → Index service, read-lock guard, problem collection
//! checker      → Static checker, marker store, marker collection
//!   ↓
//! project      → Projects, translation units, build scheduling
//!   ↓
//! base         → Position, line offsets (TextSize → line:col)
//! ```

// ============================================================================
// MODULES (dependency order: base → project → index/checker → diagnostics → validate)
// ============================================================================

/// Foundation types: Position, FileOffsets, offsets providers
pub mod base;

/// Projects, translation units and the build service
pub mod project;

/// Semantic index access: refresh, read lock, syntax-tree problems
pub mod index;

/// Static checker runs and marker lookup
pub mod checker;

/// Diagnostic type, normalization and sorting
pub mod diagnostics;

/// The update command
pub mod validate;

// Re-export foundation types
pub use base::{Position, TextSize};

// Re-export the command surface
pub use diagnostics::Diagnostic;
pub use validate::{Services, SourceValidator, ValidateError, ValidationRequest, ValidatorConfig};
