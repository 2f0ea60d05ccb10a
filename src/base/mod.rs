//! Foundation types for the validation pipeline.
//!
//! This module provides:
//! - [`Position`] - 1-based line/column pairs
//! - [`PositionResolver`], [`OffsetsProvider`] - byte offset resolution seams
//! - [`FileOffsets`], [`DiskOffsets`], [`CachedOffsets`] - line-start tables
//!
//! This module has NO dependencies on other crate modules.

mod offsets;
mod position;

pub use offsets::{CachedOffsets, DiskOffsets, FileOffsets, OffsetsProvider, PositionResolver};
pub use position::Position;

// Re-export text-size types for convenience
pub use text_size::{self, TextSize};
