//! Static checker integration.
//!
//! A checker run writes markers into a marker store; [`collect_markers`]
//! triggers one on-demand run and reads the resource's markers back.

mod collect;
mod error;
mod marker;

pub use collect::{MarkerStore, StaticChecker, collect_markers};
pub use error::CheckerError;
pub use marker::{LaunchMode, MarkerDepth, MarkerKind, RawMarker, severity};
