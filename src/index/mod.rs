//! Semantic index access.
//!
//! The index itself lives outside this crate behind [`IndexService`]. This
//! module owns the read-lock discipline around it ([`IndexReadGuard`]) and
//! the extraction of parser/semantic problems ([`collect_problems`]).

mod collect;
mod error;
mod service;

pub use collect::{IndexReadGuard, collect_problems};
pub use error::IndexError;
pub use service::{AstStyle, IndexService, RawProblem, SyntaxTree, UpdateMode};
