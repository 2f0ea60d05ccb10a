//! Project management: projects, translation units, resources, builds.
//!
//! Everything here is a handle or a seam. Resolving names, locating units
//! and running builds are done by the embedding platform through the
//! [`ProjectRegistry`], [`LanguageModel`] and [`BuildService`] traits.

mod build;
mod error;
mod model;

pub use build::{BackgroundBuild, BuildService, ProjectBuilder};
pub use error::{BuildError, ProjectError};
pub use model::{LanguageModel, Project, ProjectRegistry, Resource, TranslationUnit};
