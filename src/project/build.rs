//! Incremental rebuild scheduling.
//!
//! The validator only ever talks to a [`BuildService`] and never waits on
//! it. [`BackgroundBuild`] adapts a blocking [`ProjectBuilder`] to that
//! contract by handing every build to the rayon pool.

use std::sync::Arc;

use super::{BuildError, Project};

/// Schedules builds without blocking the caller.
pub trait BuildService: Send + Sync {
    /// Queue an incremental build of `project`. Returns once queued.
    fn schedule_incremental(&self, project: &Project) -> Result<(), BuildError>;
}

/// Runs an incremental build to completion on the calling thread.
pub trait ProjectBuilder: Send + Sync + 'static {
    fn build_incremental(&self, project: &Project) -> Result<(), BuildError>;
}

/// Fire-and-forget [`BuildService`] over a blocking [`ProjectBuilder`].
///
/// Builds run on the rayon global pool and are never joined. Failures are
/// logged; nobody is left to return them to.
pub struct BackgroundBuild<B> {
    builder: Arc<B>,
}

impl<B: ProjectBuilder> BackgroundBuild<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }
}

impl<B: ProjectBuilder> BuildService for BackgroundBuild<B> {
    fn schedule_incremental(&self, project: &Project) -> Result<(), BuildError> {
        let builder = Arc::clone(&self.builder);
        let project = project.clone();
        tracing::debug!("queueing incremental build of '{}'", project.name());

        rayon::spawn(move || {
            if let Err(err) = builder.build_incremental(&project) {
                tracing::warn!("background build failed: {}", err);
            }
        });
        Ok(())
    }
}
