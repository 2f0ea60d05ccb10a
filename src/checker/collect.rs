//! Static checker seams and marker collection.

use super::{CheckerError, LaunchMode, MarkerDepth, RawMarker};
use crate::project::Resource;

/// Runs static analysis and records its findings as markers.
pub trait StaticChecker: Send + Sync {
    /// Analyze `resource`. Returns when the run is finished and its markers
    /// are in the store.
    fn run(&self, resource: &Resource, mode: LaunchMode) -> Result<(), CheckerError>;
}

/// Reads markers attached to resources.
pub trait MarkerStore: Send + Sync {
    /// All markers on `resource` down to `depth`, subtypes included, in
    /// store order.
    fn find_markers(
        &self,
        resource: &Resource,
        depth: MarkerDepth,
    ) -> Result<Vec<RawMarker>, CheckerError>;
}

/// Run the checker on demand against `resource`, then read back the markers
/// of that resource alone.
pub fn collect_markers(
    checker: &dyn StaticChecker,
    store: &dyn MarkerStore,
    resource: &Resource,
) -> Result<Vec<RawMarker>, CheckerError> {
    checker.run(resource, LaunchMode::OnDemand)?;
    let markers = store.find_markers(resource, MarkerDepth::Zero)?;

    tracing::debug!(
        "collected {} marker(s) for {}",
        markers.len(),
        resource.path().display()
    );
    Ok(markers)
}
