//! The update command: refresh, validate, optionally rebuild.
//!
//! [`SourceValidator::run`] drives one [`ValidationRequest`] through the
//! services in [`Services`]:
//!
//! ```text
//! resolve project -> find unit -> refresh index
//!     -> (validate?) collect problems + markers -> normalize -> sort
//!     -> (build?) schedule incremental build
//! ```

mod config;
mod error;
mod request;

use std::path::{Path, PathBuf};

pub use config::ValidatorConfig;
pub use error::ValidateError;
pub use request::ValidationRequest;

use crate::base::OffsetsProvider;
use crate::checker::{MarkerStore, StaticChecker, collect_markers};
use crate::diagnostics::{self, Diagnostic};
use crate::index::{IndexService, collect_problems};
use crate::project::{BuildService, LanguageModel, Project, ProjectRegistry, TranslationUnit};

// ============================================================================
// SERVICES
// ============================================================================

/// Everything the validator talks to.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    /// Resolves project names; its full list is the index lock scope.
    pub projects: &'a dyn ProjectRegistry,
    /// Maps a project-relative path to its translation unit.
    pub model: &'a dyn LanguageModel,
    /// Semantic index: refresh, read lock and syntax trees.
    pub index: &'a dyn IndexService,
    /// Runs the static checker on demand.
    pub checker: &'a dyn StaticChecker,
    /// Holds the markers the checker leaves behind.
    pub markers: &'a dyn MarkerStore,
    /// Queues incremental builds.
    pub builds: &'a dyn BuildService,
    /// Line-offset tables of files on disk.
    pub offsets: &'a dyn OffsetsProvider,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Runs update requests against a set of [`Services`].
///
/// Holds no per-request state, so one validator can serve concurrent
/// requests.
pub struct SourceValidator<'a> {
    services: Services<'a>,
    config: ValidatorConfig,
}

impl<'a> SourceValidator<'a> {
    pub fn new(services: Services<'a>) -> Self {
        Self {
            services,
            config: ValidatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Handle one request.
    ///
    /// Returns `Ok(None)` when the project is unknown or validation was not
    /// requested, otherwise the file's diagnostics sorted by position. A
    /// failed build schedule is logged and does not fail the request.
    pub fn run(
        &self,
        request: &ValidationRequest,
    ) -> Result<Option<Vec<Diagnostic>>, ValidateError> {
        let Some(project) = self.services.projects.resolve(&request.project) else {
            tracing::debug!("no project named '{}', nothing to update", request.project);
            return Ok(None);
        };

        let unit = self
            .services
            .model
            .find_unit(&project, &request.file)
            .map_err(|source| ValidateError::Unit {
                project: request.project.clone(),
                file: request.file.clone(),
                source,
            })?;

        self.services
            .index
            .refresh(&unit, self.config.update_mode)
            .map_err(|source| ValidateError::Index {
                project: request.project.clone(),
                file: request.file.clone(),
                source,
            })?;
        self.services.offsets.invalidate(unit.location());
        tracing::debug!(
            "refreshed index for {} ({:?})",
            unit.path().display(),
            self.config.update_mode
        );

        if !request.validate {
            tracing::debug!("validation not requested for {}", unit.path().display());
            return Ok(None);
        }

        let diagnostics = self.validate(request, &unit)?;

        if request.build {
            self.schedule_build(&project);
        }

        Ok(Some(diagnostics))
    }

    fn validate(
        &self,
        request: &ValidationRequest,
        unit: &TranslationUnit,
    ) -> Result<Vec<Diagnostic>, ValidateError> {
        let scope = self.services.projects.all();
        let problems = collect_problems(self.services.index, &scope, unit, self.config.ast_style)
            .map_err(|source| ValidateError::Index {
                project: request.project.clone(),
                file: request.file.clone(),
                source,
            })?;

        let markers = collect_markers(self.services.checker, self.services.markers, unit.resource())
            .map_err(|source| ValidateError::Checker {
                project: request.project.clone(),
                file: request.file.clone(),
                source,
            })?;

        let resolver = self
            .services
            .offsets
            .for_file(unit.location())
            .map_err(|source| ValidateError::Offsets {
                project: request.project.clone(),
                file: request.file.clone(),
                source,
            })?;

        let file = self.report_path(unit.location());
        let diagnostics = diagnostics::normalize(
            problems,
            markers,
            &file,
            resolver.as_ref(),
            self.config.error_severity,
        );
        let diagnostics = diagnostics::sort(diagnostics);

        tracing::debug!(
            "{}: {} error(s), {} warning(s)",
            file.display(),
            diagnostics::error_count(&diagnostics),
            diagnostics::warning_count(&diagnostics)
        );
        Ok(diagnostics)
    }

    fn schedule_build(&self, project: &Project) {
        match self.services.builds.schedule_incremental(project) {
            Ok(()) => tracing::debug!("scheduled incremental build of '{}'", project.name()),
            Err(err) => tracing::warn!(
                "could not schedule incremental build of '{}': {}",
                project.name(),
                err
            ),
        }
    }

    fn report_path(&self, location: &Path) -> PathBuf {
        if self.config.forward_slashes {
            PathBuf::from(location.to_string_lossy().replace('\\', "/"))
        } else {
            location.to_path_buf()
        }
    }
}
