//! Recording fakes for the validator's collaborators.
//!
//! Every fake appends to one shared [`CallLog`], so tests can assert on the
//! order in which the validator talks to its services.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use srcupdate::base::{FileOffsets, OffsetsProvider, PositionResolver};
use srcupdate::checker::{
    CheckerError, LaunchMode, MarkerDepth, MarkerStore, RawMarker, StaticChecker,
};
use srcupdate::index::{AstStyle, IndexError, IndexService, RawProblem, SyntaxTree, UpdateMode};
use srcupdate::project::{
    BuildError, BuildService, LanguageModel, Project, ProjectError, ProjectRegistry, Resource,
    TranslationUnit,
};
use srcupdate::{Services, SourceValidator};

use super::fixtures::GRID_SOURCE;

pub const PROJECT: &str = "demo";
pub const PROJECT_ROOT: &str = "/work/demo";
pub const FILE: &str = "src/main.c";
pub const LOCATION: &str = "/work/demo/src/main.c";

// ============================================================================
// CALL LOG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Refresh(PathBuf, UpdateMode),
    AcquireLock(Vec<String>),
    ReleaseLock,
    SyntaxTree(PathBuf, AstStyle),
    Check(PathBuf, LaunchMode),
    FindMarkers(PathBuf, MarkerDepth),
    LoadOffsets(PathBuf),
    Invalidate(PathBuf),
    ScheduleBuild(String),
}

#[derive(Debug, Default)]
pub struct CallLog {
    calls: Mutex<Vec<Call>>,
}

impl CallLog {
    pub fn push(&self, call: Call) {
        self.calls.lock().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    pub fn refreshes(&self) -> usize {
        self.count(|c| matches!(c, Call::Refresh(..)))
    }

    pub fn builds(&self) -> usize {
        self.count(|c| matches!(c, Call::ScheduleBuild(_)))
    }

    /// Whether either producer was consulted.
    pub fn collected_anything(&self) -> bool {
        self.count(|c| {
            matches!(
                c,
                Call::AcquireLock(_)
                    | Call::SyntaxTree(..)
                    | Call::Check(..)
                    | Call::FindMarkers(..)
            )
        }) > 0
    }
}

// ============================================================================
// FAKES
// ============================================================================

pub struct FakeRegistry {
    pub projects: Vec<Project>,
}

impl ProjectRegistry for FakeRegistry {
    fn resolve(&self, name: &str) -> Option<Project> {
        self.projects.iter().find(|p| p.name() == name).cloned()
    }

    fn all(&self) -> Vec<Project> {
        self.projects.clone()
    }
}

/// Maps every path to a unit under the project root, except `missing`.
#[derive(Default)]
pub struct FakeModel {
    pub missing: Vec<PathBuf>,
}

impl LanguageModel for FakeModel {
    fn find_unit(&self, project: &Project, path: &Path) -> Result<TranslationUnit, ProjectError> {
        if self.missing.iter().any(|m| m == path) {
            return Err(ProjectError::unit_not_found(project.name(), path));
        }
        Ok(TranslationUnit::new(project, path))
    }
}

pub struct FakeIndex {
    log: Arc<CallLog>,
    pub preprocessor_problems: Vec<RawProblem>,
    pub semantic_problems: Vec<RawProblem>,
    pub fail_refresh: bool,
    pub fail_lock: bool,
    pub fail_syntax_tree: bool,
}

impl IndexService for FakeIndex {
    fn refresh(&self, unit: &TranslationUnit, mode: UpdateMode) -> Result<(), IndexError> {
        self.log.push(Call::Refresh(unit.path().to_path_buf(), mode));
        if self.fail_refresh {
            return Err(IndexError::refresh(unit.path(), "index database is read-only"));
        }
        Ok(())
    }

    fn acquire_read_lock(&self, scope: &[Project]) -> Result<(), IndexError> {
        self.log.push(Call::AcquireLock(
            scope.iter().map(|p| p.name().to_string()).collect(),
        ));
        if self.fail_lock {
            return Err(IndexError::lock("interrupted while waiting"));
        }
        Ok(())
    }

    fn release_read_lock(&self) {
        self.log.push(Call::ReleaseLock);
    }

    fn build_syntax_tree(
        &self,
        unit: &TranslationUnit,
        style: AstStyle,
    ) -> Result<SyntaxTree, IndexError> {
        self.log.push(Call::SyntaxTree(unit.path().to_path_buf(), style));
        if self.fail_syntax_tree {
            return Err(IndexError::syntax_tree(unit.path(), "parser crashed"));
        }
        Ok(SyntaxTree::new(
            self.preprocessor_problems.clone(),
            self.semantic_problems.clone(),
        ))
    }
}

pub struct FakeChecker {
    log: Arc<CallLog>,
    pub fail: bool,
}

impl StaticChecker for FakeChecker {
    fn run(&self, resource: &Resource, mode: LaunchMode) -> Result<(), CheckerError> {
        self.log.push(Call::Check(resource.path().to_path_buf(), mode));
        if self.fail {
            return Err(CheckerError::run(resource.path(), "checker not configured"));
        }
        Ok(())
    }
}

pub struct FakeMarkerStore {
    log: Arc<CallLog>,
    pub markers: Vec<RawMarker>,
    pub fail: bool,
}

impl MarkerStore for FakeMarkerStore {
    fn find_markers(
        &self,
        resource: &Resource,
        depth: MarkerDepth,
    ) -> Result<Vec<RawMarker>, CheckerError> {
        self.log
            .push(Call::FindMarkers(resource.path().to_path_buf(), depth));
        if self.fail {
            return Err(CheckerError::markers(resource.path(), "resource deleted"));
        }
        Ok(self.markers.clone())
    }
}

pub struct FakeBuilds {
    log: Arc<CallLog>,
    pub fail: bool,
}

impl BuildService for FakeBuilds {
    fn schedule_incremental(&self, project: &Project) -> Result<(), BuildError> {
        self.log.push(Call::ScheduleBuild(project.name().to_string()));
        if self.fail {
            return Err(BuildError::schedule(project.name(), "build already running"));
        }
        Ok(())
    }
}

/// Serves every file from the same in-memory text.
pub struct FakeOffsets {
    log: Arc<CallLog>,
    pub source: String,
    pub fail: bool,
}

impl OffsetsProvider for FakeOffsets {
    fn for_file(&self, path: &Path) -> io::Result<Arc<dyn PositionResolver>> {
        self.log.push(Call::LoadOffsets(path.to_path_buf()));
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        Ok(Arc::new(FileOffsets::from_text(&self.source)))
    }

    fn invalidate(&self, path: &Path) {
        self.log.push(Call::Invalidate(path.to_path_buf()));
    }
}

// ============================================================================
// ENVIRONMENT
// ============================================================================

/// One project `demo` at `/work/demo`, no problems, no markers, and
/// [`GRID_SOURCE`] as the contents of every file.
pub struct FakeEnv {
    pub log: Arc<CallLog>,
    pub projects: FakeRegistry,
    pub model: FakeModel,
    pub index: FakeIndex,
    pub checker: FakeChecker,
    pub markers: FakeMarkerStore,
    pub builds: FakeBuilds,
    pub offsets: FakeOffsets,
}

impl FakeEnv {
    pub fn new() -> Self {
        let log = Arc::new(CallLog::default());
        Self {
            projects: FakeRegistry {
                projects: vec![Project::new(PROJECT, PROJECT_ROOT)],
            },
            model: FakeModel::default(),
            index: FakeIndex {
                log: Arc::clone(&log),
                preprocessor_problems: Vec::new(),
                semantic_problems: Vec::new(),
                fail_refresh: false,
                fail_lock: false,
                fail_syntax_tree: false,
            },
            checker: FakeChecker {
                log: Arc::clone(&log),
                fail: false,
            },
            markers: FakeMarkerStore {
                log: Arc::clone(&log),
                markers: Vec::new(),
                fail: false,
            },
            builds: FakeBuilds {
                log: Arc::clone(&log),
                fail: false,
            },
            offsets: FakeOffsets {
                log: Arc::clone(&log),
                source: GRID_SOURCE.to_string(),
                fail: false,
            },
            log,
        }
    }

    pub fn with_problems(mut self, problems: Vec<RawProblem>) -> Self {
        self.index.semantic_problems = problems;
        self
    }

    pub fn with_markers(mut self, markers: Vec<RawMarker>) -> Self {
        self.markers.markers = markers;
        self
    }

    pub fn services(&self) -> Services<'_> {
        Services {
            projects: &self.projects,
            model: &self.model,
            index: &self.index,
            checker: &self.checker,
            markers: &self.markers,
            builds: &self.builds,
            offsets: &self.offsets,
        }
    }

    pub fn validator(&self) -> SourceValidator<'_> {
        SourceValidator::new(self.services())
    }
}

impl Default for FakeEnv {
    fn default() -> Self {
        Self::new()
    }
}
