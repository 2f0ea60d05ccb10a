//! Project, translation unit and resource handles, plus the lookup seams
//! that produce them.

use std::path::{Path, PathBuf};

use super::ProjectError;

/// A managed project known to the [`ProjectRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Project {
    name: String,
    root: PathBuf,
}

impl Project {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filesystem directory of the project.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Workspace resource that markers attach to.
///
/// The path is workspace-absolute (`/<project>/<relative path>`), not a
/// filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    path: PathBuf,
}

impl Resource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A source file of a project as seen by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationUnit {
    project: String,
    path: PathBuf,
    location: PathBuf,
    resource: Resource,
}

impl TranslationUnit {
    /// Unit for `path` (relative to the project root). The filesystem
    /// location defaults to `root/path`.
    pub fn new(project: &Project, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = project.root().join(&path);
        let resource = Resource::new(Path::new("/").join(project.name()).join(&path));
        Self {
            project: project.name().to_string(),
            path,
            location,
            resource,
        }
    }

    /// Override the filesystem location (linked files live outside the root).
    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = location.into();
        self
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Path relative to the project root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the file lives on disk.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }
}

/// Looks projects up by name.
pub trait ProjectRegistry: Send + Sync {
    /// The managed project called `name`, if there is one.
    fn resolve(&self, name: &str) -> Option<Project>;

    /// Every managed project. Used as the scope of the aggregate index lock.
    fn all(&self) -> Vec<Project>;
}

/// Maps a file path to the translation unit that owns it.
pub trait LanguageModel: Send + Sync {
    fn find_unit(&self, project: &Project, path: &Path) -> Result<TranslationUnit, ProjectError>;
}
