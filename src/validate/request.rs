use std::path::PathBuf;

/// One invocation of the update command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    /// Name of the project owning the file.
    pub project: String,
    /// Path of the file, relative to the project.
    pub file: PathBuf,
    /// Compute diagnostics after refreshing the index.
    pub validate: bool,
    /// Schedule an incremental build after validating. Ignored unless
    /// `validate` is set.
    pub build: bool,
}

impl ValidationRequest {
    /// A refresh-only request.
    pub fn new(project: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            file: file.into(),
            validate: false,
            build: false,
        }
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_build(mut self, build: bool) -> Self {
        self.build = build;
        self
    }
}
