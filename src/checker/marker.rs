//! Markers as the marker store reports them.

/// Marker severity attribute values.
pub mod severity {
    pub const INFO: i32 = 0;
    pub const WARNING: i32 = 1;
    pub const ERROR: i32 = 2;
}

/// The type of a marker.
///
/// Store implementations map their type hierarchy onto this: anything that is
/// a subtype of the task marker type must be reported as [`MarkerKind::Task`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Problem markers (checker findings, build errors).
    Problem,
    /// In-source annotations such as to-do comments. Never a diagnostic.
    Task,
    /// Any other marker type, by its type id.
    Other(String),
}

impl MarkerKind {
    pub fn is_task(&self) -> bool {
        matches!(self, MarkerKind::Task)
    }
}

/// A marker attached to a resource.
///
/// Attributes are loosely typed on the store side, so every one of them may
/// be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMarker {
    pub kind: MarkerKind,
    /// `MESSAGE` attribute.
    pub message: Option<String>,
    /// `CHAR_START` attribute: byte offset of the first character.
    pub char_start: Option<i32>,
    /// `LINE_NUMBER` attribute (1-based).
    pub line_number: Option<i32>,
    /// `SEVERITY` attribute, see [`severity`].
    pub severity: Option<i32>,
}

impl RawMarker {
    /// A marker of `kind` with no attributes.
    pub fn new(kind: MarkerKind) -> Self {
        Self {
            kind,
            message: None,
            char_start: None,
            line_number: None,
            severity: None,
        }
    }

    pub fn problem() -> Self {
        Self::new(MarkerKind::Problem)
    }

    pub fn task() -> Self {
        Self::new(MarkerKind::Task)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_char_start(mut self, char_start: i32) -> Self {
        self.char_start = Some(char_start);
        self
    }

    pub fn with_line_number(mut self, line_number: i32) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_severity(mut self, severity: i32) -> Self {
        self.severity = Some(severity);
        self
    }
}

/// How a checker run was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchMode {
    /// Explicitly requested for one resource.
    OnDemand,
}

/// How far below a resource marker lookups reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerDepth {
    /// The resource itself only.
    Zero,
}
