/// A resolved source position (1-based line and column).
///
/// Positions come from a [`PositionResolver`](super::PositionResolver) or are
/// synthesized from a bare line number. Both coordinates are clamped to 1 so
/// every diagnostic built from a `Position` is addressable in an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
        }
    }

    /// Position at the first column of `line`.
    pub fn line_start(line: u32) -> Self {
        Self::new(line, 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
