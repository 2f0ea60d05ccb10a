//! Conversion of raw problems and markers into [`Diagnostic`]s.

use std::path::Path;

use text_size::TextSize;

use super::Diagnostic;
use crate::base::{Position, PositionResolver};
use crate::checker::RawMarker;
use crate::index::RawProblem;

/// Output of either producer, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDiagnostic {
    Problem(RawProblem),
    Marker(RawMarker),
}

impl RawDiagnostic {
    /// Convert into a diagnostic for `file`.
    ///
    /// Problems always convert. Markers are dropped when they are tasks or
    /// carry no usable position. A marker is an error only when its severity
    /// is exactly `error_severity`; a missing severity means warning.
    pub fn into_diagnostic(
        self,
        file: &Path,
        resolver: &dyn PositionResolver,
        error_severity: i32,
    ) -> Option<Diagnostic> {
        match self {
            RawDiagnostic::Problem(problem) => Some(Diagnostic::new(
                problem.message,
                file,
                resolver.resolve(problem.start),
                problem.is_warning,
            )),
            RawDiagnostic::Marker(marker) => {
                if marker.kind.is_task() {
                    tracing::trace!("skipping task marker: {:?}", marker.message);
                    return None;
                }
                let Some(position) = marker_position(&marker, resolver) else {
                    tracing::trace!("skipping marker without position: {:?}", marker.message);
                    return None;
                };
                let is_warning = marker.severity.is_none_or(|s| s != error_severity);
                Some(Diagnostic::new(
                    marker.message.unwrap_or_default(),
                    file,
                    position,
                    is_warning,
                ))
            }
        }
    }
}

/// `CHAR_START` when positive, else `(LINE_NUMBER, 1)` when positive.
fn marker_position(marker: &RawMarker, resolver: &dyn PositionResolver) -> Option<Position> {
    let char_start = marker
        .char_start
        .and_then(|start| u32::try_from(start).ok())
        .filter(|&start| start > 0);
    if let Some(start) = char_start {
        return Some(resolver.resolve(TextSize::from(start)));
    }

    marker
        .line_number
        .and_then(|line| u32::try_from(line).ok())
        .filter(|&line| line > 0)
        .map(Position::line_start)
}

/// Normalize both producers' output for `file`.
///
/// Problem diagnostics come first, in producer order, followed by the
/// surviving marker diagnostics in store order.
pub fn normalize(
    problems: Vec<RawProblem>,
    markers: Vec<RawMarker>,
    file: &Path,
    resolver: &dyn PositionResolver,
    error_severity: i32,
) -> Vec<Diagnostic> {
    problems
        .into_iter()
        .map(RawDiagnostic::Problem)
        .chain(markers.into_iter().map(RawDiagnostic::Marker))
        .filter_map(|raw| raw.into_diagnostic(file, resolver, error_severity))
        .collect()
}
