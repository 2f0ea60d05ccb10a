use std::cmp::Ordering;

use super::Diagnostic;

/// Order by line, then column.
pub fn by_position(a: &Diagnostic, b: &Diagnostic) -> Ordering {
    a.line()
        .cmp(&b.line())
        .then(a.column().cmp(&b.column()))
}

/// Sort into editor order.
///
/// The sort is stable: diagnostics at the same position keep their input
/// order, which is what keeps problems ahead of markers.
pub fn sort(mut diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    diagnostics.sort_by(by_position);
    diagnostics
}
