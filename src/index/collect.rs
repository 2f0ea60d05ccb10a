//! Problem collection under the index read lock.

use super::{AstStyle, IndexError, IndexService, RawProblem};
use crate::project::{Project, TranslationUnit};

/// Holds the index read lock; releases it when dropped.
///
/// Dropping also happens during unwinding, so the lock is released on every
/// path out of the scope that owns the guard.
#[must_use = "the read lock is released as soon as the guard is dropped"]
pub struct IndexReadGuard<'a> {
    index: &'a dyn IndexService,
}

impl<'a> IndexReadGuard<'a> {
    /// Acquire the read lock of `index` over `scope`.
    pub fn acquire(index: &'a dyn IndexService, scope: &[Project]) -> Result<Self, IndexError> {
        index.acquire_read_lock(scope)?;
        Ok(Self { index })
    }
}

impl Drop for IndexReadGuard<'_> {
    fn drop(&mut self) {
        self.index.release_read_lock();
    }
}

/// Collect the parser and semantic problems of `unit`.
///
/// Preprocessor problems come first, then semantic problems. The read lock
/// over `scope` is held while the syntax tree is built.
pub fn collect_problems(
    index: &dyn IndexService,
    scope: &[Project],
    unit: &TranslationUnit,
    style: AstStyle,
) -> Result<Vec<RawProblem>, IndexError> {
    let _lock = IndexReadGuard::acquire(index, scope)?;
    let tree = index.build_syntax_tree(unit, style)?;

    let problems = tree.into_problems();
    tracing::debug!(
        "collected {} problem(s) for {}",
        problems.len(),
        unit.path().display()
    );
    Ok(problems)
}
