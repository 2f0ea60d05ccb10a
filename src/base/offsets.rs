//! Byte offset → line/column resolution.
//!
//! [`PositionResolver`] is the seam the diagnostic pipeline resolves through.
//! [`FileOffsets`] is the line-start table every resolver in this crate is
//! built on, [`DiskOffsets`] compiles one per call from the file on disk, and
//! [`CachedOffsets`] memoizes any provider per file until invalidated.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use text_size::TextSize;

use super::Position;

// ============================================================================
// TRAITS
// ============================================================================

/// Maps a byte offset within one file to a 1-based [`Position`].
pub trait PositionResolver: Send + Sync {
    fn resolve(&self, offset: TextSize) -> Position;
}

impl<F> PositionResolver for F
where
    F: Fn(TextSize) -> Position + Send + Sync,
{
    fn resolve(&self, offset: TextSize) -> Position {
        self(offset)
    }
}

/// Hands out a [`PositionResolver`] for a file path.
pub trait OffsetsProvider: Send + Sync {
    /// Get the resolver for `path`.
    fn for_file(&self, path: &Path) -> io::Result<Arc<dyn PositionResolver>>;

    /// Forget anything memoized for `path`. The validator calls this after
    /// refreshing the index entry of a file.
    fn invalidate(&self, _path: &Path) {}
}

// ============================================================================
// FILE OFFSETS
// ============================================================================

/// Line-start table of a single file.
///
/// Line breaks are `\n`, `\r\n` and a lone `\r`. Columns are byte columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOffsets {
    line_starts: Vec<TextSize>,
}

impl FileOffsets {
    /// Build the table for in-memory text.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Build the table for raw file contents (not required to be UTF-8).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(text_size(i + 1)),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(text_size(i + 1));
                }
                _ => {}
            }
            i += 1;
        }
        Self { line_starts }
    }

    /// Read `path` and build its table.
    pub fn compile(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Number of lines (an empty file has one).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.line_starts.get(index).copied()
    }

    /// Resolve `offset`. Offsets past the end of the file land on the last line.
    pub fn resolve(&self, offset: TextSize) -> Position {
        // line_starts[0] is 0, so at least one start is <= offset.
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = u32::from(offset - start) + 1;
        Position::new(u32::try_from(line).unwrap_or(u32::MAX), column)
    }
}

impl PositionResolver for FileOffsets {
    fn resolve(&self, offset: TextSize) -> Position {
        FileOffsets::resolve(self, offset)
    }
}

fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

// ============================================================================
// PROVIDERS
// ============================================================================

/// Compiles a fresh [`FileOffsets`] from disk on every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskOffsets;

impl OffsetsProvider for DiskOffsets {
    fn for_file(&self, path: &Path) -> io::Result<Arc<dyn PositionResolver>> {
        Ok(Arc::new(FileOffsets::compile(path)?))
    }
}

/// Memoizes the resolvers of another provider, one per path.
///
/// A table whose load overlaps an invalidation is handed to its caller but
/// not stored.
pub struct CachedOffsets<P> {
    inner: P,
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    resolvers: FxHashMap<PathBuf, Arc<dyn PositionResolver>>,
    /// Bumped by every invalidation.
    generation: u64,
}

impl<P: OffsetsProvider> CachedOffsets<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Number of memoized files.
    pub fn len(&self) -> usize {
        self.tables.read().resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().resolvers.is_empty()
    }

    /// Drop every memoized table.
    pub fn clear(&self) {
        let mut tables = self.tables.write();
        tables.resolvers.clear();
        tables.generation += 1;
    }
}

impl<P: OffsetsProvider> OffsetsProvider for CachedOffsets<P> {
    fn for_file(&self, path: &Path) -> io::Result<Arc<dyn PositionResolver>> {
        let generation = {
            let tables = self.tables.read();
            if let Some(table) = tables.resolvers.get(path) {
                tracing::trace!("offsets cache hit: {}", path.display());
                return Ok(Arc::clone(table));
            }
            tables.generation
        };

        let table = self.inner.for_file(path)?;

        let mut tables = self.tables.write();
        if tables.generation == generation {
            tables
                .resolvers
                .insert(path.to_path_buf(), Arc::clone(&table));
        } else {
            tracing::trace!(
                "offsets of {} invalidated while loading, not cached",
                path.display()
            );
        }
        Ok(table)
    }

    fn invalidate(&self, path: &Path) {
        {
            let mut tables = self.tables.write();
            tables.resolvers.remove(path);
            tables.generation += 1;
        }
        self.inner.invalidate(path);
    }
}
