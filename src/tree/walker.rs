//! Filesystem walker for enumerating every regular file under a root

use crate::error::CoverageError;
use crate::tree::path;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Lazily iterate over every file reachable from the root
    ///
    /// Fails up front if the root is missing or not a directory. Errors met
    /// further down are yielded as `Err` items.
    pub fn files(&self) -> Result<Files, CoverageError> {
        let root = path::resolve_root(&self.root)?;
        let mut visited = HashSet::new();
        visited.insert(path::canonicalize_path(&root)?);
        let pending = list_children(&root)?;
        debug!(root = %root.display(), entries = pending.len(), "Starting walk");
        Ok(Files { pending, visited })
    }

    /// Walk the whole tree and collect the file paths
    ///
    /// Order is the walk order, not sorted.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, CoverageError> {
        self.files()?.collect()
    }
}

/// Iterator over the files of a tree
///
/// Each entry is resolved to its canonical form before it is visited; an
/// entry whose canonical form was seen already is skipped. This is what stops
/// symlink cycles from recursing forever.
pub struct Files {
    pending: Vec<PathBuf>,
    visited: HashSet<PathBuf>,
}

impl Iterator for Files {
    type Item = Result<PathBuf, CoverageError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.pending.pop() {
            let canonical = match path::canonicalize_path(&entry) {
                Ok(canonical) => canonical,
                Err(e) => return Some(Err(e)),
            };
            if !self.visited.insert(canonical.clone()) {
                trace!(path = %entry.display(), "Skipping already visited entry");
                continue;
            }

            if canonical.is_dir() {
                match list_children(&entry) {
                    Ok(children) => self.pending.extend(children),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                return Some(Ok(entry));
            }
        }
        None
    }
}

/// Direct children of a directory, joined onto `dir`
fn list_children(dir: &Path) -> Result<Vec<PathBuf>, CoverageError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| CoverageError::io(dir, e))?;
    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| CoverageError::io(dir, e))?;
        children.push(entry.path());
    }
    debug!(dir = %dir.display(), children = children.len(), "Listed directory");
    Ok(children)
}
