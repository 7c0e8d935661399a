//! Path canonicalization and root validation

use crate::error::CoverageError;
use std::path::{Path, PathBuf};

/// Canonicalize a path for visited-set bookkeeping
///
/// Resolves symlinks, `..` and `.`. Uses dunce so Windows paths stay in
/// their familiar form instead of the `\\?\` verbatim prefix.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, CoverageError> {
    dunce::canonicalize(path).map_err(|e| CoverageError::io(path, e))
}

/// Make a path absolute without resolving symlinks
pub fn absolute_path(path: &Path) -> Result<PathBuf, CoverageError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| CoverageError::io(path, e))?;
    Ok(cwd.join(path))
}

/// Validate that `path` is an existing directory and return it in absolute form
///
/// Both trees are checked with this before any hashing happens, so a bad
/// argument never produces partial work.
pub fn resolve_root(path: &Path) -> Result<PathBuf, CoverageError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CoverageError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(CoverageError::io(path, e)),
    };

    if !metadata.is_dir() {
        return Err(CoverageError::NotADirectory(path.to_path_buf()));
    }

    absolute_path(path)
}
