//! Coverage comparison
//!
//! A source tree is covered by another tree when every source file has a
//! byte-identical counterpart somewhere in the other tree. Names and
//! locations play no part; only content digests are compared.

use crate::error::CoverageError;
use crate::tree::hasher::ContentHasher;
use crate::tree::walker::Walker;
use crate::types::{ContentHash, FileRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Hash every file under `dir`, in walk order
pub fn dir_contents<H>(dir: &Path, hasher: &H) -> Result<Vec<FileRecord>, CoverageError>
where
    H: ContentHasher + ?Sized,
{
    let mut records = Vec::new();
    for path in Walker::new(dir).files()? {
        let path = path?;
        let hash = hasher.hash_file(&path)?;
        debug!(path = %path.display(), hash = %hash, "Hashed file");
        records.push(FileRecord::new(path, hash));
    }
    Ok(records)
}

/// Files of `src` whose content appears nowhere under `covered_by`
///
/// Returned in source walk order. Files sharing missing content are each
/// reported. An empty result means full coverage.
pub fn covered<H>(
    src: &Path,
    covered_by: &Path,
    hasher: &H,
) -> Result<Vec<FileRecord>, CoverageError>
where
    H: ContentHasher + ?Sized,
{
    Ok(check_coverage(src, covered_by, hasher)?.missing)
}

/// Result of a coverage check, with counts for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub source_root: PathBuf,
    pub coverage_root: PathBuf,
    pub source_files: usize,
    pub coverage_files: usize,
    pub distinct_coverage_hashes: usize,
    pub missing: Vec<FileRecord>,
}

impl CoverageReport {
    pub fn is_covered(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Run the comparison and keep the statistics alongside the missing files
pub fn check_coverage<H>(
    src: &Path,
    covered_by: &Path,
    hasher: &H,
) -> Result<CoverageReport, CoverageError>
where
    H: ContentHasher + ?Sized,
{
    // Validate both roots before hashing anything
    let source_root = crate::tree::path::resolve_root(src)?;
    let coverage_root = crate::tree::path::resolve_root(covered_by)?;

    let source = dir_contents(&source_root, hasher)?;
    let coverage = dir_contents(&coverage_root, hasher)?;
    let coverage_files = coverage.len();

    let coverage_hashes: HashSet<ContentHash> =
        coverage.into_iter().map(|record| record.hash).collect();

    let source_files = source.len();
    let missing: Vec<FileRecord> = source
        .into_iter()
        .filter(|record| !coverage_hashes.contains(&record.hash))
        .collect();

    info!(
        source_root = %source_root.display(),
        coverage_root = %coverage_root.display(),
        source_files,
        coverage_files,
        missing = missing.len(),
        "Coverage check complete"
    );

    Ok(CoverageReport {
        source_root,
        coverage_root,
        source_files,
        coverage_files,
        distinct_coverage_hashes: coverage_hashes.len(),
        missing,
    })
}
