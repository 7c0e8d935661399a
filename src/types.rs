//! Core types shared by the walker, hasher and comparator.

use std::path::PathBuf;

/// Lowercase hexadecimal content digest
pub type ContentHash = String;

/// A file together with the digest of its bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRecord {
    pub path: PathBuf,
    pub hash: ContentHash,
}

impl FileRecord {
    pub fn new(path: PathBuf, hash: ContentHash) -> Self {
        Self { path, hash }
    }
}
