//! Content hashing for files
//!
//! The comparator only needs a `path -> digest` capability, expressed as the
//! [`ContentHasher`] trait. SHA-1 is the default; BLAKE3 is available as an
//! alternative. Any closure with the right signature also works, which is
//! how tests substitute their own digests.

use crate::error::CoverageError;
use crate::types::ContentHash;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Read buffer size used while streaming file content
const BUF_SIZE: usize = 64 * 1024;

/// Computes the digest of a file's full byte content
pub trait ContentHasher {
    fn hash_file(&self, path: &Path) -> Result<ContentHash, CoverageError>;
}

impl<F> ContentHasher for F
where
    F: Fn(&Path) -> Result<ContentHash, CoverageError>,
{
    fn hash_file(&self, path: &Path) -> Result<ContentHash, CoverageError> {
        self(path)
    }
}

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// 160-bit SHA-1, 40 hex characters
    #[default]
    Sha1,
    /// 256-bit BLAKE3, 64 hex characters
    Blake3,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(DigestAlgorithm::Sha1),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            other => Err(CoverageError::Config(format!(
                "Unknown digest algorithm: {} (must be 'sha1' or 'blake3')",
                other
            ))),
        }
    }
}

/// File hasher for a fixed algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHasher {
    algorithm: DigestAlgorithm,
}

impl FileHasher {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

impl ContentHasher for FileHasher {
    fn hash_file(&self, path: &Path) -> Result<ContentHash, CoverageError> {
        match self.algorithm {
            DigestAlgorithm::Sha1 => sha1_file_hash(path),
            DigestAlgorithm::Blake3 => blake3_file_hash(path),
        }
    }
}

/// SHA-1 of a file's content as lowercase hex
pub fn sha1_file_hash(path: &Path) -> Result<ContentHash, CoverageError> {
    let mut hasher = Sha1::new();
    stream_file(path, |chunk| hasher.update(chunk))?;
    Ok(hex::encode(hasher.finalize()))
}

/// BLAKE3 of a file's content as lowercase hex
pub fn blake3_file_hash(path: &Path) -> Result<ContentHash, CoverageError> {
    let mut hasher = blake3::Hasher::new();
    stream_file(path, |chunk| {
        hasher.update(chunk);
    })?;
    Ok(hasher.finalize().to_hex().to_string())
}

/// Compute the digest of in-memory bytes with the given algorithm
pub fn compute_content_hash(algorithm: DigestAlgorithm, content: &[u8]) -> ContentHash {
    match algorithm {
        DigestAlgorithm::Sha1 => hex::encode(Sha1::digest(content)),
        DigestAlgorithm::Blake3 => blake3::hash(content).to_hex().to_string(),
    }
}

/// Feed a file to `sink` in `BUF_SIZE` chunks
fn stream_file(path: &Path, mut sink: impl FnMut(&[u8])) -> Result<(), CoverageError> {
    let mut file = File::open(path).map_err(|e| CoverageError::io(path, e))?;
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CoverageError::io(path, e)),
        };
        sink(&buf[..n]);
    }
    Ok(())
}
