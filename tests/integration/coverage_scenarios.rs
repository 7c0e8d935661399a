//! End-to-end coverage scenarios over real directory trees

use super::test_utils::{copy_tree, tree, write_file};
use covered::coverage::{check_coverage, covered};
use covered::error::CoverageError;
use covered::tree::hasher::{compute_content_hash, sha1_file_hash, DigestAlgorithm, FileHasher};
use tempfile::TempDir;

#[test]
fn test_missing_file_reported_with_its_hash() {
    let a = tree(&[("a.txt", "hello"), ("sub/b.txt", "world")]);
    let b = tree(&[("c.txt", "hello")]);

    let missing = covered(a.path(), b.path(), &sha1_file_hash).unwrap();

    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].path, a.path().join("sub").join("b.txt"));
    assert_eq!(
        missing[0].hash,
        compute_content_hash(DigestAlgorithm::Sha1, b"world")
    );
}

#[test]
fn test_byte_copy_is_fully_covered() {
    let a = tree(&[
        ("top.txt", "top"),
        ("d1/one.txt", "one"),
        ("d1/d2/two.bin", "two"),
        ("empty.txt", ""),
    ]);
    let b = TempDir::new().unwrap();
    copy_tree(a.path(), &b.path().join("nested_copy"));

    assert!(covered(a.path(), b.path(), &sha1_file_hash)
        .unwrap()
        .is_empty());
}

#[test]
fn test_empty_coverage_tree_reports_all_files_with_hashes() {
    let a = tree(&[("x", "1"), ("y/z", "2"), ("y/w", "3")]);
    let b = TempDir::new().unwrap();

    let missing = covered(a.path(), b.path(), &sha1_file_hash).unwrap();

    assert_eq!(missing.len(), 3);
    for record in &missing {
        assert!(record.path.starts_with(a.path()));
        assert_eq!(record.hash, sha1_file_hash(&record.path).unwrap());
    }
}

#[test]
fn test_content_not_name_decides_coverage() {
    let a = tree(&[("x.txt", "hi")]);
    let b = tree(&[("y.txt", "hi")]);

    assert!(covered(a.path(), b.path(), &sha1_file_hash)
        .unwrap()
        .is_empty());
}

#[test]
fn test_same_name_different_content_is_missing() {
    let a = tree(&[("same.txt", "left")]);
    let b = tree(&[("same.txt", "right")]);

    assert_eq!(covered(a.path(), b.path(), &sha1_file_hash).unwrap().len(), 1);
}

#[test]
fn test_repeated_runs_are_identical() {
    let a = tree(&[("a", "1"), ("b/c", "2"), ("b/d", "3"), ("e", "4")]);
    let b = tree(&[("x", "3")]);
    let hasher = FileHasher::default();

    let first = covered(a.path(), b.path(), &hasher).unwrap();
    let second = covered(a.path(), b.path(), &hasher).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_blake3_gives_same_verdict_as_sha1() {
    let a = tree(&[("a", "shared"), ("b", "only in a")]);
    let b = tree(&[("c", "shared")]);

    let sha1 = covered(a.path(), b.path(), &FileHasher::new(DigestAlgorithm::Sha1)).unwrap();
    let blake3 = covered(a.path(), b.path(), &FileHasher::new(DigestAlgorithm::Blake3)).unwrap();

    assert_eq!(sha1.len(), 1);
    assert_eq!(blake3.len(), 1);
    assert_eq!(sha1[0].path, blake3[0].path);
    assert_eq!(blake3[0].hash.len(), 64);
}

#[test]
fn test_source_root_that_is_a_file_fails() {
    let a = TempDir::new().unwrap();
    let file = write_file(a.path(), "plain.txt", b"x");
    let b = TempDir::new().unwrap();

    let result = check_coverage(&file, b.path(), &sha1_file_hash);
    assert!(matches!(result, Err(CoverageError::NotADirectory(_))));
}

#[test]
fn test_hash_failure_aborts_run() {
    let a = tree(&[("a", "1"), ("b", "2")]);
    let b = TempDir::new().unwrap();
    let failing = |p: &std::path::Path| -> Result<String, CoverageError> {
        Err(CoverageError::io(
            p,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ))
    };

    let result = covered(a.path(), b.path(), &failing);
    assert!(matches!(result, Err(CoverageError::Io { .. })));
}
