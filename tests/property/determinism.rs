//! Property-based tests for coverage determinism and content semantics

use covered::coverage::covered;
use covered::tree::hasher::{compute_content_hash, sha1_file_hash, DigestAlgorithm};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Strategy: a handful of files with short names and arbitrary bytes
fn files_strategy() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    prop::collection::vec(
        ("[a-z]{1,8}", prop::collection::vec(any::<u8>(), 0..64)),
        0..8,
    )
}

fn materialize(files: &[(String, Vec<u8>)], nested: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (i, (name, content)) in files.iter().enumerate() {
        // Index prefix keeps generated names unique
        let rel = if nested && i % 2 == 1 {
            format!("sub{}/{}_{}", i, i, name)
        } else {
            format!("{}_{}", i, name)
        };
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

/// Same content always produces the same digest
#[test]
fn test_content_hash_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<Vec<u8>>(), any::<Vec<u8>>()), |(content1, content2)| {
            let hash1 = compute_content_hash(DigestAlgorithm::Sha1, &content1);
            let hash2 = compute_content_hash(DigestAlgorithm::Sha1, &content2);

            if content1 == content2 {
                prop_assert_eq!(hash1, hash2);
            } else {
                prop_assert_ne!(hash1, hash2);
            }
            Ok(())
        })
        .unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// A tree is covered by a differently laid out tree holding the same content
    #[test]
    fn test_same_content_is_covered(files in files_strategy()) {
        let a = materialize(&files, false);
        let b = materialize(&files, true);

        let missing = covered(a.path(), b.path(), &sha1_file_hash).unwrap();
        prop_assert!(missing.is_empty());
    }

    /// Against an empty tree every source file is reported, with its own hash
    #[test]
    fn test_empty_coverage_reports_each_file(files in files_strategy()) {
        let a = materialize(&files, true);
        let b = TempDir::new().unwrap();

        let missing = covered(a.path(), b.path(), &sha1_file_hash).unwrap();
        prop_assert_eq!(missing.len(), files.len());
        for record in &missing {
            let content = fs::read(&record.path).unwrap();
            prop_assert_eq!(
                &record.hash,
                &compute_content_hash(DigestAlgorithm::Sha1, &content)
            );
        }
    }

    /// Running twice over an unchanged filesystem gives the same report
    #[test]
    fn test_repeated_runs_identical(
        source in files_strategy(),
        coverage in files_strategy(),
    ) {
        let a = materialize(&source, true);
        let b = materialize(&coverage, false);

        let first = covered(a.path(), b.path(), &sha1_file_hash).unwrap();
        let second = covered(a.path(), b.path(), &sha1_file_hash).unwrap();
        prop_assert_eq!(first, second);
    }
}
