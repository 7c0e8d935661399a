//! Walker behaviour around symlinks and cycles

use super::test_utils::tree;
use covered::coverage::covered;
use covered::tree::hasher::sha1_file_hash;
use covered::tree::walker::Walker;

#[cfg(unix)]
#[test]
fn test_symlink_to_ancestor_terminates() {
    let root = tree(&[("a/b/file.txt", "data"), ("top.txt", "top")]);
    std::os::unix::fs::symlink(root.path(), root.path().join("a/b/up")).unwrap();
    std::os::unix::fs::symlink(root.path().join("a"), root.path().join("a/b/parent")).unwrap();

    let files = Walker::new(root.path()).collect_files().unwrap();

    assert_eq!(files.len(), 2);
}

#[cfg(unix)]
#[test]
fn test_self_referencing_directory_link() {
    let root = tree(&[("dir/x", "x")]);
    std::os::unix::fs::symlink(root.path().join("dir"), root.path().join("dir/self")).unwrap();

    let files = Walker::new(root.path()).collect_files().unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("x"));
}

#[cfg(unix)]
#[test]
fn test_file_reached_twice_is_enumerated_once() {
    let root = tree(&[("real/f.txt", "content")]);
    std::os::unix::fs::symlink(root.path().join("real"), root.path().join("alias")).unwrap();

    let files = Walker::new(root.path()).collect_files().unwrap();

    assert_eq!(files.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_cyclic_source_still_compares() {
    let a = tree(&[("d/f", "payload")]);
    std::os::unix::fs::symlink(a.path(), a.path().join("d/loop")).unwrap();
    let b = tree(&[("g", "payload")]);

    assert!(covered(a.path(), b.path(), &sha1_file_hash)
        .unwrap()
        .is_empty());
}
