//! Common test utilities

use std::path::{Path, PathBuf};
use taggart::{AssociationStore, Orientation};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create an empty file named `name` in `dir` and return its path as a string
#[allow(dead_code)] // Test utility for integration tests
pub fn touch(dir: &Path, name: &str) -> String {
    let path: PathBuf = dir.join(name);
    std::fs::write(&path, "").expect("Failed to create file");
    path.to_string_lossy().into_owned()
}

/// A store holding the four-tag, three-file sample used across the tests:
///
/// ```text
/// Tag A <==> file_1
/// Tag B <==> file_2, file_3
/// Tag C <==> file_2, file_3
/// Tag D <==> file_3
/// ```
#[allow(dead_code)] // Test utility for integration tests
pub fn sample_store(orientation: Orientation) -> AssociationStore {
    let mut store = AssociationStore::new(orientation);
    let failures = store
        .add_associations(vec!["file_2", "file_3"], vec!["Tag B", "Tag C"], false);
    assert!(failures.is_empty());
    store.add_association("file_1", "Tag A", false).expect("Should tag file_1");
    store.add_association("file_3", "Tag D", false).expect("Should tag file_3");
    store
}
