//! Shared helpers for unit tests that need a real directory tree.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_TEMPLATE: &str =
    "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

pub fn create_test_site_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes `content` at `relative` under the temp dir, creating parents.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
