//! Integration tests for Layer 2: Analyzer
//!
//! Tests package scans over real directory trees and the build-script hook.

mod packages;

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a package directory holding `files` (relative path, contents).
pub fn package(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (path, contents) in files {
        write(dir.path(), path, contents);
    }
    dir
}

fn write(root: &Path, path: &str, contents: &str) {
    let path = root.join(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
