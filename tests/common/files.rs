//! TestFiles helper for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory holding a base file and candidates.
///
/// Everything is removed when the TestFiles is dropped.
pub struct TestFiles {
    dir: TempDir,
}

impl TestFiles {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `lines` (newline terminated) to `name` and return its path.
    pub fn write(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(&path, text).expect("Failed to write test file");
        path
    }

    /// Path of a file that was never written.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
