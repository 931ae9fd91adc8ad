//! Test utilities for building directory trees to list.
//!
//! This module is only compiled for tests and benchmarks.

use std::ffi::OsString;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The directory as a listing operand, with its trailing `/`.
    pub fn operand(&self) -> OsString {
        self.operand_for("")
    }

    /// A path below the directory as an operand. Pass a trailing `/` to make
    /// it a directory operand.
    pub fn operand_for(&self, rel: &str) -> OsString {
        let mut operand = self.dir.path().as_os_str().to_os_string();
        operand.push("/");
        operand.push(rel);
        operand
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Set a file's access time to `secs` seconds after the epoch.
    pub fn set_accessed(&self, path: &str, secs: u64) {
        let full_path = self.dir.path().join(path);
        let file = File::options()
            .write(true)
            .open(&full_path)
            .expect("Failed to open file");
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
        file.set_times(FileTimes::new().set_accessed(time))
            .expect("Failed to set access time");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
