//! Shared fixtures for unit tests in the CLI crate.
//! Binary-level helpers live in `tests/integration_test_helpers.rs`.

#![cfg(test)]

use std::fs;
use std::path::{Path, PathBuf};

/// Runs a test inside `path` and switches back to the previous working
/// directory on drop, panics included. Tests using it must be `#[serial]`.
pub struct DirGuard {
    previous: PathBuf,
}

impl DirGuard {
    pub fn new<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        fs::create_dir_all(path.as_ref())?;
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        Ok(Self { previous })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Write `content` to `dir/name` and return the path as a command argument.
pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}
