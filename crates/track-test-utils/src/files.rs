//! Temporary chain files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory holding one chain file.
pub struct ChainFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl ChainFile {
    /// Write `content` to `<tmp>/<name>`.
    pub fn new(name: &str, content: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(name);
        fs::write(&path, content).unwrap();
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Write a TOML chain file named `chain.toml`.
    pub fn toml(content: &str) -> Self {
        Self::new("chain.toml", content)
    }

    /// Path of the chain file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
