//! [`ConfigDir`] for configuration store scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with a SHIELD config file path inside it.
///
/// The file is not created until [`write`](Self::write) is called, so a
/// fresh `ConfigDir` also covers the first-run case.
///
/// # Example
///
/// ```rust,no_run
/// use shield_test_utils::ConfigDir;
///
/// let dir = ConfigDir::new();
/// dir.write("prod:\n  url: https://prod\n");
/// assert!(dir.read().contains("https://prod"));
/// ```
pub struct ConfigDir {
    temp_dir: TempDir,
    path: PathBuf,
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDir {
    /// Create an empty temporary directory; the config file is `shield.yml`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shield.yml");
        Self { temp_dir, path }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write raw content to the config file.
    pub fn write(&self, content: &str) {
        fs::write(&self.path, content).unwrap();
    }

    /// Read the config file back as text.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap_or_else(|e| {
            panic!("ConfigDir::read: failed to read {}: {e}", self.path.display())
        })
    }

    /// Assert that the config file has been written.
    pub fn assert_exists(&self) {
        assert!(
            self.path.is_file(),
            "expected config file at {}",
            self.path.display()
        );
    }
}
