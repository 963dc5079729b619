//! [`DocsRepo`] builder for sync-check test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{bin, git};

/// A temporary repository directory with helper methods for setting up and
/// asserting on docsync scenarios.
///
/// # Example
///
/// ```rust,no_run
/// use docsync_test_utils::repo::DocsRepo;
///
/// let repo = DocsRepo::new();
/// repo.with_help_binary("USAGE: devx <COMMAND>\n");
/// repo.assert_doc_missing();
/// ```
pub struct DocsRepo {
    temp_dir: TempDir,
}

impl Default for DocsRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl DocsRepo {
    /// Create a temporary directory with a fake `.git` marker.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        git::fake_git_dir(temp_dir.path());
        Self { temp_dir }
    }

    /// Create a temporary directory backed by a real git repository.
    pub fn new_real_git() -> Self {
        let temp_dir = TempDir::new().unwrap();
        git::real_git_repo(temp_dir.path());
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Conventional binary path (`target/debug/devx`) under this root.
    pub fn binary_path(&self) -> PathBuf {
        self.root().join("target/debug/devx")
    }

    /// Conventional doc path (`docs/COMMANDS.md`) under this root.
    pub fn doc_path(&self) -> PathBuf {
        self.root().join("docs/COMMANDS.md")
    }

    /// Install a fake binary at the conventional path that emits `help_text`.
    #[cfg(unix)]
    pub fn with_help_binary(&self, help_text: &str) {
        bin::fake_help_binary(&self.binary_path(), help_text);
    }

    /// Write arbitrary content to the conventional doc path.
    pub fn write_doc(&self, content: &str) {
        let path = self.doc_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Read the stored doc content.
    ///
    /// # Panics
    /// Panics if the doc does not exist.
    pub fn read_doc(&self) -> String {
        fs::read_to_string(self.doc_path()).unwrap_or_else(|e| {
            panic!("DocsRepo::read_doc: failed to read docs/COMMANDS.md: {e}")
        })
    }

    /// Assert that no doc has been written yet.
    pub fn assert_doc_missing(&self) {
        assert!(
            !self.doc_path().exists(),
            "Expected docs/COMMANDS.md to not exist"
        );
    }
}
