//! Git repository markers at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs —
//! fakes are faster and have fewer external dependencies.

use std::fs;
use std::path::Path;

/// Creates a minimal `.git` directory structure **without** initialising a
/// real git repository.
///
/// Realism level: **FAKE** — directory structure only, no git object store.
///
/// Use for: tests that only need the `.git` marker to satisfy repository
/// root detection.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Initialises a real git repository using `git2` (no commits, no config).
///
/// Realism level: **REAL** — valid git object store, empty history.
///
/// Use for: tests that should hold against an actual repository layout
/// rather than a bare marker directory.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}
