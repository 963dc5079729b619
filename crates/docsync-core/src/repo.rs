//! Repository root discovery
//!
//! Upward ancestor walk looking for the `.git` marker directory.

use std::path::{Path, PathBuf};

use crate::constants::REPO_MARKER;
use crate::{Error, Result};

/// Find the enclosing repository root for `start`.
///
/// Examines `start` itself and then each ancestor, nearest to farthest,
/// returning the first directory whose direct children include `.git`.
/// Purely read-only probing; deterministic for a stable tree.
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(REPO_MARKER).exists() {
            tracing::debug!(root = %dir.display(), "Repository root resolved");
            return Ok(dir.to_path_buf());
        }
    }

    Err(Error::RepoRootNotFound {
        start: start.to_path_buf(),
    })
}
