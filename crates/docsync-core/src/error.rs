//! Error types for docsync-core

use std::path::PathBuf;

/// Result type for docsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in docsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No ancestor of the start path contains the repository marker
    #[error("Repository root not found: no .git in any ancestor of {start}")]
    RepoRootNotFound { start: PathBuf },

    /// Expected binary does not exist at the conventional path
    #[error("Binary not found at {path}. Build it first: cargo build")]
    BinaryMissing { path: PathBuf },

    /// Binary could not be spawned, or exited with a non-zero status
    #[error("Invocation of {binary} failed: {detail}")]
    BinaryInvocationFailed { binary: PathBuf, detail: String },

    /// Binary exited cleanly but wrote nothing to stdout
    #[error("{binary} produced no help output; refusing to write an empty doc")]
    EmptyHelpOutput { binary: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lock acquisition failed during an atomic write
    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
