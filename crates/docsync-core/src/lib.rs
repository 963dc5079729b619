//! Core library for docsync
//!
//! Keeps a checked-in documentation file (`docs/COMMANDS.md`) synchronized
//! with the `--help` output of a separately built command-line binary.
//! Provides repository root discovery, help capture, deterministic doc
//! rendering, and drift checking.

pub mod constants;
pub mod error;
pub mod io;
pub mod render;
pub mod repo;
pub mod sync;

pub use error::{Error, Result};
pub use render::{capture_help, render_doc};
pub use repo::find_repo_root;
pub use sync::{DocsTarget, SyncReport, SyncStatus};
