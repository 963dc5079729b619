//! Drift checking between the stored doc and a fresh render
//!
//! The check is an observable overwrite, not a dry run: the artifact is
//! always regenerated, and drift is reported by comparing the freshly
//! written bytes against what was stored beforehand.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{BINARY_RELATIVE_PATH, DOC_RELATIVE_PATH};
use crate::{Result, io, render};

/// Verdict of a sync check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Stored doc already matched the fresh render
    InSync,
    /// Stored doc was stale; it has been regenerated and must be committed
    Drifted,
}

/// Report from a sync check
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Overall verdict
    pub status: SyncStatus,
    /// Path of the documentation artifact that was checked
    pub doc_path: PathBuf,
}

impl SyncReport {
    /// Whether the stored doc changed as a result of the check.
    pub fn drifted(&self) -> bool {
        self.status == SyncStatus::Drifted
    }
}

/// Resolved paths for one synchronization run.
///
/// Built from a repository root plus the fixed conventions in
/// [`crate::constants`]; tests construct one with explicit paths instead.
#[derive(Debug, Clone)]
pub struct DocsTarget {
    root: PathBuf,
    doc_path: PathBuf,
    binary_path: PathBuf,
}

impl DocsTarget {
    /// Resolve the conventional doc and binary paths under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let doc_path = root.join(DOC_RELATIVE_PATH);
        let binary_path = root.join(BINARY_RELATIVE_PATH);
        Self {
            root,
            doc_path,
            binary_path,
        }
    }

    /// Build a target with explicit paths, bypassing the conventions.
    pub fn with_paths(
        root: impl Into<PathBuf>,
        doc_path: impl Into<PathBuf>,
        binary_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.into(),
            doc_path: doc_path.into(),
            binary_path: binary_path.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn doc_path(&self) -> &Path {
        &self.doc_path
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Capture help text, render the doc, and overwrite the artifact.
    ///
    /// Returns the rendered content. The write is atomic and creates any
    /// missing parent directories.
    pub fn regenerate(&self) -> Result<String> {
        let help_text = render::capture_help(&self.binary_path)?;
        let binary_name = self
            .binary_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.binary_path.display().to_string());

        let content = render::render_doc(&binary_name, &help_text);
        io::write_atomic(&self.doc_path, content.as_bytes())?;
        tracing::debug!(doc = %self.doc_path.display(), bytes = content.len(), "Doc regenerated");

        Ok(content)
    }

    /// Regenerate the doc and report whether it changed.
    ///
    /// Reads the stored artifact (empty string if absent), performs the
    /// regeneration write, reads the artifact back, and byte-compares the
    /// two observations. The write happens even when nothing changed.
    pub fn check_sync(&self) -> Result<SyncReport> {
        let before = io::read_text_or_empty(&self.doc_path)?;

        self.regenerate()?;
        let after = io::read_text(&self.doc_path)?;

        let status = if before == after {
            SyncStatus::InSync
        } else {
            SyncStatus::Drifted
        };

        Ok(SyncReport {
            status,
            doc_path: self.doc_path.clone(),
        })
    }
}
