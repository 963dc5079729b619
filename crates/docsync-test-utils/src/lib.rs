//! Shared test utilities for the docsync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git repository markers at two realism levels
//! - [`bin`] — fake help-emitting binaries
//! - [`repo`] — [`repo::DocsRepo`] builder for full sync-check scenarios

pub mod bin;
pub mod git;
pub mod repo;
