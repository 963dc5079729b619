//! Fixed path and invocation conventions
//!
//! These are conventions of the system, not runtime configuration. Tests
//! that need other paths construct a [`crate::DocsTarget`] explicitly.

/// Directory that marks a repository root when present as a direct child.
pub const REPO_MARKER: &str = ".git";

/// Documentation artifact, relative to the repository root.
pub const DOC_RELATIVE_PATH: &str = "docs/COMMANDS.md";

/// Built CLI binary, relative to the repository root.
pub const BINARY_RELATIVE_PATH: &str = "target/debug/devx";

/// Subcommand the binary exposes for stable help output.
pub const HELP_SUBCOMMAND: &str = "emit-help";
