//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// docsync - Keep docs/COMMANDS.md synchronized with the CLI's help output
#[derive(Parser, Debug)]
#[command(name = "docsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate docs/COMMANDS.md from the built binary's help output
    Generate,

    /// Regenerate and fail if the stored doc was stale
    ///
    /// Intended as a CI gate: a non-zero exit means the regenerated file
    /// must be reviewed and committed.
    Check {
        /// Output the report as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },
}
