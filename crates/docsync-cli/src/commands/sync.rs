//! Generate and check command implementations
//!
//! Both commands resolve the repository root from the starting path and
//! apply the fixed path conventions from docsync-core.

use std::path::Path;

use colored::Colorize;

use docsync_core::{DocsTarget, SyncStatus, find_repo_root};

use crate::error::{CliError, Result};

fn target_from(path: &Path) -> Result<DocsTarget> {
    let root = find_repo_root(path)?;
    Ok(DocsTarget::new(root))
}

/// Run the generate command
///
/// Regenerates the doc artifact unconditionally.
pub fn run_generate(path: &Path) -> Result<()> {
    let target = target_from(path)?;
    target.regenerate()?;

    println!(
        "{} Wrote {}",
        "OK".green().bold(),
        target.doc_path().display().to_string().cyan()
    );

    Ok(())
}

/// Run the check command
///
/// Regenerates the doc and fails if the stored copy was stale. The stale
/// doc has already been corrected on disk when the failure is reported;
/// the operator only needs to review and commit it.
pub fn run_check(path: &Path, json: bool) -> Result<()> {
    let target = target_from(path)?;
    let report = target.check_sync()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    match report.status {
        SyncStatus::InSync => {
            if !json {
                println!(
                    "{} {} is up to date.",
                    "OK".green().bold(),
                    target.doc_path().display().to_string().cyan()
                );
            }
            Ok(())
        }
        SyncStatus::Drifted => Err(CliError::user(format!(
            "{} was stale and has been regenerated; review and commit it.",
            target.doc_path().display()
        ))),
    }
}
