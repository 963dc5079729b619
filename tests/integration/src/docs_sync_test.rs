//! End-to-end docs synchronization workflow tests.
//!
//! Drives the full pipeline the way CI would: regenerate the command
//! reference from a (fake) built binary, then use `docsync check` as a
//! gate against hand edits and help-text changes.

#![cfg(unix)]

use assert_cmd::Command;
use docsync_core::{DocsTarget, SyncStatus};
use docsync_test_utils::{bin, repo::DocsRepo};
use predicates::prelude::*;

fn docsync(repo: &DocsRepo, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("docsync").expect("docsync binary not built");
    cmd.args(args).current_dir(repo.root());
    cmd
}

#[test]
fn full_workflow_generate_then_gate() {
    let repo = DocsRepo::new_real_git();
    repo.with_help_binary("USAGE: devx <COMMAND>\n\nCommands:\n  help\n  doctor\n");

    // First generation creates the doc.
    docsync(&repo, &["generate"]).assert().success();
    let doc = repo.read_doc();
    assert!(doc.starts_with("# Commands\n\n"));
    assert!(doc.contains("```text\nUSAGE: devx <COMMAND>\n"));

    // The gate passes while nothing changed.
    docsync(&repo, &["check"]).assert().success();

    // A hand edit is caught exactly once, and the doc is corrected.
    repo.write_doc("# Commands\n\nedited by hand\n");
    docsync(&repo, &["check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("review and commit"));
    assert_eq!(repo.read_doc(), doc);
    docsync(&repo, &["check"]).assert().success();
}

#[test]
fn help_text_change_is_drift() {
    let repo = DocsRepo::new();
    repo.with_help_binary("old help\n");
    docsync(&repo, &["generate"]).assert().success();

    // The binary was rebuilt with different help output.
    bin::fake_help_binary(&repo.binary_path(), "new help\n");

    docsync(&repo, &["check"]).assert().failure();
    assert!(repo.read_doc().contains("new help"));
    docsync(&repo, &["check"]).assert().success();
}

#[test]
fn render_is_idempotent_across_pipeline_runs() {
    let repo = DocsRepo::new();
    repo.with_help_binary("stable help\n");
    let target = DocsTarget::new(repo.root());

    let first = target.regenerate().unwrap();
    let report = target.check_sync().unwrap();
    let second = repo.read_doc();

    assert_eq!(report.status, SyncStatus::InSync);
    assert_eq!(first, second);
}

#[test]
fn json_report_is_machine_readable() {
    let repo = DocsRepo::new();
    repo.with_help_binary("help\n");

    let output = docsync(&repo, &["check", "--json"]).output().unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "drifted");
}
