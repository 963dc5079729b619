#![cfg(unix)]

use docsync_core::{Error, capture_help};
use docsync_test_utils::bin;
use tempfile::TempDir;

#[test]
fn captures_stdout_verbatim() {
    let temp = TempDir::new().unwrap();
    let binary = temp.path().join("devx");
    bin::fake_help_binary(&binary, "USAGE: devx <COMMAND>\n\nCommands:\n  help\n");

    let help = capture_help(&binary).unwrap();
    assert_eq!(help, "USAGE: devx <COMMAND>\n\nCommands:\n  help\n");
}

#[test]
fn capture_is_reproducible() {
    let temp = TempDir::new().unwrap();
    let binary = temp.path().join("devx");
    bin::fake_help_binary(&binary, "stable help\n");

    let first = capture_help(&binary).unwrap();
    let second = capture_help(&binary).unwrap();
    assert_eq!(first, second);
}

#[test]
fn nonzero_exit_is_invocation_failure() {
    let temp = TempDir::new().unwrap();
    let binary = temp.path().join("devx");
    bin::failing_binary(&binary);

    let err = capture_help(&binary).unwrap_err();
    assert!(matches!(err, Error::BinaryInvocationFailed { .. }));
    // stderr is surfaced in the message
    assert!(err.to_string().contains("boom"));
}

#[test]
fn empty_output_is_fatal() {
    let temp = TempDir::new().unwrap();
    let binary = temp.path().join("devx");
    bin::silent_binary(&binary);

    let err = capture_help(&binary).unwrap_err();
    assert!(matches!(err, Error::EmptyHelpOutput { .. }));
}
