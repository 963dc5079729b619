//! Help capture and doc rendering
//!
//! The external binary is the single source of truth: it is invoked with a
//! fixed subcommand and its stdout is embedded verbatim. Rendering is a pure
//! function of the captured text.

use std::path::Path;
use std::process::Command;

use crate::constants::HELP_SUBCOMMAND;
use crate::{Error, Result};

/// Capture the help text emitted by `binary emit-help`.
///
/// The binary must already be built; this never builds it. A non-zero exit
/// status makes the output untrusted, and an empty stdout indicates a broken
/// invocation rather than a legitimately empty doc.
pub fn capture_help(binary: &Path) -> Result<String> {
    if !binary.exists() {
        return Err(Error::BinaryMissing {
            path: binary.to_path_buf(),
        });
    }

    tracing::debug!(binary = %binary.display(), subcommand = HELP_SUBCOMMAND, "Capturing help text");

    let output = Command::new(binary)
        .arg(HELP_SUBCOMMAND)
        .output()
        .map_err(|e| Error::BinaryInvocationFailed {
            binary: binary.to_path_buf(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::BinaryInvocationFailed {
            binary: binary.to_path_buf(),
            detail: format!("exit status {}: {}", output.status, stderr.trim()),
        });
    }

    let help_text = String::from_utf8_lossy(&output.stdout).into_owned();
    if help_text.is_empty() {
        return Err(Error::EmptyHelpOutput {
            binary: binary.to_path_buf(),
        });
    }

    Ok(help_text)
}

/// Render the documentation artifact for the given help text.
///
/// Fixed template: title, one explanatory sentence naming the binary, then
/// the help text verbatim inside a fenced `text` block. No trimming, no
/// escaping; same input always yields the same output.
pub fn render_doc(binary_name: &str, help_text: &str) -> String {
    format!(
        "# Commands\n\n\
         This file is auto-generated from `{binary_name} --help`.\n\n\
         ```text\n\
         {help_text}\
         ```\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn template_embeds_help_verbatim() {
        let doc = render_doc("devx", "USAGE: foo [OPTIONS]\n");
        assert_eq!(
            doc,
            "# Commands\n\n\
             This file is auto-generated from `devx --help`.\n\n\
             ```text\nUSAGE: foo [OPTIONS]\n```\n"
        );
    }

    #[test]
    fn template_is_deterministic() {
        let a = render_doc("devx", "help\n");
        let b = render_doc("devx", "help\n");
        assert_eq!(a, b);
    }

    #[test]
    fn template_does_not_trim() {
        let doc = render_doc("devx", "  padded  \n\n");
        assert!(doc.contains("```text\n  padded  \n\n```\n"));
    }

    #[test]
    fn missing_binary_is_reported() {
        let err = capture_help(Path::new("/nonexistent/devx")).unwrap_err();
        assert!(matches!(err, Error::BinaryMissing { .. }));
        assert!(err.to_string().contains("Build it first"));
    }
}
