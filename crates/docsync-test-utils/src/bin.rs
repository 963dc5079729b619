//! Fake help-emitting binaries.
//!
//! Each fixture writes a small shell script that stands in for the built
//! CLI binary. Unix only; the sync pipeline itself is platform-neutral but
//! these fixtures rely on `#!/bin/sh` and the executable bit.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn write_script(path: &Path, script: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("fake binary: failed to create parent dirs: {e}"));
    }
    fs::write(path, script)
        .unwrap_or_else(|e| panic!("fake binary: failed to write script: {e}"));
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("fake binary: failed to set executable bit: {e}"));
}

/// Create a fake binary at `path` that prints `help_text` on stdout for any
/// invocation and exits 0.
///
/// `help_text` must end with a newline (real help output always does; the
/// heredoc cannot represent a missing final newline).
///
/// # Panics
/// Panics if `help_text` does not end with a newline or the filesystem
/// operations fail.
pub fn fake_help_binary(path: &Path, help_text: &str) {
    assert!(
        help_text.ends_with('\n'),
        "fake_help_binary: help_text must end with a newline"
    );
    // Heredoc keeps the help text byte-exact, including blank lines.
    let script = format!("#!/bin/sh\ncat <<'DOCSYNC_EOF'\n{help_text}DOCSYNC_EOF\n");
    write_script(path, &script);
}

/// Create a fake binary at `path` that writes to stderr and exits 1.
pub fn failing_binary(path: &Path) {
    write_script(path, "#!/bin/sh\necho 'boom' >&2\nexit 1\n");
}

/// Create a fake binary at `path` that exits 0 without writing anything.
pub fn silent_binary(path: &Path) {
    write_script(path, "#!/bin/sh\nexit 0\n");
}
