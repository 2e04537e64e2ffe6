//! Output helpers for CLI commands.
//!
//! Command results go to stdout or to a file; diagnostics go through
//! `tracing` on stderr so that piped JSON stays clean.

use std::io::Write;
use std::path::Path;

use dockspec_common::error::{DockspecError, Result};

/// Writes `text` followed by a newline to `path`, or to stdout when `None`.
///
/// # Errors
///
/// Returns an error if the file or stdout cannot be written.
pub fn emit(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "writing output file");
            std::fs::write(path, format!("{text}\n")).map_err(|e| DockspecError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").map_err(|e| DockspecError::Io {
                path: "<stdout>".into(),
                source: e,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_writes_file_with_trailing_newline() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("container.json");
        emit(r#"{"type":"DOCKER"}"#, Some(&path)).expect("emit");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "{\"type\":\"DOCKER\"}\n");
    }

    #[test]
    fn emit_into_missing_directory_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("out.json");
        let err = emit("{}", Some(&path)).expect_err("no parent dir");
        assert!(matches!(err, DockspecError::Io { path: p, .. } if p == path));
    }
}
