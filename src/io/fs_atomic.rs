//! Whole-file read and atomic in-place replacement.
//!
//! The original seek/truncate rewrite on a single handle could leave a file
//! half-truncated on a mid-write failure. Here the new content goes to a
//! temporary file in the target's directory which is then persisted over
//! the target, so every exit path leaves either the old or the new content.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::errors::{QualifyError, Result};

/// Read a file to a UTF-8 string, with path context on failure.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| QualifyError::io(format!("failed to read {}", path.display()), e))
}

/// Replace the contents of `path` with `content` atomically.
///
/// The temporary file lives next to the target so the final rename never
/// crosses a filesystem boundary.
pub fn replace_contents(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        QualifyError::io(format!("failed to create temp file in {}", dir.display()), e)
    })?;
    tmp.write_all(content.as_bytes()).map_err(|e| {
        QualifyError::io(format!("failed to stage new contents of {}", path.display()), e)
    })?;
    tmp.persist(path)
        .map_err(|e| QualifyError::io(format!("failed to replace {}", path.display()), e.error))?;
    Ok(())
}
