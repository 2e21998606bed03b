//! Recursive, extension-filtered file traversal.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::errors::{QualifyError, Result};

/// Recursively collect the files under `root` whose extension equals
/// `extension` (given without the leading dot).
///
/// Traversal is sorted by file name at each level so the run order, and
/// with it the summary, is deterministic. Any traversal error aborts the
/// walk.
pub fn walk_matching_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry
            .map_err(|e| QualifyError::walk(format!("failed to traverse {}", root.display()), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == extension);
        if matches {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
