//! Sequential per-file rewrite pipeline.
//!
//! One file is fully read, transformed in memory, and replaced on disk
//! before the next is touched. There is no shared state across files, no
//! retry, and no rollback: the first failing file aborts the run and files
//! already rewritten stay rewritten.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::errors::Result;
use crate::core::imports::AliasTable;
use crate::core::rewrite;
use crate::io::fs_atomic;
use crate::io::reports::{FileOutcome, RewriteSummary};
use crate::io::walker;

/// Directory searched when no root is given.
pub const DEFAULT_ROOT: &str = "core";

/// Extension (without dot) a file must carry when none is given.
pub const DEFAULT_EXTENSION: &str = "js";

/// Options for a rewrite run.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Root directory searched recursively.
    pub root: PathBuf,
    /// Extension (without dot) a file must carry to be considered.
    pub extension: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Walk the tree under `options.root` and rewrite every import-bearing
/// file in place, returning the run summary.
pub fn rewrite_tree(options: &RewriteOptions) -> Result<RewriteSummary> {
    let files = walker::walk_matching_files(&options.root, &options.extension)?;

    let mut summary = RewriteSummary::default();
    for path in files {
        summary.record(rewrite_file(&path)?);
    }

    info!(
        "{} file(s) scanned, {} with imports, {} rewritten, {} substitution(s)",
        summary.files_scanned,
        summary.files_with_imports,
        summary.files_rewritten,
        summary.substitutions
    );
    Ok(summary)
}

/// Rewrite a single file.
///
/// Files binding no aliases are skipped before any write occurs; files
/// whose rewritten content equals the original are likewise never written,
/// so a second run over already-qualified output is a no-op.
pub fn rewrite_file(path: &Path) -> Result<FileOutcome> {
    let content = fs_atomic::read_to_string(path)?;

    let table = AliasTable::collect(&content);
    if table.is_empty() {
        debug!("no import declarations: {}", path.display());
        return Ok(FileOutcome::skipped(path));
    }

    match rewrite::rewrite_content(&content, &table) {
        Some(rewritten) => {
            fs_atomic::replace_contents(path, &rewritten.content)?;
            debug!(
                "rewrote {} ({} aliases, {} substitutions)",
                path.display(),
                table.len(),
                rewritten.substitutions
            );
            Ok(FileOutcome::rewritten(path, table.len(), rewritten.substitutions))
        }
        None => {
            debug!("imports but nothing to rewrite: {}", path.display());
            Ok(FileOutcome::unchanged(path, table.len()))
        }
    }
}
