//! Run-summary accounting and rendering.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::errors::{QualifyError, Result};

/// Outcome recorded for one scanned file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Path of the scanned file.
    pub path: PathBuf,
    /// Number of distinct aliases bound by the file's import declarations.
    pub aliases: usize,
    /// Number of alias occurrences replaced.
    pub substitutions: usize,
    /// Whether the file was written back.
    pub rewritten: bool,
}

impl FileOutcome {
    /// A file with no import declarations; never opened for write.
    pub fn skipped(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            aliases: 0,
            substitutions: 0,
            rewritten: false,
        }
    }

    /// A file with imports whose content did not change; not written.
    pub fn unchanged(path: &Path, aliases: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            aliases,
            substitutions: 0,
            rewritten: false,
        }
    }

    /// A file rewritten in place.
    pub fn rewritten(path: &Path, aliases: usize, substitutions: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            aliases,
            substitutions,
            rewritten: true,
        }
    }
}

/// Totals and per-file outcomes for one rewrite run.
#[derive(Debug, Default, Serialize)]
pub struct RewriteSummary {
    /// Files matched by the extension filter.
    pub files_scanned: usize,
    /// Files binding at least one alias.
    pub files_with_imports: usize,
    /// Files actually written back.
    pub files_rewritten: usize,
    /// Total alias occurrences replaced.
    pub substitutions: usize,
    /// Per-file outcomes in traversal order.
    pub files: Vec<FileOutcome>,
}

impl RewriteSummary {
    /// Fold one file's outcome into the totals.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.files_scanned += 1;
        if outcome.aliases > 0 {
            self.files_with_imports += 1;
        }
        if outcome.rewritten {
            self.files_rewritten += 1;
        }
        self.substitutions += outcome.substitutions;
        self.files.push(outcome);
    }

    /// Render the summary as human-readable text.
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        let title = "Rewritten files";
        output.push_str(title);
        output.push('\n');
        output.push_str(&"-".repeat(title.len()));
        output.push('\n');

        let rewritten: Vec<&FileOutcome> = self.files.iter().filter(|f| f.rewritten).collect();
        if rewritten.is_empty() {
            output.push_str("  None\n");
        }
        for outcome in rewritten {
            output.push_str(&format!(
                "  - {} ({} alias(es), {} substitution(s))\n",
                outcome.path.display(),
                outcome.aliases,
                outcome.substitutions
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "Summary: {} file(s) scanned, {} with imports, {} rewritten, {} substitution(s).\n",
            self.files_scanned, self.files_with_imports, self.files_rewritten, self.substitutions
        ));

        output
    }

    /// Render the summary as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| QualifyError::serialization("failed to serialize run summary", e))
    }
}
