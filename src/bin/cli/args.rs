//! CLI Argument Structures

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use fqualify::core::pipeline::{DEFAULT_EXTENSION, DEFAULT_ROOT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rewrite doc-comment aliases to fully-qualified module paths
#[derive(Parser)]
#[command(name = "fqualify")]
#[command(version = VERSION)]
#[command(about = "Rewrites doc-comment aliases to their fully-qualified module paths")]
#[command(long_about = "
Walks a tree of goog.module-style JavaScript files, learns the short local
aliases bound by `const {Name} = goog.require('dotted.path');` declarations,
and rewrites those aliases inside @…{{ … }} doc annotations to the full
dotted path, in place. Files without any recognized import declaration are
never written.

Common Usage:

  # Rewrite the default tree (./core, *.js)
  fqualify

  # Rewrite a different tree
  fqualify ./src --extension js

  # Machine-readable run summary
  fqualify --format json
")]
pub struct Cli {
    /// Root directory searched recursively for source files
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// File extension (without dot) a file must carry to be considered
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Output format for the run summary
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SummaryFormat,

    /// Suppress the run summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON summary
    Json,
}
