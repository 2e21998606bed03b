//! # Fqualify: Doc-Alias Qualification Codemod
//!
//! A one-shot source-rewrite tool for `goog.module`-style JavaScript trees.
//! It learns the short local aliases bound by
//! `const {Name} = goog.require('dotted.path');` declarations, then rewrites
//! references to those aliases inside `@…{{ … }}` doc annotations into their
//! fully-qualified dotted form, in place.
//!
//! ## Pipeline
//!
//! ```text
//! walk tree ──▶ parse import lines ──▶ build AliasTable ──▶ rewrite
//!                 (per file)          (ascending length)   annotations
//! ```
//!
//! Each file is processed independently and sequentially: its alias table is
//! built fresh, applied once, and discarded. Files without any recognized
//! import declaration are never written.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fqualify::core::pipeline::{rewrite_tree, RewriteOptions};
//!
//! fn main() -> fqualify::Result<()> {
//!     let summary = rewrite_tree(&RewriteOptions::default())?;
//!     println!("{}", summary.render_text());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core rewrite engine
pub mod core {
    //! Core rewrite algorithms and data structures.

    pub mod errors;
    pub mod imports;
    pub mod pipeline;
    pub mod rewrite;
}

// Filesystem access and run summaries
pub mod io {
    //! Traversal, atomic file replacement, and run-summary reporting.

    pub mod fs_atomic;
    pub mod reports;
    pub mod walker;
}

// Re-export primary types for convenience
pub use crate::core::errors::{QualifyError, Result};
pub use crate::core::imports::AliasTable;
pub use crate::core::pipeline::{rewrite_tree, RewriteOptions};
pub use crate::io::reports::RewriteSummary;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
