//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution logic

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
