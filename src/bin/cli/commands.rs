//! Command Execution Logic

use anyhow::Context;
use console::style;

use fqualify::core::pipeline::{rewrite_tree, RewriteOptions};

use crate::cli::args::{Cli, SummaryFormat};

/// Run the rewrite over the configured tree and print the summary.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.root.is_dir() {
        anyhow::bail!("root directory does not exist: {}", cli.root.display());
    }

    if !cli.quiet {
        eprintln!(
            "{} {} ({}.{})",
            style("Rewriting under").bold(),
            style(cli.root.display().to_string()).cyan(),
            style("*").dim(),
            cli.extension
        );
    }

    let options = RewriteOptions {
        root: cli.root.clone(),
        extension: cli.extension.clone(),
    };
    let summary = rewrite_tree(&options)
        .with_context(|| format!("rewrite failed under {}", cli.root.display()))?;

    if !cli.quiet {
        match cli.format {
            SummaryFormat::Text => print!("{}", summary.render_text()),
            SummaryFormat::Json => println!("{}", summary.render_json()?),
        }
    }

    Ok(())
}
