//! Markdown rendering command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::Cli;

/// Render the latest release as Markdown
#[derive(Debug, Args)]
pub struct MarkdownCommand {
    /// Changelog file (defaults to the configured path)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Issue tracker base URL (defaults to the configured URL)
    #[arg(long, value_name = "URL")]
    pub tracker_url: Option<String>,
}

impl MarkdownCommand {
    /// Execute the markdown command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.file, "executing markdown command");

        let cwd = std::env::current_dir()?;
        let output =
            super::render_latest("md", self.file.as_ref(), self.tracker_url.as_deref(), &cwd)?;
        println!("{}", output);

        Ok(())
    }
}
