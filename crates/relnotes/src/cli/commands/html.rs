//! HTML rendering command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::Cli;

/// Render the latest release as an HTML list
#[derive(Debug, Args)]
pub struct HtmlCommand {
    /// Changelog file (defaults to the configured path)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Issue tracker base URL (defaults to the configured URL)
    #[arg(long, value_name = "URL")]
    pub tracker_url: Option<String>,
}

impl HtmlCommand {
    /// Execute the html command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.file, "executing html command");

        let cwd = std::env::current_dir()?;
        let output =
            super::render_latest("html", self.file.as_ref(), self.tracker_url.as_deref(), &cwd)?;
        println!("{}", output);

        Ok(())
    }
}
