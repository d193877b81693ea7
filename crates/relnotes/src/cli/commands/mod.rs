//! CLI commands

mod html;
mod init;
mod markdown;

pub use html::HtmlCommand;
pub use init::InitCommand;
pub use markdown::MarkdownCommand;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use relnotes_changelog::{FormatterRegistry, ReleaseRenderer};
use relnotes_core::config::{find_config, load_config, Config};

/// Resolve inputs and render the latest release in the given format.
///
/// Precedence for the changelog path and tracker URL: command flag,
/// then configuration file, then built-in default. A config file that
/// exists but fails to parse or validate is a hard error, not a
/// silent fallback. Relative changelog paths resolve against `dir`.
fn render_latest(
    extension: &str,
    file: Option<&PathBuf>,
    tracker_url: Option<&str>,
    dir: &Path,
) -> anyhow::Result<String> {
    let config = match find_config(dir) {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    let path = file
        .cloned()
        .unwrap_or_else(|| config.changelog.file.clone());
    let path = if path.is_relative() {
        dir.join(path)
    } else {
        path
    };
    let base_url = tracker_url
        .map(String::from)
        .unwrap_or_else(|| config.tracker.base_url.clone());

    info!(path = %path.display(), format = extension, "rendering changelog");

    let document = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read changelog at {}", path.display()))?;

    let registry = FormatterRegistry::new();
    let formatter = registry
        .get(extension)
        .ok_or_else(|| anyhow::anyhow!("no formatter registered for '{extension}'"))?;

    let output = ReleaseRenderer::new(base_url)
        .with_shared_formatter(formatter)
        .render(&document)?;

    Ok(output)
}
