//! Release rendering
//!
//! Ties the pipeline together: extract the latest release block, then
//! hand it to the selected formatter. The whole pass is a pure
//! function of the input document and the tracker base URL; either
//! the full latest-release text renders, or nothing is emitted.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use relnotes_core::error::ExtractError;

use crate::extract;
use crate::formatter::{HtmlFormatter, ReleaseFormatter};
use crate::linker::IssueLinker;

/// Renders the latest release of a changelog document
pub struct ReleaseRenderer {
    formatter: Arc<dyn ReleaseFormatter>,
    linker: IssueLinker,
}

impl ReleaseRenderer {
    /// Create a renderer with the default (HTML) formatter
    pub fn new(tracker_base_url: impl Into<String>) -> Self {
        Self {
            formatter: Arc::new(HtmlFormatter::new()),
            linker: IssueLinker::new(tracker_base_url),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ReleaseFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Use a formatter shared with a registry
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn ReleaseFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Render the latest release of the document.
    ///
    /// Fails before producing any output when the document has no
    /// well-formed latest release block.
    #[instrument(skip(self, document), fields(doc_len = document.len()))]
    pub fn render(&self, document: &str) -> Result<String, ExtractError> {
        let release = extract::latest_release(document)?;
        info!(
            version = release.version.as_deref(),
            item_count = release.items.len(),
            format = self.formatter.extension(),
            "rendering latest release"
        );

        let output = self.formatter.format(&release, &self.linker);
        debug!(output_len = output.len(), "release rendered");
        Ok(output)
    }
}
