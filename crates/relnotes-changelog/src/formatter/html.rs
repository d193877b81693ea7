//! HTML list formatter

use tracing::{debug, instrument};

use super::ReleaseFormatter;
use crate::escape::escape_html;
use crate::linker::IssueLinker;
use crate::normalize::collapse_whitespace;
use crate::types::{ReleaseBlock, Span};

/// Renders the release items as an HTML `<ul>` list.
///
/// Each item is whitespace-normalized, issue references become anchor
/// tags, and everything else is entity-escaped. The anchors emitted
/// here are the only literal markup in the output.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create a new HTML formatter
    pub fn new() -> Self {
        Self
    }

    fn format_item(&self, item: &str, linker: &IssueLinker) -> String {
        let text = collapse_whitespace(item);
        let mut out = String::with_capacity(text.len());

        for span in linker.link_spans(&text) {
            match span {
                Span::Text(text) => out.push_str(&escape_html(&text)),
                Span::Link { label, url } => {
                    out.push_str(&format!("<a href=\"{}\">{}</a>", url, escape_html(&label)));
                }
            }
        }

        out
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseFormatter for HtmlFormatter {
    #[instrument(skip(self, release, linker), fields(item_count = release.items.len()))]
    fn format(&self, release: &ReleaseBlock, linker: &IssueLinker) -> String {
        let mut output = String::from("<ul>\n");

        for item in &release.items {
            output.push_str("<li>");
            output.push_str(&self.format_item(item, linker));
            output.push_str("</li>\n");
        }

        output.push_str("</ul>");

        debug!(output_len = output.len(), "HTML release list formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}
