//! Markdown formatter

use tracing::{debug, instrument};

use super::ReleaseFormatter;
use crate::linker::IssueLinker;
use crate::types::{ReleaseBlock, Span};

/// Renders the whole release body as Markdown.
///
/// The raw extracted text is preserved verbatim, line breaks and
/// bullet markers included; only issue references are rewritten into
/// `[label](url)` link syntax. No normalization, no escaping.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new Markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseFormatter for MarkdownFormatter {
    #[instrument(skip(self, release, linker), fields(body_len = release.body.len()))]
    fn format(&self, release: &ReleaseBlock, linker: &IssueLinker) -> String {
        let mut output = String::with_capacity(release.body.len());

        for span in linker.link_spans(&release.body) {
            match span {
                Span::Text(text) => output.push_str(&text),
                Span::Link { label, url } => {
                    output.push_str(&format!("[{}]({})", label, url));
                }
            }
        }

        debug!(output_len = output.len(), "Markdown release body formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linker() -> IssueLinker {
        IssueLinker::new("https://bugs.example.org/issues")
    }

    #[test]
    fn test_body_rendered_verbatim_with_links() {
        let formatter = MarkdownFormatter::new();
        let release = ReleaseBlock::new(
            Some("1.0.0".to_string()),
            " * Fixed bug #5.\n * Improved performance.",
            vec!["Fixed bug #5.".to_string(), "Improved performance.".to_string()],
        );

        let output = formatter.format(&release, &linker());

        assert_eq!(
            output,
            " * Fixed [bug #5](https://bugs.example.org/issues/5).\n * Improved performance."
        );
    }

    #[test]
    fn test_no_escaping_applied() {
        let formatter = MarkdownFormatter::new();
        let release = ReleaseBlock::new(
            None,
            " * Keep <em>literal</em> & raw.",
            vec!["Keep <em>literal</em> & raw.".to_string()],
        );

        let output = formatter.format(&release, &linker());
        assert_eq!(output, " * Keep <em>literal</em> & raw.");
    }

    #[test]
    fn test_line_breaks_preserved() {
        let formatter = MarkdownFormatter::new();
        let release = ReleaseBlock::new(
            None,
            " * A header.\n   With yet more text.",
            vec!["A header.\n   With yet more text.".to_string()],
        );

        let output = formatter.format(&release, &linker());
        assert!(output.contains("A header.\n   With yet more text."));
    }

    #[test]
    fn test_extension() {
        assert_eq!(MarkdownFormatter::new().extension(), "md");
    }
}
