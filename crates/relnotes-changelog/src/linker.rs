//! Issue tracker auto-linking
//!
//! Recognizes bare `bug #N`, `issue #N` and `GH-N` references in item
//! text and resolves them into typed link spans against a configured
//! tracker base URL.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Span;

/// Regex for bare issue references. Case-insensitive; a recognized
/// prefix without digits is not a match at all.
static ISSUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(bug #|issue #|GH-)(\d+)").expect("Invalid regex"));

/// Resolves issue references into tracker links
#[derive(Debug, Clone)]
pub struct IssueLinker {
    base_url: String,
}

impl IssueLinker {
    /// Create a linker for the given tracker base URL.
    ///
    /// Trailing slashes are trimmed so URL building is always
    /// `base/<number>`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base_url: base }
    }

    /// The tracker base URL (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the tracker URL for an issue number.
    ///
    /// The number is used as captured; no leading-zero normalization.
    pub fn issue_url(&self, number: &str) -> String {
        format!("{}/{}", self.base_url, number)
    }

    /// Split text into spans, turning each issue reference into a link.
    ///
    /// Matches are consumed left to right and never overlap. The link
    /// label is the matched text with its original casing.
    pub fn link_spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut last = 0;

        for caps in ISSUE_REGEX.captures_iter(text) {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(2)) else {
                continue;
            };

            if whole.start() > last {
                spans.push(Span::text(&text[last..whole.start()]));
            }
            spans.push(Span::link(whole.as_str(), self.issue_url(number.as_str())));
            last = whole.end();
        }

        if last < text.len() {
            spans.push(Span::text(&text[last..]));
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linker() -> IssueLinker {
        IssueLinker::new("https://bugs.example.org/issues")
    }

    #[test]
    fn test_two_distinct_references() {
        let spans = linker().link_spans("fixed in bug #42 and GH-7");

        assert_eq!(
            spans,
            vec![
                Span::text("fixed in "),
                Span::link("bug #42", "https://bugs.example.org/issues/42"),
                Span::text(" and "),
                Span::link("GH-7", "https://bugs.example.org/issues/7"),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_prefix_preserves_label_casing() {
        let spans = linker().link_spans("see Bug #3 and ISSUE #4 and gh-5");

        let labels: Vec<&str> = spans
            .iter()
            .filter_map(|s| match s {
                Span::Link { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Bug #3", "ISSUE #4", "gh-5"]);
    }

    #[test]
    fn test_prefix_without_digits_is_no_match() {
        let spans = linker().link_spans("this bug # is unnumbered, as is GH-");
        assert_eq!(
            spans,
            vec![Span::text("this bug # is unnumbered, as is GH-")]
        );
    }

    #[test]
    fn test_text_without_references_is_one_span() {
        let spans = linker().link_spans("Improved performance.");
        assert_eq!(spans, vec![Span::text("Improved performance.")]);
    }

    #[test]
    fn test_reference_spanning_whole_text() {
        let spans = linker().link_spans("issue #99");
        assert_eq!(
            spans,
            vec![Span::link("issue #99", "https://bugs.example.org/issues/99")]
        );
    }

    #[test]
    fn test_leading_zeros_kept_verbatim() {
        let spans = linker().link_spans("GH-007");
        assert_eq!(
            spans,
            vec![Span::link("GH-007", "https://bugs.example.org/issues/007")]
        );
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base() {
        let linker = IssueLinker::new("https://bugs.example.org/issues///");
        assert_eq!(linker.issue_url("1"), "https://bugs.example.org/issues/1");
    }

    #[test]
    fn test_adjacent_references_do_not_overlap() {
        let spans = linker().link_spans("bug #1bug #2");
        assert_eq!(
            spans,
            vec![
                Span::link("bug #1", "https://bugs.example.org/issues/1"),
                Span::link("bug #2", "https://bugs.example.org/issues/2"),
            ]
        );
    }
}
