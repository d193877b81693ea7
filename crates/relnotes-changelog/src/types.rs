//! Changelog types

use serde::{Deserialize, Serialize};

/// The latest release block extracted from a changelog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseBlock {
    /// Version string from the `Release X.Y.Z` header line, if present
    pub version: Option<String>,
    /// The cleaned release text: header, underline and trailing blank
    /// lines stripped, bullet markers and line breaks intact
    pub body: String,
    /// Ordered bullet items, bullet marker removed, continuation lines
    /// joined with newlines
    pub items: Vec<String>,
}

impl ReleaseBlock {
    /// Create a new release block
    pub fn new(version: Option<String>, body: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            version,
            body: body.into(),
            items,
        }
    }

    /// Number of items in the block
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the block has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A typed fragment of linked text.
///
/// The issue linker splits a string into these; formatters walk them,
/// escaping only text fragments and emitting trusted markup for links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    /// Plain text, subject to output escaping
    Text(String),
    /// An issue reference resolved to a tracker URL
    Link {
        /// The matched reference text, original casing preserved
        label: String,
        /// Absolute URL into the issue tracker
        url: String,
    },
}

impl Span {
    /// Create a text span
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a link span
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_block_counts() {
        let block = ReleaseBlock::new(
            Some("1.0.0".to_string()),
            "body",
            vec!["one".to_string(), "two".to_string()],
        );
        assert_eq!(block.item_count(), 2);
        assert!(!block.is_empty());
    }

    #[test]
    fn test_span_constructors() {
        assert_eq!(Span::text("hi"), Span::Text("hi".to_string()));
        assert_eq!(
            Span::link("bug #1", "https://bugs.example.org/1"),
            Span::Link {
                label: "bug #1".to_string(),
                url: "https://bugs.example.org/1".to_string(),
            }
        );
    }
}
