//! Release formatters

mod html;
mod markdown;
mod registry;

pub use html::HtmlFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;

use crate::linker::IssueLinker;
use crate::types::ReleaseBlock;

/// Trait for release block formatters
pub trait ReleaseFormatter: Send + Sync {
    /// Format the latest release block to output text
    fn format(&self, release: &ReleaseBlock, linker: &IssueLinker) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
