//! Relnotes Changelog - latest-release extraction and rendering
//!
//! This crate isolates the most recent release block of a changelog
//! document and renders it as HTML list markup or Markdown, with bare
//! issue references auto-linked to an external tracker.

pub mod escape;
pub mod extract;
pub mod formatter;
pub mod linker;
pub mod normalize;
pub mod renderer;
pub mod types;

pub use formatter::{FormatterRegistry, HtmlFormatter, MarkdownFormatter, ReleaseFormatter};
pub use linker::IssueLinker;
pub use renderer::ReleaseRenderer;
pub use types::{ReleaseBlock, Span};
