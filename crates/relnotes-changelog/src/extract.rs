//! Latest-release extraction
//!
//! Changelog documents follow this convention:
//!
//! ```text
//! Release x.x.x
//! -------------
//!
//!  * Text.
//!  * More text.
//!  * A header.
//!    With yet more text.
//!
//! Release y.y.y
//! -------------
//! .....
//! ```
//!
//! Only the first (latest) release section is ever materialized. The
//! block is bounded by the next `Release` header, the literal
//! `Older releases` sentinel, or end of input, whichever comes first.

use tracing::debug;

use relnotes_core::error::ExtractError;

use crate::types::ReleaseBlock;

/// Marker line that ends the structured part of the changelog
const OLDER_RELEASES_MARKER: &str = "Older releases";

/// Line prefix that begins a release section
const RELEASE_HEADER_PREFIX: &str = "Release";

/// Line prefix that begins a bullet item
const ITEM_MARKER: &str = " * ";

/// Extract the latest release block from a changelog document.
///
/// The document must begin with a `Release ...` header line followed
/// by a dash underline; a document that does not is rejected outright
/// rather than yielding a partial result.
pub fn latest_release(document: &str) -> Result<ReleaseBlock, ExtractError> {
    let lines: Vec<&str> = document.lines().collect();

    let header = match lines.first() {
        Some(line) if line.starts_with(RELEASE_HEADER_PREFIX) => *line,
        _ => return Err(ExtractError::NoReleaseHeader),
    };

    let version = header
        .strip_prefix(RELEASE_HEADER_PREFIX)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from);

    // Bounded search for the end of the block: the next release header
    // or the older-releases sentinel, not an unbounded regex scan.
    let end = lines[1..]
        .iter()
        .position(|line| {
            line.starts_with(RELEASE_HEADER_PREFIX) || line.starts_with(OLDER_RELEASES_MARKER)
        })
        .map(|i| i + 1)
        .unwrap_or(lines.len());

    let mut block = &lines[1..end];

    // The header must be underlined with dashes.
    match block.first() {
        Some(line) if !line.is_empty() && line.chars().all(|c| c == '-') => {
            block = &block[1..];
        }
        _ => return Err(ExtractError::MissingUnderline),
    }

    // Drop blank lines after the underline and at the end of the block.
    while block.first().is_some_and(|line| line.trim().is_empty()) {
        block = &block[1..];
    }
    while block.last().is_some_and(|line| line.trim().is_empty()) {
        block = &block[..block.len() - 1];
    }

    let body = block.join("\n");
    let items = split_items(block);

    if items.is_empty() {
        return Err(ExtractError::NoItems);
    }

    debug!(
        version = version.as_deref(),
        item_count = items.len(),
        "extracted latest release block"
    );

    Ok(ReleaseBlock::new(version, body, items))
}

/// Segment the release body into bullet items.
///
/// A line starting with ` * ` opens a new item; every other line is a
/// continuation of the current item and kept verbatim (indentation
/// included). Blank lines before the first bullet never produce an
/// empty leading item.
fn split_items(lines: &[&str]) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in lines {
        if let Some(text) = line.strip_prefix(ITEM_MARKER) {
            if let Some(item) = current.take() {
                items.push(item);
            }
            current = Some(text.to_string());
        } else if let Some(item) = current.as_mut() {
            item.push('\n');
            item.push_str(line);
        } else if !line.trim().is_empty() {
            // Text before the first bullet starts its own leading item.
            current = Some(line.to_string());
        }
    }

    if let Some(item) = current {
        items.push(item);
    }

    items
}
