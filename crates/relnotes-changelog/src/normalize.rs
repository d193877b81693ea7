//! Whitespace normalization for changelog items

/// Collapse an item's internal whitespace into single spaces.
///
/// Newlines become spaces so continuation lines flow into one running
/// sentence, then runs of spaces are collapsed to a fixed point and
/// the ends trimmed. Only literal space runs are collapsed; tabs and
/// other whitespace pass through untouched.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = text.replace('\n', " ");
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_become_single_spaces() {
        assert_eq!(
            collapse_whitespace("A header.\n   With yet more text."),
            "A header. With yet more text."
        );
    }

    #[test]
    fn test_space_runs_collapse_to_one() {
        assert_eq!(collapse_whitespace("a        b"), "a b");
        assert_eq!(collapse_whitespace("a  b   c    d"), "a b c d");
    }

    #[test]
    fn test_trims_leading_and_trailing_whitespace() {
        assert_eq!(collapse_whitespace("  padded  "), "padded");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["a  b\nc", "  x ", "already normal", ""];
        for input in inputs {
            let once = collapse_whitespace(input);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn test_never_lengthens() {
        let inputs = ["a  b", "x\n\ny", "   ", "plain"];
        for input in inputs {
            assert!(collapse_whitespace(input).len() <= input.len());
        }
    }

    #[test]
    fn test_tabs_are_preserved() {
        // Only literal space runs collapse; other whitespace categories
        // are intentionally left alone.
        assert_eq!(collapse_whitespace("a\tb"), "a\tb");
    }
}
