//! Compiled regex patterns and shared marker constants for the pipeline.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their stage in the summarization pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Markup Cleaning Patterns
// =============================================================================

/// Matches a `style...` attribute run inside table markup, up to the cell
/// separator it decorates. Non-greedy so each cell is handled on its own.
pub static TABLE_STYLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"style.*?\|").expect("TABLE_STYLE_ATTR regex"));

/// Matches a paired `<ref>...</ref>` citation, including attribute forms
/// like `<ref name="x">`. Non-greedy: each citation matched separately.
pub static REF_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<ref.*?</ref>").expect("REF_PAIR regex"));

/// Matches a self-closing `<ref ... />` citation.
pub static REF_SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<ref.*?/>").expect("REF_SELF_CLOSING regex"));

/// Matches a `<sup>...</sup>` block.
pub static SUP_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<sup.*?</sup>").expect("SUP_PAIR regex"));

/// Matches a `<gallery>...</gallery>` block.
pub static GALLERY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<gallery.*?</gallery>").expect("GALLERY_PAIR regex"));

/// Matches an HTML comment `<!--...-->`.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--.*?-->").expect("HTML_COMMENT regex"));

/// Matches a `<div>...</div>` block, attributes included.
pub static DIV_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div.*?</div>").expect("DIV_PAIR regex"));

// =============================================================================
// Tokenization Patterns
// =============================================================================

/// Matches one word token: letters, digits and apostrophes.
pub static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w']+").expect("WORD regex"));

// =============================================================================
// Summary Rendering Patterns
// =============================================================================

/// Matches a bullet run: from a `*` marker up to and including the next
/// paragraph break, or to the end of the summary.
pub static BULLET_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*.*?(?:<br><br>|$)").expect("BULLET_RUN regex"));

/// Matches a numbered-bullet run, same shape as [`BULLET_RUN`].
pub static NUMBERED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#.*?(?:<br><br>|$)").expect("NUMBERED_RUN regex"));

// =============================================================================
// Fetch Patterns
// =============================================================================

/// Matches a `[[...]]` span on one line, outermost brackets. Used to pull
/// the target title out of a redirect stub.
pub static SQUARE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[.*\]\]").expect("SQUARE_LINK regex"));

// =============================================================================
// Trailing Section Headers
// =============================================================================

/// Section headers that mark the start of reference/appendix material, with
/// the heading level each appears at. Everything from the earliest surviving
/// occurrence of any of these to the end of the article is dropped.
pub const TRAILING_SECTIONS: [(&str, &str); 12] = [
    ("==", "External links"),
    ("==", "Works cited"),
    ("===", "Citations"),
    ("===", "Commentary notes"),
    ("==", "Notes"),
    ("==", "See also"),
    ("==", "References"),
    ("==", "Related pages"),
    ("==", "Other websites"),
    ("==", "In art"),
    ("===", "Bibliography"),
    ("==", "Further reading"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_pair_matches_attributed_refs() {
        assert!(REF_PAIR.is_match("<ref name=\"a\">cite</ref>"));
        assert!(REF_PAIR.is_match("<ref>cite</ref>"));
        assert!(!REF_PAIR.is_match("<ref name=\"a\"/>"));
    }

    #[test]
    fn ref_self_closing_matches() {
        assert!(REF_SELF_CLOSING.is_match("<ref name=\"a\"/>"));
        assert!(REF_SELF_CLOSING.is_match("<ref name=b />"));
    }

    #[test]
    fn table_style_attr_stops_at_pipe() {
        let cleaned = TABLE_STYLE_ATTR.replace_all("style=\"width:1em\"|Cell|rest", "|");
        assert_eq!(cleaned, "|Cell|rest");
    }

    #[test]
    fn word_matches_contractions() {
        let words: Vec<&str> = WORD.find_iter("Don't stop, it's 1984").map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["Don't", "stop", "it's", "1984"]);
    }

    #[test]
    fn bullet_run_stops_at_paragraph_break() {
        let m = BULLET_RUN.find("* item one<br><br>after").map(|m| m.as_str());
        assert_eq!(m, Some("* item one<br><br>"));
    }

    #[test]
    fn square_link_stays_on_one_line() {
        let m = SQUARE_LINK.find("#REDIRECT [[Great Wall]]\n[[Other]]").map(|m| m.as_str());
        assert_eq!(m, Some("[[Great Wall]]"));
    }
}
