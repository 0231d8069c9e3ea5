//! Page-marker stripping: remove the per-page boundary tags before
//! structural classification.
//!
//! The extraction stage writes `--- Sayfa N ---` once per source page (see
//! [`crate::extract`]). The markers exist only to make the intermediate text
//! file navigable by page; they carry no structure the classifier should
//! see, so they are removed wholesale — including any trailing whitespace
//! and newline — before the line loop runs. A document without markers
//! passes through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// The page-boundary marker written by the extraction stage.
pub const PAGE_MARKER_PREFIX: &str = "--- Sayfa ";

static RE_PAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--- Sayfa \d+ ---\s*").unwrap());

/// Remove every page-boundary marker (and its trailing whitespace) from `input`.
pub fn strip_page_markers(input: &str) -> String {
    RE_PAGE_MARKER.replace_all(input, "").to_string()
}

/// Render the marker line for a given 1-indexed page number.
///
/// Used by the extraction stage so the writer and the stripper can never
/// drift apart.
pub fn page_marker(page_num: usize) -> String {
    format!("{PAGE_MARKER_PREFIX}{page_num} ---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_marker() {
        let input = "--- Sayfa 1 ---\nBölüm 1 Giriş\n";
        assert_eq!(strip_page_markers(input), "Bölüm 1 Giriş\n");
    }

    #[test]
    fn strips_all_markers_and_trailing_whitespace() {
        let input = "--- Sayfa 1 ---\n\nfirst\n--- Sayfa 2 ---   \n\nsecond\n";
        let cleaned = strip_page_markers(input);
        assert!(!cleaned.contains("--- Sayfa"));
        assert!(cleaned.contains("first"));
        assert!(cleaned.contains("second"));
    }

    #[test]
    fn no_markers_is_a_noop() {
        let input = "plain text\nwith lines\n";
        assert_eq!(strip_page_markers(input), input);
    }

    #[test]
    fn round_trips_with_extraction_marker() {
        let marker = page_marker(42);
        let cleaned = strip_page_markers(&format!("{marker}body"));
        assert_eq!(cleaned, "body");
    }
}
