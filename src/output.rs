//! Output types: the assembled LaTeX document plus run statistics.
//!
//! The classifier is total — every line matches some rule — so there is no
//! per-line error to report. What a caller *can* inspect is how the input was
//! carved up: [`ConversionStats`] counts each structural role so that a run
//! whose heading or code-block counts look wrong can be caught at a glance
//! (or asserted on in tests) without diffing the whole document.

use serde::{Deserialize, Serialize};

/// Result of a text-to-LaTeX conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The full assembled LaTeX document (preamble + body + postamble).
    pub latex: String,
    /// Per-role counters and timing for the run.
    pub stats: ConversionStats,
}

/// Statistics for a conversion run.
///
/// Serialisable so the CLI `--json` flag can emit them alongside the
/// document for scripted inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Total input lines seen by the classifier (after marker stripping).
    pub total_lines: usize,
    /// Part + chapter + section + subsection + appendix headings emitted.
    pub headings: usize,
    /// `lstlisting` environments emitted (one per buffer flush).
    pub code_blocks: usize,
    /// Lines accumulated into code buffers.
    pub code_lines: usize,
    /// `Listing N.M` caption lines emitted in italics.
    pub listing_captions: usize,
    /// Table data rows emitted (separator rows are discarded, not counted).
    pub table_rows: usize,
    /// Callout boxes opened (tip + warning + case-study).
    pub boxes_opened: usize,
    /// Bullet list items emitted.
    pub bullets: usize,
    /// Quoted lines emitted in italics.
    pub quotes: usize,
    /// Right-aligned attribution lines emitted.
    pub attributions: usize,
    /// Plain paragraphs emitted (the universal fallback).
    pub paragraphs: usize,
    /// Lines discarded as stray page numbers / TOC artifacts / separators.
    pub discarded: usize,
    /// Wall-clock duration of the conversion in milliseconds.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialise_to_json() {
        let stats = ConversionStats {
            total_lines: 12,
            headings: 3,
            code_blocks: 1,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total_lines\":12"));
        assert!(json.contains("\"code_blocks\":1"));
    }
}
