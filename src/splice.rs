//! Document splicing: replace a line range of a base document with the
//! whole of an insert document.
//!
//! Used to swap a rewritten foreword + first chapter into an already
//! generated book without re-running the conversion. The base document is
//! cut in two places: everything up to and including the head cut is kept,
//! the insert replaces the middle, and the base resumes at the tail cut.
//!
//! Two ways to choose the cut points:
//!
//! * [`SpliceMode::Offsets`] — the original fixed line indices. Entirely
//!   positional, no validation: offsets beyond the document silently
//!   degrade to empty or truncated ranges. Kept as a strict compatibility
//!   mode so historic runs can be reproduced bit for bit.
//! * [`SpliceMode::Anchored`] — cut points located by substring search
//!   (the table-of-contents directive and a chapter-start marker), so the
//!   splice stays correct when either source document changes shape.
//!   Unlike offset mode, a missing anchor is an error.

use crate::convert::{read_utf8, write_atomic};
use crate::error::Txt2TexError;
use std::path::Path;
use tracing::{debug, info};

/// Head-cut anchor the CLI defaults to in anchored mode: the last preamble
/// line of a generated document.
pub const TOC_ANCHOR: &str = "\\tableofcontents";

/// Tail-cut anchor the CLI defaults to in anchored mode: the first chapter
/// retained from the base document.
pub const CHAPTER2_ANCHOR: &str = "\\chapter{Bölüm 2";

/// How the two cut points in the base document are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceMode {
    /// Keep the first `head_lines` lines, then resume at 0-based line index
    /// `tail_start`. No bounds checking, by design.
    Offsets { head_lines: usize, tail_start: usize },
    /// Keep through the first line containing `head_anchor` (inclusive),
    /// then resume at the first line at or after it containing
    /// `tail_anchor`.
    Anchored {
        head_anchor: String,
        tail_anchor: String,
    },
}

impl Default for SpliceMode {
    /// The original run's hard-coded offsets: preamble through
    /// `\tableofcontents` ends at line 50, chapter 2 starts at line 912.
    fn default() -> Self {
        SpliceMode::Offsets {
            head_lines: 50,
            tail_start: 911,
        }
    }
}

/// Splice `insert` into `base`, returning the combined document text.
///
/// The result is `head lines + one empty line + insert (verbatim) + tail
/// lines`, joined with `\n`.
pub fn splice(base: &str, insert: &str, mode: &SpliceMode) -> Result<String, Txt2TexError> {
    let lines: Vec<&str> = base.split('\n').collect();

    let (head_end, tail_start) = match mode {
        SpliceMode::Offsets {
            head_lines,
            tail_start,
        } => {
            // Silent clamping preserves the reference behaviour: an
            // oversized offset yields an empty or truncated range, never an
            // error.
            let head = (*head_lines).min(lines.len());
            let tail = (*tail_start).min(lines.len());
            (head, tail)
        }
        SpliceMode::Anchored {
            head_anchor,
            tail_anchor,
        } => {
            let head_idx = find_line(&lines, 0, head_anchor)?;
            let tail_idx = find_line(&lines, head_idx + 1, tail_anchor)?;
            (head_idx + 1, tail_idx)
        }
    };
    debug!("splice cuts: head_end={head_end}, tail_start={tail_start}");

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 64);
    out.extend(&lines[..head_end]);
    out.push("");
    out.push(insert);
    out.extend(&lines[tail_start..]);
    Ok(out.join("\n"))
}

/// Splice two files and write the result atomically to `output`.
pub fn splice_files(
    base: impl AsRef<Path>,
    insert: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mode: &SpliceMode,
) -> Result<usize, Txt2TexError> {
    let base_text = read_utf8(base.as_ref())?;
    let insert_text = read_utf8(insert.as_ref())?;
    let combined = splice(&base_text, &insert_text, mode)?;
    write_atomic(output.as_ref(), &combined)?;
    let total = combined.split('\n').count();
    info!("spliced document written: {total} lines");
    Ok(total)
}

fn find_line(lines: &[&str], from: usize, anchor: &str) -> Result<usize, Txt2TexError> {
    lines
        .iter()
        .skip(from)
        .position(|l| l.contains(anchor))
        .map(|i| from + i)
        .ok_or_else(|| Txt2TexError::AnchorNotFound {
            anchor: anchor.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_doc(n: usize) -> String {
        (1..=n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn offsets_keep_head_insert_and_tail() {
        // Spec scenario: offsets (50, 911) on a 1000-line document.
        let base = numbered_doc(1000);
        let out = splice(
            &base,
            "INSERTED",
            &SpliceMode::Offsets {
                head_lines: 50,
                tail_start: 911,
            },
        )
        .unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[49], "line 50");
        assert_eq!(lines[50], "");
        assert_eq!(lines[51], "INSERTED");
        assert_eq!(lines[52], "line 912");
        assert_eq!(*lines.last().unwrap(), "line 1000");
    }

    #[test]
    fn oversized_offsets_clamp_silently() {
        let base = numbered_doc(10);
        let out = splice(
            &base,
            "X",
            &SpliceMode::Offsets {
                head_lines: 50,
                tail_start: 911,
            },
        )
        .unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        // Whole base kept as head, tail range empty.
        assert_eq!(lines[..10], numbered_doc(10).split('\n').collect::<Vec<_>>()[..]);
        assert_eq!(lines[10], "");
        assert_eq!(lines[11], "X");
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn anchored_mode_cuts_at_matching_lines() {
        let base = "\\documentclass{book}\n\\tableofcontents\nold foreword\nold ch1\n\\chapter{Bölüm 2 Devam}\nrest";
        let mode = SpliceMode::Anchored {
            head_anchor: TOC_ANCHOR.to_string(),
            tail_anchor: CHAPTER2_ANCHOR.to_string(),
        };
        let out = splice(base, "NEW CONTENT", &mode).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[1], "\\tableofcontents");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "NEW CONTENT");
        assert_eq!(lines[4], "\\chapter{Bölüm 2 Devam}");
        assert!(!out.contains("old foreword"));
    }

    #[test]
    fn anchored_mode_fails_loudly_on_missing_anchor() {
        let err = splice(
            "no anchors here",
            "X",
            &SpliceMode::Anchored {
                head_anchor: TOC_ANCHOR.to_string(),
                tail_anchor: CHAPTER2_ANCHOR.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Txt2TexError::AnchorNotFound { .. }));
    }

    #[test]
    fn splice_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("book.tex");
        let insert = dir.path().join("new_ch1.tex");
        let output = dir.path().join("combined.tex");
        std::fs::write(&base, numbered_doc(100)).unwrap();
        std::fs::write(&insert, "FRESH").unwrap();

        let total = splice_files(
            &base,
            &insert,
            &output,
            &SpliceMode::Offsets {
                head_lines: 10,
                tail_start: 20,
            },
        )
        .unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("FRESH"));
        assert_eq!(total, written.split('\n').count());
    }
}
