//! Eager (full-document) conversion entry points.
//!
//! The whole input is read into memory, classified line by line in a single
//! pass, and the assembled LaTeX is materialised before anything touches the
//! output file. There is no streaming variant: a full book is a few hundred
//! kilobytes of text and the classifier is a single synchronous loop, so
//! buffering the document costs nothing and keeps the atomic-write contract
//! trivial (either the complete file appears, or nothing does).

use crate::config::ConversionConfig;
use crate::error::Txt2TexError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::classify::{LineClassifier, Role};
use crate::pipeline::strip;
use crate::preamble::{DEFAULT_POSTAMBLE, DEFAULT_PREAMBLE};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert page-marked book text to a complete LaTeX document.
///
/// This is the primary entry point for the library. It never fails: every
/// line is classified by the universal-fallback rule chain, so the only
/// error paths live in the file-based wrappers below.
pub fn convert_text(text: &str, config: &ConversionConfig) -> ConversionOutput {
    let start = Instant::now();

    // ── Step 1: strip page markers ───────────────────────────────────────
    let cleaned = if config.strip_page_markers {
        strip::strip_page_markers(text)
    } else {
        text.to_string()
    };

    // ── Step 2: classify and emit, line by line ──────────────────────────
    let mut latex = String::with_capacity(cleaned.len() + 4096);
    latex.push_str(config.preamble.as_deref().unwrap_or(DEFAULT_PREAMBLE));

    let mut classifier = LineClassifier::new(config);
    let mut stats = ConversionStats::default();

    for line in cleaned.lines() {
        let step = classifier.feed(line);
        record(&mut stats, step.role, step.flushed_block);
        latex.push_str(&step.latex);
    }

    // ── Step 3: flush a trailing open buffer, then close the document ────
    let last = classifier.finish();
    if last.flushed_block {
        stats.code_blocks += 1;
        debug!("flushed trailing code buffer at end of document");
    }
    latex.push_str(&last.latex);
    latex.push_str(config.postamble.as_deref().unwrap_or(DEFAULT_POSTAMBLE));

    stats.duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "converted {} lines: {} headings, {} code blocks, {} table rows in {}ms",
        stats.total_lines, stats.headings, stats.code_blocks, stats.table_rows, stats.duration_ms
    );

    ConversionOutput { latex, stats }
}

/// Read a UTF-8 input file and convert it.
pub fn convert_file(
    input: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Txt2TexError> {
    let text = read_utf8(input.as_ref())?;
    Ok(convert_text(&text, config))
}

/// Convert an input file and write the LaTeX document to `output`.
///
/// Uses atomic write (temp file + rename) so a failing run never leaves a
/// half-written output file behind.
pub fn convert_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Txt2TexError> {
    let result = convert_file(input, config)?;
    write_atomic(output.as_ref(), &result.latex)?;
    Ok(result.stats)
}

/// Read a file as UTF-8, mapping the io failure modes to library errors.
pub(crate) fn read_utf8(path: &Path) -> Result<String, Txt2TexError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Txt2TexError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => Txt2TexError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Txt2TexError::Internal(format!("failed to read '{}': {e}", path.display())),
    })?;
    String::from_utf8(bytes).map_err(|_| Txt2TexError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Write `content` to `path` atomically: temp file in the same directory,
/// then rename over the destination.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<(), Txt2TexError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Txt2TexError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, content).map_err(|e| Txt2TexError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| Txt2TexError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Map a classification step onto the run statistics.
fn record(stats: &mut ConversionStats, role: Role, flushed_block: bool) {
    stats.total_lines += 1;
    if flushed_block {
        stats.code_blocks += 1;
    }
    match role {
        Role::Blank => {}
        Role::PageArtifact | Role::TableSeparator => stats.discarded += 1,
        Role::Part | Role::Chapter | Role::Section | Role::Subsection | Role::Appendix => {
            stats.headings += 1
        }
        Role::ListingCaption => stats.listing_captions += 1,
        Role::CodeLine => stats.code_lines += 1,
        Role::TipOpen | Role::WarningOpen | Role::CaseStudyOpen => stats.boxes_opened += 1,
        Role::TableRow => stats.table_rows += 1,
        Role::Quote => stats.quotes += 1,
        Role::Attribution => stats.attributions += 1,
        Role::Bullet => stats.bullets += 1,
        Role::Paragraph => stats.paragraphs += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_wrapped_in_preamble_and_postamble() {
        let out = convert_text("Merhaba dünya.\n", &ConversionConfig::default());
        assert!(out.latex.starts_with("\\documentclass"));
        assert!(out.latex.ends_with("\\end{document}\n"));
        assert!(out.latex.contains("Merhaba dünya.\n\n"));
    }

    #[test]
    fn page_markers_never_reach_the_output() {
        let input = "--- Sayfa 1 ---\nBölüm 1 Giriş\n--- Sayfa 2 ---\nMetin.\n";
        let out = convert_text(input, &ConversionConfig::default());
        assert!(!out.latex.contains("--- Sayfa"));
        assert!(out.latex.contains("\\chapter{Bölüm 1 Giriş}"));
    }

    #[test]
    fn stats_count_roles() {
        let input = "Bölüm 1 Giriş\n\n1.1 Amaç\n• madde\n| a | b |\niv\n";
        let out = convert_text(input, &ConversionConfig::default());
        assert_eq!(out.stats.headings, 2);
        assert_eq!(out.stats.bullets, 1);
        assert_eq!(out.stats.table_rows, 1);
        assert_eq!(out.stats.discarded, 1);
    }

    #[test]
    fn trailing_code_buffer_counted_as_one_block() {
        let input = "def f():\n    return 1\n";
        let out = convert_text(input, &ConversionConfig::default());
        assert_eq!(out.stats.code_blocks, 1);
        assert_eq!(out.stats.code_lines, 2);
        assert_eq!(out.latex.matches("\\begin{lstlisting}").count(), 1);
    }

    #[test]
    fn custom_preamble_and_postamble_override_builtins() {
        let config = ConversionConfig::builder()
            .preamble("% test frame\n")
            .postamble("% end\n")
            .build()
            .unwrap();
        let out = convert_text("Metin.\n", &config);
        assert!(out.latex.starts_with("% test frame\n"));
        assert!(out.latex.ends_with("% end\n"));
        assert!(!out.latex.contains("\\documentclass"));
    }

    #[test]
    fn convert_file_reports_missing_input() {
        let err = convert_file("no_such_book.txt", &ConversionConfig::default()).unwrap_err();
        assert!(matches!(err, Txt2TexError::FileNotFound { .. }));
    }

    #[test]
    fn convert_to_file_writes_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("content.txt");
        let output = dir.path().join("book.tex");
        std::fs::write(&input, "Bölüm 1 Test\n").unwrap();

        let stats = convert_to_file(&input, &output, &ConversionConfig::default()).unwrap();
        assert_eq!(stats.headings, 1);

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\\chapter{Bölüm 1 Test}"));
        assert!(!dir.path().join("book.tex.tmp").exists());
    }
}
