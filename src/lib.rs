//! # txt2tex
//!
//! Convert page-marked book text extractions to LaTeX.
//!
//! ## Why this crate?
//!
//! Publishing pipelines that start from a PDF often go through a plain-text
//! intermediate: the text layer is extracted page by page, hand-corrected,
//! and then typeset again. The structure of the book — parts, chapters,
//! numbered sections, code listings, callout boxes, tables — survives that
//! round trip only as loose line conventions. This crate reads those
//! conventions back out: a single-pass, rule-based line classifier turns
//! each input line into the corresponding LaTeX fragment, carrying just
//! enough state across lines to assemble multi-line code listings.
//!
//! ## Pipeline Overview
//!
//! ```text
//! book.pdf
//!  │
//!  ├─ 1. extract   per-page text layer → `--- Sayfa N ---` marked text
//!  ├─ 2. strip     remove the page markers
//!  ├─ 3. classify  18 priority rules per line (+ code-buffer state)
//!  ├─ 4. assemble  preamble + emitted fragments + postamble
//!  └─ 5. write     atomic temp-file + rename
//!
//! book.tex + onsoz_yeni.tex ── splice ──▶ combined book.tex
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use txt2tex::{convert_text, ConversionConfig};
//!
//! let config = ConversionConfig::default();
//! let output = convert_text("Bölüm 1 Giriş\n\nMerhaba dünya.\n", &config);
//! assert!(output.latex.contains("\\chapter{Bölüm 1 Giriş}"));
//! assert_eq!(output.stats.paragraphs, 1);
//! ```
//!
//! ## Design notes
//!
//! The classifier never fails: any line that matches no structural rule is
//! emitted as a plain paragraph. Misclassification is therefore silent and
//! must be caught by inspecting output — [`ConversionStats`] exists to make
//! that inspection cheap.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `txt2tex` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! txt2tex = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod preamble;
pub mod splice;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert_file, convert_text, convert_to_file};
pub use error::Txt2TexError;
pub use extract::{extract_pages, extract_to_file};
pub use output::{ConversionOutput, ConversionStats};
pub use splice::{splice, splice_files, SpliceMode};
