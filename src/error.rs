//! Error types for the txt2tex library.
//!
//! Every variant is **fatal**: the run either completes or aborts before any
//! output file is written. There is deliberately no error path out of the
//! line classifier itself — a line that matches no structural rule is a
//! plain paragraph, not a failure (see [`crate::pipeline::classify`]).
//! Misclassification is caught by inspecting output, not by catching errors,
//! so the test suite compares emitted LaTeX rather than expecting panics.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the txt2tex library.
#[derive(Debug, Error)]
pub enum Txt2TexError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("input file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input file contains bytes that are not valid UTF-8.
    #[error("input file '{path}' is not valid UTF-8\nRe-extract the text with a UTF-8 encoder.")]
    InvalidUtf8 { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The PDF could not be opened or its text layer could not be read.
    #[error("failed to extract text from PDF '{path}': {detail}")]
    PdfExtractFailed { path: PathBuf, detail: String },

    // ── Splice errors ─────────────────────────────────────────────────────
    /// Anchored splice mode could not find the requested anchor line.
    ///
    /// Only anchored mode validates its cut points; fixed-offset mode
    /// silently clamps out-of-range offsets to preserve the original
    /// positional behaviour.
    #[error("splice anchor not found in base document: '{anchor}'")]
    AnchorNotFound { anchor: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = Txt2TexError::FileNotFound {
            path: PathBuf::from("book_content.txt"),
        };
        let msg = e.to_string();
        assert!(msg.contains("book_content.txt"), "got: {msg}");
    }

    #[test]
    fn anchor_not_found_display() {
        let e = Txt2TexError::AnchorNotFound {
            anchor: "\\tableofcontents".into(),
        };
        assert!(e.to_string().contains("\\tableofcontents"));
    }

    #[test]
    fn output_write_failed_has_source() {
        use std::error::Error;
        let e = Txt2TexError::OutputWriteFailed {
            path: PathBuf::from("book.tex"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("book.tex"));
    }
}
