//! Page-by-page PDF text extraction.
//!
//! Produces the page-marked plain text that feeds the conversion pipeline:
//! one `--- Sayfa N ---` marker per page, the page's extracted text, then a
//! blank-line separator. A page with no extractable text (images only,
//! empty page) contributes just its marker followed by the blank line —
//! that is a zero-length contribution, not an error.
//!
//! Extraction reads the PDF's embedded text layer via `pdf-extract`.
//! Scanned books without a text layer come out empty; they need an OCR
//! pass before this tool applies.

use crate::convert::write_atomic;
use crate::error::Txt2TexError;
use crate::pipeline::strip::page_marker;
use std::path::Path;
use tracing::{debug, info};

/// Extract per-page plain text from a PDF.
///
/// Returns one string per page, in page order; empty strings for pages
/// without extractable text.
pub fn extract_pages(path: impl AsRef<Path>) -> Result<Vec<String>, Txt2TexError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Txt2TexError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let pages =
        pdf_extract::extract_text_by_pages(path).map_err(|e| Txt2TexError::PdfExtractFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
    debug!("extracted {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

/// Assemble per-page texts into the single page-marked document the
/// conversion stage consumes.
pub fn assemble_marked_text(pages: &[String]) -> String {
    let mut out = String::new();
    for (i, text) in pages.iter().enumerate() {
        out.push_str(&page_marker(i + 1));
        if !text.is_empty() {
            out.push_str(text);
        }
        out.push_str("\n\n");
    }
    out
}

/// Extract a PDF and write the page-marked text to `output` atomically.
///
/// Returns the number of pages extracted.
pub fn extract_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<usize, Txt2TexError> {
    let pages = extract_pages(input.as_ref())?;
    let text = assemble_marked_text(&pages);
    write_atomic(output.as_ref(), &text)?;
    info!(
        "wrote {} pages of extracted text to {}",
        pages.len(),
        output.as_ref().display()
    );
    Ok(pages.len())
}
