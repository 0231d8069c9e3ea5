//! The line classifier & emitter: the core of the conversion.
//!
//! Each trimmed input line is classified into exactly one [`Role`] by a
//! prioritised rule chain (first match wins) and emitted as a LaTeX
//! fragment. Two pieces of state cross line boundaries:
//!
//! * `mode` — whether we are inside a multi-line code listing, and
//! * `buffer` — the accumulated listing lines, flushed as one
//!   `lstlisting` environment when recognition ends.
//!
//! The state is an explicit `{ mode, buffer }` object owned by
//! [`LineClassifier`] and threaded through [`LineClassifier::feed`], which
//! returns the classified role and the emitted fragment for every line —
//! the machine is testable one transition at a time.
//!
//! ## Rule order
//!
//! The chain below is a total order; re-ordering it changes output. Three
//! orderings matter in particular:
//!
//! * subsection (`1.2.3 …`) is checked before section (`1.2 …`) because the
//!   section pattern is a strict prefix of the subsection pattern;
//! * the attribution rule sees `- ` lines before the bullet rule does, so a
//!   leading `- ` is an attribution, never a list item;
//! * heading rules run even while a listing is open — a heading inside a
//!   code block is emitted immediately and the buffer stays open until a
//!   later flush point.
//!
//! The final rule (plain paragraph) always matches: classification is
//! total and never raises. Misclassification is silent by design and is
//! caught by output comparison, not by runtime failure.
//!
//! ## Callout boxes
//!
//! The tip/warning/case-study rules open a tcolorbox environment and never
//! emit a matching `\end{...}`. The reference output has always been built
//! this way; an explicit close-on-next-structural-line rule would change
//! every existing document, so the always-open behaviour is preserved.

use crate::config::ConversionConfig;
use crate::pipeline::escape::escape_latex;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Cross-line classifier mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Regular prose handling.
    #[default]
    Normal,
    /// Accumulating lines into an open code buffer.
    InListing,
}

/// The structural role assigned to a line. Exactly one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Blank,
    /// Stray page number or TOC roman numeral; discarded.
    PageArtifact,
    Part,
    Chapter,
    Subsection,
    Section,
    Appendix,
    /// A `Listing N.M` caption line.
    ListingCaption,
    /// A line that started or continued a code buffer.
    CodeLine,
    TipOpen,
    WarningOpen,
    CaseStudyOpen,
    TableRow,
    /// An all-dash table header/body separator; discarded.
    TableSeparator,
    Quote,
    Attribution,
    Bullet,
    Paragraph,
}

/// Result of feeding one line to the classifier.
#[derive(Debug, Clone)]
pub struct Step {
    /// The role the line was classified as.
    pub role: Role,
    /// LaTeX emitted for this line (possibly empty; possibly includes a
    /// flushed code block ahead of the line's own fragment).
    pub latex: String,
    /// Whether feeding this line flushed an open code buffer.
    pub flushed_block: bool,
}

// ── Patterns ─────────────────────────────────────────────────────────────────

static RE_ROMAN_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ivxlc]+$").unwrap());
static RE_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"^K[ıi]s[ıi]m\s+[IVX]+").unwrap());
static RE_CHAPTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^B[öo]l[üu]m\s+\d+").unwrap());
static RE_SUBSECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\s").unwrap());
static RE_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\s").unwrap());

/// Substrings that mark a line as code and start (or continue) a listing
/// buffer: language keywords, comment markers, structured-data keys, SQL
/// keywords, Dockerfile verbs, and pseudo-workflow markers.
const CODE_TRIGGERS: [&str; 24] = [
    "CLASS ",
    "FUNCTION ",
    "INTERFACE ",
    "def ",
    "class ",
    "// ",
    "apiVersion:",
    "kind:",
    "spec:",
    "FROM ",
    "RUN ",
    "CREATE TABLE",
    "SELECT ",
    "INSERT ",
    "UPDATE ",
    "GOAL:",
    "STEP ",
    "// PHASE",
    "AGENTS =",
    "ROUTES:",
    "BEGIN TRANSACTION",
    "COMMIT",
    "prompt =",
    "response =",
];

/// Symbols whose presence lets a line continue an open listing even when it
/// starts with an uppercase letter.
const CODE_SYMBOLS: [&str; 7] = ["=", "{", "}", "(", ")", "->", "//"];

/// Fixed literal titles of the two unnumbered appendix chapters.
const APPENDIX_TITLES: [&str; 2] = ["Mimari Anti-Patterns", "Araç ve Teknoloji"];

// ── Classifier ───────────────────────────────────────────────────────────────

/// Per-document classifier state machine.
///
/// Create one per conversion, [`feed`](Self::feed) every line in order, then
/// call [`finish`](Self::finish) exactly once to flush a trailing open
/// buffer.
pub struct LineClassifier<'a> {
    config: &'a ConversionConfig,
    mode: Mode,
    buffer: Vec<String>,
}

impl<'a> LineClassifier<'a> {
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            mode: Mode::Normal,
            buffer: Vec::new(),
        }
    }

    /// Current mode, for tests and diagnostics.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Classify one raw line and return its role plus the emitted LaTeX.
    pub fn feed(&mut self, raw: &str) -> Step {
        let line = raw.trim();

        // Rule 1: blank line. Swallowed inside a listing; a paragraph break
        // otherwise.
        if line.is_empty() {
            let latex = match self.mode {
                Mode::Normal => "\n".to_string(),
                Mode::InListing => String::new(),
            };
            return Step {
                role: Role::Blank,
                latex,
                flushed_block: false,
            };
        }

        // Rule 2: stray page number or TOC roman numeral. Normal mode only,
        // so legitimate code tokens (`i`, `42`) survive inside a listing.
        if self.mode == Mode::Normal
            && (RE_ROMAN_ONLY.is_match(&line.to_lowercase())
                || line.chars().all(|c| c.is_ascii_digit()))
        {
            return Step {
                role: Role::PageArtifact,
                latex: String::new(),
                flushed_block: false,
            };
        }

        // Rules 3–7: structural headings. Note these fire even in InListing
        // mode without flushing the buffer.
        if (line.starts_with("Kısım ") || line.starts_with("Kisim ")) && RE_PART.is_match(line) {
            return self.heading(Role::Part, format!("\n\\part{{{}}}\n", self.title(line)));
        }
        if (line.starts_with("Bölüm ") || line.starts_with("Bolum ")) && RE_CHAPTER.is_match(line)
        {
            return self.heading(
                Role::Chapter,
                format!("\n\\chapter{{{}}}\n", self.title(line)),
            );
        }
        if RE_SUBSECTION.is_match(line) {
            return self.heading(
                Role::Subsection,
                format!("\n\\subsection{{{}}}\n", self.title(line)),
            );
        }
        if RE_SECTION.is_match(line) {
            return self.heading(
                Role::Section,
                format!("\n\\section{{{}}}\n", self.title(line)),
            );
        }
        if APPENDIX_TITLES.iter().any(|t| line.starts_with(t)) {
            let title = self.title(line);
            return self.heading(
                Role::Appendix,
                format!("\n\\chapter*{{{title}}}\n\\addcontentsline{{toc}}{{chapter}}{{{title}}}\n"),
            );
        }

        // Rule 8: listing caption. Flushes an open buffer first so the
        // caption lands after its code block.
        if line.starts_with("Listing ") {
            let mut latex = String::new();
            let flushed = self.flush_into(&mut latex);
            latex.push_str(&format!("\\textit{{{}}}\n\n", self.title(line)));
            return Step {
                role: Role::ListingCaption,
                latex,
                flushed_block: flushed,
            };
        }

        // Rule 9: code trigger — start or continue a buffer.
        if CODE_TRIGGERS.iter().any(|t| line.contains(t)) {
            if self.mode == Mode::Normal {
                debug!("opening code buffer at: {line:?}");
                self.mode = Mode::InListing;
                self.buffer.clear();
            }
            self.buffer.push(line.to_string());
            return Step {
                role: Role::CodeLine,
                latex: String::new(),
                flushed_block: false,
            };
        }

        // Rule 10: listing continuation. A line continues the block if it
        // does not start with an uppercase letter, or carries structural
        // punctuation. Otherwise the block ends here and the line falls
        // through to the remaining rules.
        let mut latex = String::new();
        let mut flushed = false;
        if self.mode == Mode::InListing {
            let first_upper = line.chars().next().is_some_and(char::is_uppercase);
            let has_symbol = CODE_SYMBOLS.iter().any(|s| line.contains(s));
            if !first_upper || has_symbol {
                self.buffer.push(line.to_string());
                return Step {
                    role: Role::CodeLine,
                    latex: String::new(),
                    flushed_block: false,
                };
            }
            flushed = self.flush_into(&mut latex);
        }

        // Rules 11–13: callout-box opens. The marker line itself is
        // consumed; only the environment opener is emitted (never closed).
        if line.contains("İpucu") || line.contains("Ipucu") {
            latex.push_str("\\begin{ipucu}\n");
            return Step {
                role: Role::TipOpen,
                latex,
                flushed_block: flushed,
            };
        }
        if line.contains("Dikkat") {
            latex.push_str("\\begin{dikkat}\n");
            return Step {
                role: Role::WarningOpen,
                latex,
                flushed_block: flushed,
            };
        }
        if line.contains("Örnek Olay") || line.contains("Ornek Olay") {
            latex.push_str("\\begin{ornekolay}\n");
            return Step {
                role: Role::CaseStudyOpen,
                latex,
                flushed_block: flushed,
            };
        }

        // Rule 14: table row. All-dash rows are the header separator of the
        // source convention and are discarded.
        if line.matches('|').count() >= 2 {
            let cells: Vec<String> = line
                .split('|')
                .map(|c| self.title(c.trim()))
                .filter(|c| !c.is_empty())
                .collect();
            if cells.iter().all(|c| c.chars().all(|ch| ch == '-')) {
                return Step {
                    role: Role::TableSeparator,
                    latex,
                    flushed_block: flushed,
                };
            }
            latex.push_str(&cells.join(" & "));
            latex.push_str(" \\\\\n");
            return Step {
                role: Role::TableRow,
                latex,
                flushed_block: flushed,
            };
        }

        // Rule 15: quoted line, leading quote character kept verbatim.
        if line.starts_with('"') || line.starts_with('\u{201C}') || line.starts_with('\u{201D}') {
            latex.push_str(&format!("\\textit{{{}}}\n\n", self.title(line)));
            return Step {
                role: Role::Quote,
                latex,
                flushed_block: flushed,
            };
        }

        // Rule 16: attribution. Checked before bullets, so `- ` lines are
        // attributions by the source convention.
        if line.starts_with('—') || line.starts_with("- ") {
            latex.push_str(&format!("\\hfill {}\n\n", self.title(line)));
            return Step {
                role: Role::Attribution,
                latex,
                flushed_block: flushed,
            };
        }

        // Rule 17: bullet item; the two-character marker prefix is stripped.
        // The `- ` branch is shadowed by the attribution rule above, which
        // claims those lines first (source convention).
        if line.starts_with('•') || line.starts_with("- ") {
            let text: String = line.chars().skip(2).collect();
            latex.push_str(&format!("\\item {}\n", self.title(&text)));
            return Step {
                role: Role::Bullet,
                latex,
                flushed_block: flushed,
            };
        }

        // Rule 18: plain paragraph — the universal fallback.
        latex.push_str(&self.title(line));
        latex.push_str("\n\n");
        Step {
            role: Role::Paragraph,
            latex,
            flushed_block: flushed,
        }
    }

    /// Flush a trailing open code buffer. Call exactly once, after the last
    /// line has been fed.
    pub fn finish(&mut self) -> Step {
        let mut latex = String::new();
        let flushed = self.flush_into(&mut latex);
        Step {
            role: Role::Blank,
            latex,
            flushed_block: flushed,
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn heading(&self, role: Role, latex: String) -> Step {
        Step {
            role,
            latex,
            flushed_block: false,
        }
    }

    /// Escape a text fragment when the escaper path is enabled; otherwise
    /// pass it through verbatim (the reference behaviour).
    fn title(&self, text: &str) -> String {
        if self.config.escape_literal_text {
            escape_latex(text)
        } else {
            text.to_string()
        }
    }

    /// Wrap the accumulated buffer in an `lstlisting` environment and reset
    /// to `Normal`. Returns whether anything was flushed.
    fn flush_into(&mut self, out: &mut String) -> bool {
        self.mode = Mode::Normal;
        if self.buffer.is_empty() {
            return false;
        }
        debug!("flushing code buffer ({} lines)", self.buffer.len());
        out.push_str("\\begin{lstlisting}\n");
        out.push_str(&self.buffer.join("\n"));
        out.push_str("\n\\end{lstlisting}\n");
        self.buffer.clear();
        true
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
