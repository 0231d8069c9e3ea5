//! Fixed LaTeX preamble and postamble wrapping the converted body.
//!
//! Centralising the document frame here serves two purposes:
//!
//! 1. **Single source of truth** — changing the package list, the listings
//!    styling, or a tcolorbox colour requires editing exactly one place.
//!
//! 2. **Testability** — unit and integration tests can assert on the frame
//!    directly without running a conversion.
//!
//! Callers can override either constant via
//! [`crate::config::ConversionConfig::preamble`] /
//! [`crate::config::ConversionConfig::postamble`]; the constants here are
//! used only when no override is provided.
//!
//! The `literate` table in the `lstset` block maps Turkish characters to
//! their LaTeX escapes inside code listings, where `inputenc` alone does not
//! reach. The three `tcolorbox` environments (`ipucu`, `dikkat`,
//! `ornekolay`) are the targets of the callout-open rules in
//! [`crate::pipeline::classify`].

/// Default document preamble: class, packages, listings setup, callout-box
/// environments, and title metadata, through `\tableofcontents`.
pub const DEFAULT_PREAMBLE: &str = r#"\documentclass[11pt,a4paper]{book}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[turkish]{babel}
\usepackage{geometry}
\usepackage{graphicx}
\usepackage{hyperref}
\usepackage{listings}
\usepackage{xcolor}
\usepackage{tcolorbox}
\usepackage{booktabs}
\usepackage{longtable}
\usepackage{array}
\usepackage{fancyhdr}
\usepackage{titlesec}
\usepackage{enumitem}
\usepackage{amsmath}
\usepackage{amssymb}

\geometry{margin=2.5cm}

\lstset{
    basicstyle=\ttfamily\small,
    breaklines=true,
    frame=single,
    numbers=none,
    backgroundcolor=\color{gray!10},
    keywordstyle=\color{blue},
    commentstyle=\color{green!50!black},
    stringstyle=\color{red!70!black},
    showstringspaces=false,
    tabsize=2,
    literate={ı}{{\i}}1 {İ}{{\.I}}1 {ğ}{{\u{g}}}1 {Ğ}{{\u{G}}}1 {ü}{{\"u}}1 {Ü}{{\"U}}1 {ş}{{\c{s}}}1 {Ş}{{\c{S}}}1 {ö}{{\"o}}1 {Ö}{{\"O}}1 {ç}{{\c{c}}}1 {Ç}{{\c{C}}}1
}

\newtcolorbox{ipucu}{colback=blue!5,colframe=blue!75!black,title=\.Ipucu}
\newtcolorbox{dikkat}{colback=red!5,colframe=red!75!black,title=Dikkat}
\newtcolorbox{ornekolay}{colback=green!5,colframe=green!50!black,title=\"Ornek Olay}

\title{\textbf{Yaz{\i}l{\i}m Mimarisi 3.0}\\
\large Koddan Buluta, Buluttan Otonom Ajanlara}
\author{Yazar: Fatih \c{C}a\u{g}r{\i} B\.ILGEHAN\\
Edit\"or: Dr.\"O\u{g}r.\"Uyesi \"Ozkan ASLAN}
\date{2026}

\begin{document}

\maketitle
\tableofcontents

"#;

/// Default document postamble.
pub const DEFAULT_POSTAMBLE: &str = "\n\\end{document}\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_opens_document() {
        assert!(DEFAULT_PREAMBLE.starts_with("\\documentclass"));
        assert!(DEFAULT_PREAMBLE.contains("\\begin{document}"));
        assert!(DEFAULT_PREAMBLE.contains("\\tableofcontents"));
    }

    #[test]
    fn preamble_defines_all_three_callout_boxes() {
        for env in ["ipucu", "dikkat", "ornekolay"] {
            assert!(
                DEFAULT_PREAMBLE.contains(&format!("\\newtcolorbox{{{env}}}")),
                "missing tcolorbox: {env}"
            );
        }
    }

    #[test]
    fn postamble_closes_document() {
        assert_eq!(DEFAULT_POSTAMBLE, "\n\\end{document}\n");
    }
}
