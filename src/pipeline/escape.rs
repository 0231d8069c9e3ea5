//! LaTeX special-character escaping for literal (non-code) text.
//!
//! A deterministic, order-sensitive substitution table: each entry is applied
//! exactly once, in a fixed order, over the result of the prior
//! substitutions in the same pass. Backslash itself is intentionally NOT in
//! the table, so literal LaTeX commands embedded in source text pass through
//! unescaped. That is a documented limitation of the reference behaviour,
//! not a bug to fix silently: escaping `\` would also mangle every command
//! the substitutions themselves introduce.
//!
//! Note the order consequence: tilde and caret are replaced *after* the
//! brace entries, so the `{}` their replacements introduce stay raw — which
//! is exactly what LaTeX needs.
//!
//! The escaper is defined for every literal emission path but is **not
//! invoked** on most of them unless
//! [`crate::config::ConversionConfig::escape_literal_text`] is set; the
//! observed reference output leaves special characters raw, and that
//! behaviour is preserved as explicit configuration.

/// The substitution table, in application order.
const ESCAPES: [(&str, &str); 9] = [
    ("&", r"\&"),
    ("%", r"\%"),
    ("$", r"\$"),
    ("#", r"\#"),
    ("_", r"\_"),
    ("{", r"\{"),
    ("}", r"\}"),
    ("~", r"\textasciitilde{}"),
    ("^", r"\textasciicircum{}"),
];

/// Escape LaTeX special characters in `text` for literal emission.
pub fn escape_latex(text: &str) -> String {
    let mut out = text.to_string();
    for (raw, replacement) in ESCAPES {
        out = out.replace(raw, replacement);
    }
    out
}
