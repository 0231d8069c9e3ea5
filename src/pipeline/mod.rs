//! Pipeline stages for text-to-LaTeX conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! adjust one rule set without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! raw text ──▶ strip ──▶ classify ──▶ assembled LaTeX
//!  (UTF-8)   (page markers)  (18-rule state machine)
//! ```
//!
//! 1. [`strip`]    — remove the `--- Sayfa N ---` page-boundary markers the
//!    extraction stage inserted
//! 2. [`escape`]   — LaTeX special-character substitution table; defined for
//!    every literal emission path but off by default (see
//!    [`crate::config::ConversionConfig::escape_literal_text`])
//! 3. [`classify`] — the core: per-line priority rules with cross-line
//!    code-buffer state, emitting one LaTeX fragment per line

pub mod classify;
pub mod escape;
pub mod strip;
