//! Configuration types for text-to-LaTeX conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share a config between the CLI and library callers and to
//! diff two runs to understand why their outputs differ.

use crate::error::Txt2TexError;
use serde::{Deserialize, Serialize};

/// Configuration for a text-to-LaTeX conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use txt2tex::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .escape_literal_text(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Apply the LaTeX special-character escaper to literal (non-code)
    /// emission paths. Default: `false`.
    ///
    /// The reference behaviour defines the escaper but never calls it on
    /// paragraph, table, or quote output, so special characters pass through
    /// raw. The default preserves that observed behaviour; enable this flag
    /// to escape `& % $ # _ { } ~ ^` on every text-carrying path instead.
    pub escape_literal_text: bool,

    /// Strip `--- Sayfa N ---` page markers before classification. Default: `true`.
    ///
    /// Disable only when feeding text that was not produced by the
    /// [`crate::extract`] stage and happens to contain the marker literally.
    pub strip_page_markers: bool,

    /// Custom LaTeX preamble. If `None`, uses the built-in
    /// [`crate::preamble::DEFAULT_PREAMBLE`].
    pub preamble: Option<String>,

    /// Custom LaTeX postamble. If `None`, uses the built-in
    /// [`crate::preamble::DEFAULT_POSTAMBLE`].
    pub postamble: Option<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            escape_literal_text: false,
            strip_page_markers: true,
            preamble: None,
            postamble: None,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn escape_literal_text(mut self, v: bool) -> Self {
        self.config.escape_literal_text = v;
        self
    }

    pub fn strip_page_markers(mut self, v: bool) -> Self {
        self.config.strip_page_markers = v;
        self
    }

    pub fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.config.preamble = Some(preamble.into());
        self
    }

    pub fn postamble(mut self, postamble: impl Into<String>) -> Self {
        self.config.postamble = Some(postamble.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Txt2TexError> {
        if let Some(ref p) = self.config.preamble {
            if p.trim().is_empty() {
                return Err(Txt2TexError::InvalidConfig(
                    "custom preamble must not be empty; omit it to use the built-in".into(),
                ));
            }
        }
        Ok(self.config)
    }
}
