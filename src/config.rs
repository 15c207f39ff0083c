//! Render configuration, loadable from TOML
//!
//! Every field is optional in the file; anything left out keeps its default.
//!
//! ```toml
//! [pdf]
//! width = 1080
//! height = 1080
//! font_family = "Inter, sans-serif"
//!
//! [svg]
//! pretty_print = false
//!
//! [deck]
//! slide_delimiter = "==="
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::renderer::{PdfConfig, SvgConfig};

/// Line that separates slides in deck text unless configured otherwise
pub const DEFAULT_SLIDE_DELIMITER: &str = "---";

/// How generated deck text is split into slides
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// A line consisting only of this string (after trimming) ends a slide
    pub slide_delimiter: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            slide_delimiter: DEFAULT_SLIDE_DELIMITER.to_string(),
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// PDF canvas geometry and typography
    pub pdf: PdfConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Deck splitting
    pub deck: DeckConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = toml::from_str(content)?;
        tracing::debug!(
            width = config.pdf.width,
            height = config.pdf.height,
            delimiter = %config.deck.slide_delimiter,
            "loaded render config"
        );
        Ok(config)
    }

    /// Set the PDF configuration
    pub fn with_pdf(mut self, config: PdfConfig) -> Self {
        self.pdf = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the slide delimiter
    pub fn with_slide_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.deck.slide_delimiter = delimiter.into();
        self
    }
}
