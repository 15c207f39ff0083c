//! Configuration for PDF and SVG output

use serde::Deserialize;

/// Geometry and typography of the fixed PDF canvas
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PdfConfig {
    /// Canvas width in logical units
    pub width: f64,
    /// Canvas height in logical units
    pub height: f64,
    /// Inner padding of the canvas
    pub padding: f64,
    pub font_family: String,
    /// Height of the solid bar along the top edge
    pub header_bar_height: f64,
    /// Height of the gradient bar along the bottom edge
    pub footer_bar_height: f64,
    pub title_font_size: f64,
    pub body_font_size: f64,
    /// Widest the centered title/body block may be
    pub max_content_width: f64,
    /// Distance of the slide-number label from the top-left corner
    pub slide_number_offset: f64,
    pub slide_number_font_size: f64,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 60.0,
            font_family: "Arial, sans-serif".to_string(),
            header_bar_height: 8.0,
            footer_bar_height: 4.0,
            title_font_size: 36.0,
            body_font_size: 18.0,
            max_content_width: 600.0,
            slide_number_offset: 30.0,
            slide_number_font_size: 14.0,
        }
    }
}

impl PdfConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the canvas padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the title and body font sizes
    pub fn with_font_sizes(mut self, title: f64, body: f64) -> Self {
        self.title_font_size = title;
        self.body_font_size = body;
        self
    }
}

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "cs-" for "cs-title")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("cs-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pdf_canvas() {
        let config = PdfConfig::default();
        assert_eq!((config.width, config.height), (800.0, 600.0));
        assert_eq!(config.header_bar_height, 8.0);
        assert_eq!(config.footer_bar_height, 4.0);
        assert_eq!(config.font_family, "Arial, sans-serif");
    }

    #[test]
    fn test_pdf_builder_pattern() {
        let config = PdfConfig::new()
            .with_size(1080.0, 1080.0)
            .with_padding(40.0)
            .with_font_family("Inter")
            .with_font_sizes(48.0, 20.0);
        assert_eq!(config.width, 1080.0);
        assert_eq!(config.padding, 40.0);
        assert_eq!(config.font_family, "Inter");
        assert_eq!(config.title_font_size, 48.0);
        assert_eq!(config.body_font_size, 20.0);
    }

    #[test]
    fn test_default_svg_config() {
        let config = SvgConfig::default();
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("cs-".to_string()));
    }

    #[test]
    fn test_svg_builder_pattern() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("my-");

        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("my-".to_string()));
        assert_eq!(config.without_class_prefix().class_prefix, None);
    }
}
