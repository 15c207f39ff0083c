//! Error types for configuration loading and deck output

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur when loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl ConfigError {
    /// Source span of the offending TOML, if known
    pub fn span(&self) -> Option<Span> {
        match self {
            ConfigError::ParseError(e) => e.span(),
            ConfigError::IoError(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (ConfigError::ParseError(err), Some(span)) = (self, self.span()) else {
            return self.to_string();
        };

        let message = err.message().trim().to_string();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid render configuration")
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Errors from assembling or writing a rendered deck
#[derive(Error, Debug)]
pub enum DeckError {
    /// No built-in template has this id
    #[error("unknown template '{id}' (available: {available})")]
    UnknownTemplate { id: String, available: String },

    /// SVG pages can only be produced from the PDF surface
    #[error("SVG output requires the pdf surface")]
    SvgRequiresPdfSurface,

    /// Serializing the render tree failed
    #[error("failed to serialize deck: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DeckError {
    /// Create an unknown template error listing the valid ids
    pub fn unknown_template(id: impl Into<String>) -> Self {
        let available = crate::template::list_templates()
            .iter()
            .map(|t| t.id)
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownTemplate {
            id: id.into(),
            available,
        }
    }
}
