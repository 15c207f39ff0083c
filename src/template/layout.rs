//! Layout discriminator shared by the parser and both renderers

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// The arrangement a template applies to a slide
///
/// Layout strings that are not one of the ten known kinds are kept as
/// `Unknown` so that they degrade to the default title/body shape instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    TitleSlide,
    TwoColumn,
    BulletPoints,
    QuoteSlide,
    ImageText,
    BigNumber,
    Timeline,
    Comparison,
    CallToAction,
    MinimalText,
    Unknown(String),
}

impl LayoutKind {
    /// All recognized layouts, in catalog order
    pub const KNOWN: [LayoutKind; 10] = [
        LayoutKind::TitleSlide,
        LayoutKind::TwoColumn,
        LayoutKind::BulletPoints,
        LayoutKind::QuoteSlide,
        LayoutKind::ImageText,
        LayoutKind::BigNumber,
        LayoutKind::Timeline,
        LayoutKind::Comparison,
        LayoutKind::CallToAction,
        LayoutKind::MinimalText,
    ];

    /// Parse a layout string. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "title-slide" => LayoutKind::TitleSlide,
            "two-column" => LayoutKind::TwoColumn,
            "bullet-points" => LayoutKind::BulletPoints,
            "quote-slide" => LayoutKind::QuoteSlide,
            "image-text" => LayoutKind::ImageText,
            "big-number" => LayoutKind::BigNumber,
            "timeline" => LayoutKind::Timeline,
            "comparison" => LayoutKind::Comparison,
            "call-to-action" => LayoutKind::CallToAction,
            "minimal-text" => LayoutKind::MinimalText,
            other => LayoutKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LayoutKind::TitleSlide => "title-slide",
            LayoutKind::TwoColumn => "two-column",
            LayoutKind::BulletPoints => "bullet-points",
            LayoutKind::QuoteSlide => "quote-slide",
            LayoutKind::ImageText => "image-text",
            LayoutKind::BigNumber => "big-number",
            LayoutKind::Timeline => "timeline",
            LayoutKind::Comparison => "comparison",
            LayoutKind::CallToAction => "call-to-action",
            LayoutKind::MinimalText => "minimal-text",
            LayoutKind::Unknown(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, LayoutKind::Unknown(_))
    }
}

impl FromStr for LayoutKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LayoutKind::parse(s))
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for LayoutKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
