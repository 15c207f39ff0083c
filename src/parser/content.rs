//! Layout-specific slide content

use serde::Serialize;

use crate::template::LayoutKind;

use super::lexer::find_number;
use super::lines::SlideText;

/// Most steps a timeline slide can hold
pub const MAX_TIMELINE_STEPS: usize = 4;

/// Number shown on a big-number slide whose body has none
pub const DEFAULT_BIG_NUMBER: &str = "100";

/// Structured content of one slide, shaped by its layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SlideContent {
    Bullets {
        title: String,
        bullets: Vec<String>,
    },
    Columns {
        title: String,
        left_column: String,
        right_column: String,
    },
    BigNumber {
        title: String,
        number: String,
        description: String,
    },
    Quote {
        quote: String,
        author: String,
        context: String,
    },
    Timeline {
        title: String,
        steps: Vec<String>,
    },
    Comparison {
        title: String,
        left_side: String,
        right_side: String,
    },
    /// Title plus free-form body, used by every layout without its own shape
    Generic { title: String, content: String },
}

impl SlideContent {
    /// The slide's main line: the title, or the quote text on quote slides
    pub fn headline(&self) -> &str {
        match self {
            SlideContent::Bullets { title, .. }
            | SlideContent::Columns { title, .. }
            | SlideContent::BigNumber { title, .. }
            | SlideContent::Timeline { title, .. }
            | SlideContent::Comparison { title, .. }
            | SlideContent::Generic { title, .. } => title,
            SlideContent::Quote { quote, .. } => quote,
        }
    }

    /// Free-form body text, only present on generic content
    pub fn generic_body(&self) -> Option<&str> {
        match self {
            SlideContent::Generic { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// Parse a raw slide block into content for `layout`
///
/// `slide_number` is 1-based and only used for the placeholder title of a
/// block with no text. Never fails: every field has a fallback.
pub fn parse(raw: &str, layout: &LayoutKind, slide_number: usize) -> SlideContent {
    let text = SlideText::split(raw);
    let title = text.title_or_placeholder(slide_number);

    let content = match layout {
        LayoutKind::BulletPoints => SlideContent::Bullets {
            title,
            bullets: owned(text.body_lines()),
        },
        LayoutKind::TwoColumn => SlideContent::Columns {
            title,
            left_column: text.paragraph(0).unwrap_or_default(),
            right_column: text.paragraphs_from(1),
        },
        LayoutKind::BigNumber => {
            let body = text.body();
            match find_number(&body) {
                Some(span) => {
                    let number = body[span.clone()].to_string();
                    let mut description = String::with_capacity(body.len());
                    description.push_str(&body[..span.start]);
                    description.push_str(&body[span.end..]);
                    SlideContent::BigNumber {
                        title,
                        number,
                        description: description.trim().to_string(),
                    }
                }
                None => SlideContent::BigNumber {
                    title,
                    number: DEFAULT_BIG_NUMBER.to_string(),
                    description: body.trim().to_string(),
                },
            }
        }
        LayoutKind::QuoteSlide => {
            let lines = text.body_lines();
            SlideContent::Quote {
                quote: title,
                author: lines.first().map(|l| l.to_string()).unwrap_or_default(),
                context: lines.iter().skip(1).copied().collect::<Vec<_>>().join(" "),
            }
        }
        LayoutKind::Timeline => SlideContent::Timeline {
            title,
            steps: text
                .body_lines()
                .iter()
                .take(MAX_TIMELINE_STEPS)
                .map(|l| l.to_string())
                .collect(),
        },
        LayoutKind::Comparison => {
            let body = text.body();
            let (left_side, right_side) = if body.contains("vs") {
                let mut pieces = body.split("vs").map(str::trim);
                (
                    pieces.next().unwrap_or_default().to_string(),
                    pieces.next().unwrap_or_default().to_string(),
                )
            } else {
                (
                    text.paragraph(0).unwrap_or_default().trim().to_string(),
                    text.paragraph(1).unwrap_or_default().trim().to_string(),
                )
            };
            SlideContent::Comparison {
                title,
                left_side,
                right_side,
            }
        }
        LayoutKind::TitleSlide
        | LayoutKind::ImageText
        | LayoutKind::CallToAction
        | LayoutKind::MinimalText => SlideContent::Generic {
            title,
            content: text.body(),
        },
        LayoutKind::Unknown(name) => {
            tracing::debug!(layout = %name, "unrecognized layout, using title/body content");
            SlideContent::Generic {
                title,
                content: text.body(),
            }
        }
    };

    tracing::debug!(layout = %layout, slide_number, "parsed slide");
    content
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
