//! Slide renderers
//!
//! One parsed [`SlideContent`] can be drawn on two surfaces: the web preview
//! ([`web::render_web`]) and PDF export ([`pdf::render_pdf`]). Both return a
//! [`RenderNode`] tree; [`svg::render_pdf_svg`] additionally writes the PDF
//! surface as an SVG page.

pub mod config;
pub mod node;
pub mod paint;
pub mod pdf;
pub mod svg;
pub mod web;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parser::SlideContent;
use crate::template::Template;

pub use config::{PdfConfig, SvgConfig};
pub use node::{Element, RenderNode};
pub use pdf::render_pdf;
pub use svg::render_pdf_svg;
pub use web::render_web;

/// Output target of a render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Interactive preview styled with class tokens
    Web,
    /// Fixed-canvas export styled inline
    Pdf,
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Surface::Web),
            "pdf" => Ok(Surface::Pdf),
            other => Err(format!("unknown surface '{}' (expected web or pdf)", other)),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Surface::Web => "web",
            Surface::Pdf => "pdf",
        })
    }
}

/// Render parsed content on `surface` with the default PDF canvas
pub fn render(
    content: &SlideContent,
    template: &Template,
    slide_number: usize,
    total_slides: usize,
    surface: Surface,
) -> RenderNode {
    render_with_config(
        content,
        template,
        slide_number,
        total_slides,
        surface,
        &PdfConfig::default(),
    )
}

/// Render parsed content on `surface`
pub fn render_with_config(
    content: &SlideContent,
    template: &Template,
    slide_number: usize,
    total_slides: usize,
    surface: Surface,
    pdf: &PdfConfig,
) -> RenderNode {
    match surface {
        Surface::Web => render_web(content, template, slide_number, total_slides),
        Surface::Pdf => render_pdf(content, template, slide_number, total_slides, pdf),
    }
}
