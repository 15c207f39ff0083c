//! SVG export of the PDF surface
//!
//! Draws the same fixed-canvas box as [`render_pdf`](super::pdf::render_pdf)
//! as a standalone SVG document, which an external PDF pipeline can
//! rasterize or embed directly.

use crate::parser::SlideContent;
use crate::template::Template;

use super::config::{PdfConfig, SvgConfig};
use super::node::escape_xml;
use super::paint::{round3, Paint};
use super::pdf::footer_gradient;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Font settings for a text element
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub font_size: f64,
    pub bold: bool,
    pub fill: &'a str,
    pub anchor: TextAnchor,
}

fn num(v: f64) -> String {
    format!("{}", round3(v))
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    elements: Vec<String>,
    font_family: Option<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            elements: vec![],
            font_family: None,
        }
    }

    /// Set the font family applied to every text element
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(family.to_string());
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Register a paint and return the value for a `fill` attribute
    ///
    /// Gradients become `<linearGradient>` definitions named `<prefix><name>`.
    pub fn add_paint(&mut self, name: &str, paint: &Paint) -> String {
        match paint {
            Paint::Solid(color) => color.clone(),
            Paint::Linear { angle, stops } => {
                let id = format!("{}{}", self.prefix(), name);
                let (x1, y1, x2, y2) = Paint::vector(*angle);
                let nl = self.newline();
                let pad = if self.config.pretty_print { "      " } else { "" };

                let mut def = format!(
                    r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    id,
                    num(x1),
                    num(y1),
                    num(x2),
                    num(y2)
                );
                for stop in stops {
                    def.push_str(nl);
                    def.push_str(pad);
                    def.push_str(&format!(
                        r#"<stop offset="{}%" stop-color="{}"/>"#,
                        num(stop.offset),
                        escape_xml(&stop.color)
                    ));
                }
                def.push_str(nl);
                if self.config.pretty_print {
                    def.push_str("    ");
                }
                def.push_str("</linearGradient>");
                self.defs.push(def);

                format!("url(#{})", id)
            }
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, class: &str, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}{}" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            class,
            num(x),
            num(y),
            num(w),
            num(h),
            escape_xml(fill)
        ));
    }

    fn text_attrs(&self, style: &TextStyle<'_>) -> String {
        let mut attrs = format!(
            r#" text-anchor="{}" font-size="{}" fill="{}""#,
            style.anchor.as_str(),
            num(style.font_size),
            escape_xml(style.fill)
        );
        if style.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if let Some(family) = &self.font_family {
            attrs.push_str(&format!(r#" font-family="{}""#, escape_xml(family)));
        }
        attrs
    }

    /// Add a single-line text element; `y` is the baseline
    pub fn add_text(&mut self, class: &str, text: &str, x: f64, y: f64, style: &TextStyle<'_>) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            class,
            num(x),
            num(y),
            self.text_attrs(style),
            escape_xml(text)
        ));
    }

    /// Add a text element with one `<tspan>` per line
    pub fn add_multiline_text(
        &mut self,
        class: &str,
        lines: &[&str],
        x: f64,
        y: f64,
        line_height: f64,
        style: &TextStyle<'_>,
    ) {
        let prefix = self.prefix();
        let spans = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let dy = if i == 0 { 0.0 } else { line_height };
                format!(
                    r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                    num(x),
                    num(dy),
                    escape_xml(line)
                )
            })
            .collect::<String>();

        self.elements.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            class,
            num(x),
            num(y),
            self.text_attrs(style),
            spans
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(width),
            h = num(height)
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(self.indent_str());
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                if self.config.pretty_print {
                    svg.push_str("    ");
                }
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(self.indent_str());
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render slide content as an SVG page of the PDF surface
pub fn render_pdf_svg(
    content: &SlideContent,
    template: &Template,
    slide_number: usize,
    total_slides: usize,
    pdf: &PdfConfig,
    config: &SvgConfig,
) -> String {
    let style = &template.pdf_style;
    let mut builder = SvgBuilder::new(config.clone());
    builder.set_font_family(&pdf.font_family);

    let background = builder.add_paint("background", &Paint::from_css(style.background));
    let footer = builder.add_paint("footer", &Paint::from_css(&footer_gradient(style)));

    builder.add_rect("background", 0.0, 0.0, pdf.width, pdf.height, &background);
    builder.add_rect(
        "header-bar",
        0.0,
        0.0,
        pdf.width,
        pdf.header_bar_height,
        style.primary_color,
    );

    builder.add_text(
        "slide-number",
        &format!("{}/{}", slide_number, total_slides),
        pdf.slide_number_offset,
        pdf.slide_number_offset + pdf.slide_number_font_size,
        &TextStyle {
            font_size: pdf.slide_number_font_size,
            bold: true,
            fill: style.primary_color,
            anchor: TextAnchor::Start,
        },
    );

    // Title and body are stacked as one block centered on the canvas
    let title_height = pdf.title_font_size * 1.2;
    let body_line_height = pdf.body_font_size * 1.6;
    let body_lines: Vec<&str> = content
        .generic_body()
        .filter(|b| !b.is_empty())
        .map(|b| b.lines().collect())
        .unwrap_or_default();
    let body_gap = if body_lines.is_empty() { 0.0 } else { 30.0 };
    let block_height = title_height + body_gap + body_line_height * body_lines.len() as f64;
    let top = (pdf.height - block_height) / 2.0;
    let center_x = pdf.width / 2.0;

    builder.add_text(
        "title",
        content.headline(),
        center_x,
        top + pdf.title_font_size,
        &TextStyle {
            font_size: pdf.title_font_size,
            bold: true,
            fill: style.header_color,
            anchor: TextAnchor::Middle,
        },
    );

    if !body_lines.is_empty() {
        builder.add_multiline_text(
            "body",
            &body_lines,
            center_x,
            top + title_height + body_gap + pdf.body_font_size,
            body_line_height,
            &TextStyle {
                font_size: pdf.body_font_size,
                bold: false,
                fill: style.text_color,
                anchor: TextAnchor::Middle,
            },
        );
    }

    builder.add_rect(
        "footer-bar",
        0.0,
        pdf.height - pdf.footer_bar_height,
        pdf.width,
        pdf.footer_bar_height,
        &footer,
    );

    tracing::debug!(layout = %template.layout, slide_number, "rendered svg page");
    builder.build(pdf.width, pdf.height)
}
