//! Whole-deck rendering
//!
//! Generated carousel text holds every slide in one blob, separated by a
//! delimiter line. A [`Deck`] is that blob parsed and rendered slide by slide
//! with a single template.

use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::DeckError;
use crate::parser::{parse, SlideContent};
use crate::renderer::{render_pdf_svg, render_with_config, RenderNode, Surface};
use crate::template::Template;

/// Split deck text into raw slide blocks
///
/// A line whose trimmed text equals `delimiter` ends a block. Empty blocks at
/// the start and end are dropped; empty blocks in between are kept so slide
/// numbering stays aligned with the source.
pub fn split_slides<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let delimiter = delimiter.trim();
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_end = offset + line.len();
        if !delimiter.is_empty() && line.trim() == delimiter {
            blocks.push(&text[start..offset]);
            start = line_end;
        }
        offset = line_end;
    }
    blocks.push(&text[start..]);

    let is_empty = |b: &&str| b.trim().is_empty();
    let first = blocks.iter().position(|b| !is_empty(b));
    let last = blocks.iter().rposition(|b| !is_empty(b));
    match (first, last) {
        (Some(first), Some(last)) => blocks[first..=last].to_vec(),
        _ => Vec::new(),
    }
}

/// One rendered slide of a deck
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSlide {
    /// 1-based position in the deck
    pub number: usize,
    pub content: SlideContent,
    pub node: RenderNode,
}

/// A rendered carousel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub template: &'static Template,
    pub surface: Surface,
    pub slides: Vec<RenderedSlide>,
}

impl Deck {
    /// Parse and render every slide block of `text`
    pub fn render(
        text: &str,
        template: &'static Template,
        surface: Surface,
        config: &RenderConfig,
    ) -> Self {
        let blocks = split_slides(text, &config.deck.slide_delimiter);
        Self::from_blocks(&blocks, template, surface, config)
    }

    /// Render already split slide blocks
    pub fn from_blocks(
        blocks: &[&str],
        template: &'static Template,
        surface: Surface,
        config: &RenderConfig,
    ) -> Self {
        let total = blocks.len();
        let slides = blocks
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let number = i + 1;
                let content = parse(raw, &template.layout, number);
                let node =
                    render_with_config(&content, template, number, total, surface, &config.pdf);
                RenderedSlide {
                    number,
                    content,
                    node,
                }
            })
            .collect();

        tracing::info!(template = template.id, %surface, slides = total, "rendered deck");
        Self {
            template,
            surface,
            slides,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// All slides as one HTML document fragment, one slide per line
    pub fn to_html(&self) -> String {
        self.slides
            .iter()
            .map(|s| s.node.to_html())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The deck as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, DeckError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One SVG page per slide; only available for the PDF surface
    pub fn to_svg_pages(&self, config: &RenderConfig) -> Result<Vec<String>, DeckError> {
        if self.surface != Surface::Pdf {
            return Err(DeckError::SvgRequiresPdfSurface);
        }
        let total = self.slides.len();
        Ok(self
            .slides
            .iter()
            .map(|s| {
                render_pdf_svg(
                    &s.content,
                    self.template,
                    s.number,
                    total,
                    &config.pdf,
                    &config.svg,
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::template::find_template;

    #[test]
    fn test_split_on_delimiter_lines() {
        let text = "One\nbody\n---\nTwo\n  ---  \nThree";
        assert_eq!(
            split_slides(text, "---"),
            vec!["One\nbody\n", "Two\n", "Three"]
        );
    }

    #[test]
    fn test_split_drops_outer_empty_blocks_only() {
        let text = "---\n\n---\nA\n---\n\n---\nB\n---\n";
        let blocks = split_slides(text, "---");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "A\n");
        assert_eq!(blocks[1].trim(), "");
        assert_eq!(blocks[2], "B\n");
    }

    #[test]
    fn test_split_inline_delimiter_is_text() {
        let blocks = split_slides("a --- b\nc", "---");
        assert_eq!(blocks, vec!["a --- b\nc"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_slides("", "---").is_empty());
        assert!(split_slides("\n---\n  \n", "---").is_empty());
    }

    #[test]
    fn test_deck_numbers_slides_from_one() {
        let template = find_template("bullet-points").unwrap();
        let deck = Deck::render(
            "Intro\na\n---\nMiddle\nb\n---\nEnd\nc",
            template,
            Surface::Web,
            &RenderConfig::default(),
        );
        assert_eq!(deck.len(), 3);
        let numbers: Vec<_> = deck.slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(deck.slides[2].node.text_content().contains("3/3"));
    }

    #[test]
    fn test_interior_empty_block_gets_placeholder_title() {
        let template = find_template("title-slide").unwrap();
        let deck = Deck::render(
            "First\n---\n\n---\nThird",
            template,
            Surface::Pdf,
            &RenderConfig::default(),
        );
        assert_eq!(deck.slides[1].content.headline(), "Slide 2");
    }

    #[test]
    fn test_custom_delimiter() {
        let template = find_template("timeline").unwrap();
        let config = RenderConfig::new().with_slide_delimiter("===");
        let deck = Deck::render("A\n===\nB\n---\nstill B", template, Surface::Web, &config);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_svg_pages_require_pdf_surface() {
        let template = find_template("quote-slide").unwrap();
        let config = RenderConfig::default();
        let web = Deck::render("Q\nA", template, Surface::Web, &config);
        assert!(matches!(
            web.to_svg_pages(&config),
            Err(DeckError::SvgRequiresPdfSurface)
        ));

        let pdf = Deck::render("Q\nA\n---\nQ2", template, Surface::Pdf, &config);
        let pages = pdf.to_svg_pages(&config).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[1].contains(">2/2</text>"));
    }

    #[test]
    fn test_json_output() {
        let template = find_template("big-number").unwrap();
        let deck = Deck::render(
            "Growth\n42% more",
            template,
            Surface::Web,
            &RenderConfig::default(),
        );
        let json: serde_json::Value = serde_json::from_str(&deck.to_json().unwrap()).unwrap();
        assert_eq!(json["template"]["id"], "big-number");
        assert_eq!(json["surface"], "web");
        assert_eq!(json["slides"][0]["content"]["kind"], "big-number");
        assert_eq!(json["slides"][0]["content"]["number"], "42%");
    }

    #[test]
    fn test_html_has_one_line_per_slide() {
        let template = find_template("minimal-text").unwrap();
        let deck = Deck::render("A\n---\nB", template, Surface::Pdf, &RenderConfig::default());
        assert_eq!(deck.to_html().lines().count(), 2);
    }
}
