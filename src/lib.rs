//! Carousel Slides - render generated text as styled social-media slide decks
//!
//! This library provides a template catalog, a per-layout content parser, and
//! two renderers (web preview and PDF export) over the same parsed content.
//!
//! # Example
//!
//! ```rust
//! use carousel_slides::{find_template, render_slide, Surface};
//!
//! let template = find_template("quote-slide").unwrap();
//! let node = render_slide("Ship it\nGrace\nEngineer", template, 1, 3, Surface::Web);
//! assert!(node.to_html().contains("Ship it"));
//! assert!(node.text_content().contains("1/3"));
//! ```

pub mod config;
pub mod deck;
pub mod error;
pub mod generation;
pub mod parser;
pub mod renderer;
pub mod template;

pub use config::{DeckConfig, RenderConfig};
pub use deck::{split_slides, Deck, RenderedSlide};
pub use error::{ConfigError, DeckError};
pub use generation::{CarouselSession, GenerationError, GenerationRequest, TextGenerator};
pub use parser::{parse, SlideContent};
pub use renderer::{render, render_pdf_svg, PdfConfig, RenderNode, Surface, SvgConfig};
pub use template::{find_template, list_templates, preview_style_token, LayoutKind, Template};

/// Parse one raw slide block and render it with default configuration
///
/// # Example
///
/// ```rust
/// use carousel_slides::{find_template, render_slide, Surface};
///
/// let template = find_template("big-number").unwrap();
/// let node = render_slide("Reach\nUp 250% since launch", template, 2, 5, Surface::Pdf);
/// let root = node.as_element().unwrap();
/// assert_eq!(root.style_value("width"), Some("800px"));
/// ```
pub fn render_slide(
    raw: &str,
    template: &Template,
    slide_number: usize,
    total_slides: usize,
    surface: Surface,
) -> RenderNode {
    let content = parse(raw, &template.layout, slide_number);
    render(&content, template, slide_number, total_slides, surface)
}

/// Render a whole deck of generated text
///
/// # Example
///
/// ```rust
/// use carousel_slides::{find_template, render_deck, RenderConfig, Surface};
///
/// let template = find_template("timeline").unwrap();
/// let deck = render_deck(
///     "Plan\nResearch\nBuild\n---\nLaunch\nShip it",
///     template,
///     Surface::Web,
///     &RenderConfig::default(),
/// );
/// assert_eq!(deck.len(), 2);
/// ```
pub fn render_deck(
    text: &str,
    template: &'static Template,
    surface: Surface,
    config: &RenderConfig,
) -> Deck {
    Deck::render(text, template, surface, config)
}
