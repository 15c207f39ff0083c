//! Boundary to the text-generation service
//!
//! The service behind the two generation endpoints is external; this module
//! only models its requests, its failure modes, and the session state a
//! client keeps while generating and re-styling carousels.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RenderConfig;
use crate::deck::Deck;
use crate::renderer::Surface;
use crate::template::{default_template, Template};

/// A request to one of the two generation endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GenerationRequest {
    /// A single block of short-form text
    ShortText { topic: String, tone: String },
    /// Text for a whole carousel, one block per slide
    Carousel {
        topic: String,
        tone: String,
        slide_count: usize,
    },
}

impl GenerationRequest {
    /// Path of the endpoint serving this request
    pub fn endpoint(&self) -> &'static str {
        match self {
            GenerationRequest::ShortText { .. } => "/short-text",
            GenerationRequest::Carousel { .. } => "/carousel",
        }
    }

    pub fn topic(&self) -> &str {
        match self {
            GenerationRequest::ShortText { topic, .. }
            | GenerationRequest::Carousel { topic, .. } => topic,
        }
    }

    /// Slides the caller asked for, if the request is for a carousel
    pub fn slide_count(&self) -> Option<usize> {
        match self {
            GenerationRequest::Carousel { slide_count, .. } => Some(*slide_count),
            GenerationRequest::ShortText { .. } => None,
        }
    }
}

/// Why a generation call produced no usable text
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service reported an error (network, quota, ...)
    #[error("generation failed: {message}")]
    Failed { message: String },

    /// The service did not answer in time
    #[error("generation timed out after {}s", .after.as_secs())]
    Timeout { after: Duration },

    /// The service answered with nothing but whitespace
    #[error("generation returned no content")]
    EmptyResponse,
}

impl GenerationError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// The external text generator: request in, raw text out
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&GenerationRequest) -> Result<String, GenerationError>,
{
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self(request)
    }
}

/// Client-side state of a carousel being generated and styled
///
/// Holds the raw text of the last successful generation so the deck can be
/// re-rendered when the template or surface changes. A failed generation
/// leaves the previous deck in place.
#[derive(Debug, Clone)]
pub struct CarouselSession {
    template: &'static Template,
    surface: Surface,
    config: RenderConfig,
    raw_text: Option<String>,
    /// Whether `raw_text` is one slide regardless of delimiter lines
    single_slide: bool,
    deck: Option<Deck>,
}

impl CarouselSession {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            template: default_template(),
            surface: Surface::Web,
            config,
            raw_text: None,
            single_slide: false,
            deck: None,
        }
    }

    pub fn template(&self) -> &'static Template {
        self.template
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// The most recently rendered deck
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// Raw text of the last successful generation
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    /// Switch template, re-rendering the current deck if there is one
    pub fn select_template(&mut self, template: &'static Template) {
        self.template = template;
        self.rerender();
    }

    /// Switch surface, re-rendering the current deck if there is one
    pub fn select_surface(&mut self, surface: Surface) {
        self.surface = surface;
        self.rerender();
    }

    /// Call the generator and render its output as the new deck
    ///
    /// On error the previous deck and text are kept.
    pub fn generate(
        &mut self,
        generator: &dyn TextGenerator,
        request: &GenerationRequest,
    ) -> Result<&Deck, GenerationError> {
        tracing::debug!(
            endpoint = request.endpoint(),
            topic = request.topic(),
            "requesting generation"
        );

        let text = match generator.generate(request) {
            Ok(text) if text.trim().is_empty() => Err(GenerationError::EmptyResponse),
            other => other,
        }
        .inspect_err(|e| {
            tracing::warn!(endpoint = request.endpoint(), error = %e, "generation failed");
        })?;

        let single_slide = matches!(request, GenerationRequest::ShortText { .. });
        let deck = self.build_deck(&text, single_slide);

        if let Some(expected) = request.slide_count() {
            if deck.len() != expected {
                tracing::warn!(expected, actual = deck.len(), "slide count differs from request");
            }
        }

        self.raw_text = Some(text);
        self.single_slide = single_slide;
        Ok(&*self.deck.insert(deck))
    }

    fn build_deck(&self, text: &str, single_slide: bool) -> Deck {
        if single_slide {
            Deck::from_blocks(&[text], self.template, self.surface, &self.config)
        } else {
            Deck::render(text, self.template, self.surface, &self.config)
        }
    }

    fn rerender(&mut self) {
        if let Some(text) = &self.raw_text {
            self.deck = Some(self.build_deck(text, self.single_slide));
        }
    }
}
