//! Slide content parser
//!
//! Turns a raw block of generated text into a [`SlideContent`] record whose
//! shape depends on the template's layout.

mod content;
pub mod lexer;
mod lines;

pub use content::{parse, SlideContent, DEFAULT_BIG_NUMBER, MAX_TIMELINE_STEPS};
pub use lines::SlideText;
