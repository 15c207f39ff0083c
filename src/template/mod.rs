//! Template catalog
//!
//! A template pairs a [`LayoutKind`] with the styling each render surface
//! needs: a class-token string for the web preview and a [`PdfStyle`] color
//! record for PDF export. The catalog is a fixed table; callers pick from it
//! by id.
//!
//! # Example
//!
//! ```rust
//! use carousel_slides::template::{find_template, list_templates, LayoutKind};
//!
//! assert_eq!(list_templates().len(), 10);
//! let quote = find_template("quote-slide").unwrap();
//! assert_eq!(quote.layout, LayoutKind::QuoteSlide);
//! ```

mod layout;
mod registry;

pub use layout::LayoutKind;
pub use registry::{
    default_template, find_template, list_templates, preview_style_token, PdfStyle, Template,
    DEFAULT_PREVIEW_TOKEN,
};
