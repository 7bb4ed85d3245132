//! Slide model (Intermediate Representation).
//!
//! This module defines the slide records produced by the transformation
//! engine and consumed by the renderer and the media extractor.

mod document;
mod slide;
mod style;

pub use document::*;
pub use slide::*;
pub use style::*;
