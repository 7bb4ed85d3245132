//! # odp2md
//!
//! Converts OpenDocument presentations (ODP) into Markdown with extracted
//! media, in the shape pandoc expects for slide decks.
//!
//! Every visible slide becomes a level-2 heading followed by its outline as
//! nested bullets; pictures and videos are renamed after their slide and
//! referenced from the Markdown. A level-1 heading named after the source
//! file leads the document. Hidden slides are never emitted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use odp2md::{parse_file, RenderOptions};
//!
//! fn main() -> odp2md::Result<()> {
//!     let presentation = parse_file("talk.odp")?;
//!
//!     let markdown = odp2md::render::render_markdown(&presentation, &RenderOptions::default());
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `flat` (default): Flat XML presentation (`.fodp`) support

pub mod detect;
pub mod error;
pub mod media;
pub mod model;
pub mod odp;
pub mod parse_options;
pub mod render;

// Re-exports
pub use detect::{detect_format_from_bytes, FormatType};
pub use error::{Error, Result};
pub use model::{Decoration, MediaRef, Presentation, Slide};
pub use odp::{ExtractReport, OdpParser};
pub use parse_options::{ErrorMode, ParseOptions};
pub use render::RenderOptions;

use std::path::{Path, PathBuf};

/// Parses a presentation from a file path with default options.
///
/// # Example
///
/// ```no_run
/// use odp2md::parse_file;
///
/// let presentation = parse_file("talk.odp")?;
/// println!("Slides: {}", presentation.content_slides().len());
/// # Ok::<(), odp2md::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Presentation> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Parses a presentation from a file path with custom options.
pub fn parse_file_with_options(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Presentation> {
    let mut parser = OdpParser::open(path, options.clone())?;
    parser.parse()
}

/// Parses a presentation from bytes.
///
/// `source_name` titles the lead slide.
pub fn parse_bytes(data: &[u8], source_name: &str) -> Result<Presentation> {
    let mut parser = OdpParser::from_bytes(data.to_vec(), source_name, ParseOptions::default())?;
    parser.parse()
}

/// Converts a presentation to Markdown with default options.
///
/// # Example
///
/// ```no_run
/// use odp2md::to_markdown;
///
/// let markdown = to_markdown("talk.odp")?;
/// std::fs::write("talk.md", markdown)?;
/// # Ok::<(), odp2md::Error>(())
/// ```
pub fn to_markdown(path: impl AsRef<Path>) -> Result<String> {
    let presentation = parse_file(path)?;
    Ok(render::render_markdown(
        &presentation,
        &RenderOptions::default(),
    ))
}

/// Builder for parsing and rendering presentations.
///
/// # Example
///
/// ```no_run
/// use odp2md::Odp2Md;
///
/// let mut parsed = Odp2Md::new()
///     .with_media_dir("assets")
///     .with_video_blocks(true)
///     .parse("talk.odp")?;
///
/// let markdown = parsed.to_markdown();
/// parsed.extract_media(".")?;
/// # Ok::<(), odp2md::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Odp2Md {
    render_options: RenderOptions,
    parse_options: ParseOptions,
}

impl Odp2Md {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory media references are rewritten into.
    pub fn with_media_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.parse_options = self.parse_options.with_media_dir(dir);
        self
    }

    /// Emits video references as raw HTML blocks.
    pub fn with_video_blocks(mut self, enabled: bool) -> Self {
        self.render_options = self.render_options.with_video_blocks(enabled);
        self
    }

    /// Includes speaker notes in the Markdown.
    pub fn with_notes(mut self) -> Self {
        self.render_options = self.render_options.with_notes();
        self
    }

    /// Accepts documents that do not declare a presentation mimetype.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Parses a presentation from a file path.
    pub fn parse(self, path: impl AsRef<Path>) -> Result<ParsedPresentation> {
        let parser = OdpParser::open(path, self.parse_options)?;
        ParsedPresentation::new(parser, self.render_options)
    }

    /// Parses a presentation from bytes.
    pub fn parse_bytes(self, data: Vec<u8>, source_name: &str) -> Result<ParsedPresentation> {
        let parser = OdpParser::from_bytes(data, source_name, self.parse_options)?;
        ParsedPresentation::new(parser, self.render_options)
    }
}

/// A parsed presentation ready for rendering and media extraction.
pub struct ParsedPresentation {
    parser: OdpParser,
    presentation: Presentation,
    render_options: RenderOptions,
}

impl ParsedPresentation {
    fn new(mut parser: OdpParser, render_options: RenderOptions) -> Result<Self> {
        let presentation = parser.parse()?;
        Ok(Self {
            parser,
            presentation,
            render_options,
        })
    }

    /// Returns a reference to the slide sequence.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Returns the container format.
    pub fn format(&self) -> FormatType {
        self.parser.format()
    }

    /// Renders the presentation to Markdown.
    pub fn to_markdown(&self) -> String {
        render::render_markdown(&self.presentation, &self.render_options)
    }

    /// Returns the slide sequence as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        self.presentation.to_json()
    }

    /// Writes every referenced media file to its target below `base_dir`.
    pub fn extract_media(&mut self, base_dir: impl AsRef<Path>) -> Result<ExtractReport> {
        self.parser.extract_media(&self.presentation, base_dir)
    }

    /// Consumes self and returns the slide sequence.
    pub fn into_presentation(self) -> Presentation {
        self.presentation
    }
}
