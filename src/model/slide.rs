//! Slide records and media references.

use serde::Serialize;
use std::path::PathBuf;

/// Heading level of the synthetic lead slide.
pub const LEAD_TITLE_LEVEL: u8 = 1;

/// Heading level of every content slide.
pub const CONTENT_TITLE_LEVEL: u8 = 2;

/// One emitted unit of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    /// Slide title, built from the title frame (or promoted from the body)
    pub title: String,
    /// Markdown heading depth
    pub title_level: u8,
    /// Body text with inline decorations and list markup
    pub text: String,
    /// Speaker notes
    pub notes: String,
    /// Media references in document order
    pub media: Vec<MediaRef>,
    /// Source page name (`draw:name`)
    pub name: Option<String>,
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

impl Slide {
    /// Creates an empty content slide.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            title_level: CONTENT_TITLE_LEVEL,
            text: String::new(),
            notes: String::new(),
            media: Vec::new(),
            name: None,
        }
    }

    /// Creates the synthetic level-1 slide that leads the document.
    pub fn lead(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_level: LEAD_TITLE_LEVEL,
            ..Self::new()
        }
    }

    /// Returns true for the synthetic lead slide.
    pub fn is_lead(&self) -> bool {
        self.title_level == LEAD_TITLE_LEVEL
    }

    /// Promotes the body to the title when a slide has neither a title nor media.
    ///
    /// Returns true if the promotion happened. The body is cleared afterwards.
    pub fn finalize(&mut self) -> bool {
        if self.title.is_empty() && !self.text.trim().is_empty() && self.media.is_empty() {
            self.title = std::mem::take(&mut self.text).trim().to_string();
            return true;
        }
        false
    }
}

/// A media asset referenced from a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaRef {
    /// Entry path inside the source container (`xlink:href`)
    pub source: String,
    /// Desired output path, relative to the working directory
    pub target: PathBuf,
}

impl MediaRef {
    /// Creates a new media reference.
    pub fn new(source: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns true if the target names a video file.
    pub fn is_video(&self) -> bool {
        crate::media::is_video_path(&self.target)
    }
}
