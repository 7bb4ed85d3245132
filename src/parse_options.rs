//! Parsing options for presentation conversion.

use std::path::PathBuf;

/// Default directory, relative to the working directory, for extracted media.
pub const DEFAULT_MEDIA_DIR: &str = "media";

/// Options for controlling presentation parsing behavior.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Relative root for derived media paths.
    pub media_dir: PathBuf,

    /// How to handle a container that does not declare itself a presentation.
    pub error_mode: ErrorMode,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from(DEFAULT_MEDIA_DIR),
            error_mode: ErrorMode::Strict,
        }
    }
}

impl ParseOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory that media references are rewritten into.
    pub fn with_media_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.media_dir = dir.into();
        self
    }

    /// Sets lenient error handling (warn on unexpected mimetype).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Sets strict error handling (reject non-presentation documents).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Returns true if errors should be ignored where possible.
    pub fn is_lenient(&self) -> bool {
        matches!(self.error_mode, ErrorMode::Lenient)
    }
}

/// How to handle recoverable format errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail immediately.
    #[default]
    Strict,
    /// Log a warning and keep converting.
    Lenient,
}
