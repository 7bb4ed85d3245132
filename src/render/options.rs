//! Rendering options for Markdown output.

/// Options for Markdown rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Whether video references are emitted as raw HTML blocks.
    ///
    /// Pandoc dropped its native video syntax, so videos are wrapped as
    /// `` `![](clip.mp4)`{=html} `` when this is set.
    pub video_blocks: bool,

    /// Whether speaker notes are emitted as `::: notes` divs.
    pub include_notes: bool,
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw HTML fallback for video references.
    pub fn with_video_blocks(mut self, enabled: bool) -> Self {
        self.video_blocks = enabled;
        self
    }

    /// Enables speaker notes output.
    pub fn with_notes(mut self) -> Self {
        self.include_notes = true;
        self
    }
}
