//! Markdown rendering for presentations.

mod markdown;
mod options;

pub use markdown::{dedent, MarkdownRenderer};
pub use options::RenderOptions;

use crate::error::Result;
use crate::model::Presentation;
use std::io::Write;
use std::path::Path;

/// Renders a presentation to Markdown.
pub fn render_markdown(presentation: &Presentation, options: &RenderOptions) -> String {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(presentation)
}

/// Renders a presentation to Markdown and writes to a file.
pub fn render_to_file(
    presentation: &Presentation,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<()> {
    let content = render_markdown(presentation, options);
    std::fs::write(path, content)?;
    Ok(())
}

/// Renders a presentation to Markdown and writes to a writer.
pub fn render_to_writer<W: Write>(
    presentation: &Presentation,
    writer: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    let content = render_markdown(presentation, options);
    writer.write_all(content.as_bytes())?;
    Ok(())
}
