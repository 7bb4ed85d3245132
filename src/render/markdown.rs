//! Markdown renderer implementation.

use super::RenderOptions;
use crate::model::{Presentation, Slide};

/// Markdown renderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders a presentation; every slide is followed by a blank line.
    pub fn render(&self, presentation: &Presentation) -> String {
        let mut output = String::new();
        for slide in &presentation.slides {
            output.push_str(&self.render_slide(slide));
            output.push('\n');
        }
        output
    }

    /// Renders one slide: heading, body, media references and notes.
    pub fn render_slide(&self, slide: &Slide) -> String {
        let mut output = format!(
            "{} {}\n\n{}\n",
            "#".repeat(slide.title_level as usize),
            slide.title,
            dedent(&slide.text)
        );

        for media in &slide.media {
            let target = media.target.display();
            if self.options.video_blocks && media.is_video() {
                output.push_str(&format!("`![]({})`{{=html}}\n", target));
            } else {
                output.push_str(&format!("![]({})\n", target));
            }
        }

        if self.options.include_notes && !slide.notes.is_empty() {
            output.push_str(&format!("\n::: notes\n\n{}\n\n:::\n", slide.notes));
        }

        output
    }
}

/// Removes the leading whitespace common to every non-blank line.
///
/// Lines made only of spaces and tabs are emptied and do not count towards
/// the common margin.
pub fn dedent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or("");

    text.split('\n')
        .map(|line| if is_blank(line) { "" } else { &line[margin.len()..] })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim_matches([' ', '\t']).is_empty()
}

fn leading_whitespace(line: &str) -> &str {
    let content = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - content.len()]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
