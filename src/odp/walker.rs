//! Slide tree walker.
//!
//! Converts one `draw:page` element into a [`Slide`]. The direct children of
//! a page are dispatched by role:
//!
//! - title frames append (decorated) text to the slide title
//! - outline frames append bulleted, indented list markup to the body
//! - other frames contribute media references and free text boxes
//! - custom shapes contribute their list or paragraph text
//! - speaker notes are collected separately
//!
//! Handlers receive the buffer or page context they write to; nothing is
//! shared between pages except the read-only hidden-style set.

use super::styles::HiddenStyles;
use super::tree::{Element, Node, Role};
use crate::media::media_target;
use crate::model::{Decoration, MediaRef, Slide};
use log::debug;
use std::path::Path;

/// One level of list indentation.
const INDENT: &str = "    ";

/// Depth passed to the list handler for a list container; its first list
/// level renders at depth 0.
const LIST_ROOT_DEPTH: i32 = -1;

/// Walks page elements into slides.
#[derive(Debug, Clone, Copy)]
pub struct SlideWalker<'a> {
    hidden: &'a HiddenStyles,
    media_dir: &'a Path,
}

/// Mutable state for the page being walked.
struct PageContext<'a> {
    slide: Slide,
    slide_index: usize,
    media_dir: &'a Path,
}

impl<'a> SlideWalker<'a> {
    /// Creates a walker over a document's hidden styles.
    pub fn new(hidden: &'a HiddenStyles, media_dir: &'a Path) -> Self {
        Self { hidden, media_dir }
    }

    /// Converts a page into a slide, or returns `None` for a hidden page.
    ///
    /// `slide_index` is the position the slide will take in the output
    /// sequence; it names media when the slide has no usable title.
    pub fn walk(&self, page: &Element, slide_index: usize) -> Option<Slide> {
        let name = page.attr("draw:name").map(str::to_string);

        if self.hidden.hides(page) {
            debug!("skipping hidden page {:?}", name);
            return None;
        }

        let mut ctx = PageContext {
            slide: Slide::new(),
            slide_index,
            media_dir: self.media_dir,
        };
        ctx.slide.name = name;

        for item in page.elements() {
            match item.role {
                Role::Title => title(&mut ctx.slide.title, item),
                Role::Outline => {
                    for child in item.elements() {
                        list_children(&mut ctx.slide.text, child, LIST_ROOT_DEPTH);
                    }
                }
                Role::Frame => frame(&mut ctx, item),
                Role::CustomShape => custom_shape(&mut ctx.slide.text, item),
                Role::Notes => notes(&mut ctx.slide.notes, item),
                _ => {}
            }
        }

        let mut slide = ctx.slide;
        if slide.finalize() {
            debug!("promoted body text to title on page {:?}", slide.name);
        }
        Some(slide)
    }
}

/// Appends the text of a title subtree. Spans are decorated, text is copied
/// verbatim and any other element is descended into.
fn title(buf: &mut String, node: &Element) {
    for child in &node.children {
        match child {
            Node::Text(text) => buf.push_str(text),
            Node::Element(span) if span.role == Role::Span => {
                if let Some(text) = decorated(span) {
                    buf.push_str(&text);
                }
            }
            Node::Element(e) => title(buf, e),
        }
    }
}

/// Handles the children of a list container at the given depth.
fn list_children(buf: &mut String, parent: &Element, depth: i32) {
    for child in parent.elements() {
        match child.role {
            Role::List => list(buf, child, depth),
            Role::ListItem => {
                buf.push('\n');
                buf.push_str(&indent(depth));
                buf.push_str("- ");
                list_children(buf, child, depth);
            }
            Role::ListHeader => list_children(buf, child, depth),
            Role::Paragraph => paragraph(buf, child),
            _ => {}
        }
    }
}

/// Handles a `text:list`: its items render one level deeper.
fn list(buf: &mut String, node: &Element, depth: i32) {
    buf.push_str(&indent(depth));
    list_children(buf, node, depth + 1);
}

fn indent(depth: i32) -> String {
    INDENT.repeat(depth.max(0) as usize)
}

/// Appends the inline runs of a paragraph, separating runs by one space.
fn paragraph(buf: &mut String, node: &Element) {
    for child in &node.children {
        match child {
            Node::Text(text) => push_fragment(buf, text),
            Node::Element(e) => match e.role {
                Role::Span => {
                    if let Some(text) = decorated(e) {
                        push_fragment(buf, &text);
                    }
                }
                Role::Paragraph => paragraph(buf, e),
                _ => {}
            },
        }
    }
}

/// Returns the span's text wrapped in the decoration of its character style.
fn decorated(span: &Element) -> Option<String> {
    let text = span.first_text()?;
    let decoration = Decoration::from_style_name(span.attr("text:style-name"));
    Some(decoration.apply(text))
}

/// Appends a run, separated from the previous one by a single space.
///
/// The first run in an empty buffer gets no space, so a body never starts
/// with one. Whitespace already at the seam is not doubled.
fn push_fragment(buf: &mut String, fragment: &str) {
    if fragment.is_empty() {
        return;
    }
    if !buf.is_empty() && !ends_with_whitespace(buf) && !starts_with_whitespace(fragment) {
        buf.push(' ');
    }
    buf.push_str(fragment);
}

fn ends_with_whitespace(s: &str) -> bool {
    s.chars().next_back().is_some_and(char::is_whitespace)
}

fn starts_with_whitespace(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_whitespace)
}

/// Handles a plain `draw:frame`: pictures, plugins and free text boxes.
fn frame(ctx: &mut PageContext, node: &Element) {
    for child in node.elements() {
        match child.role {
            Role::Image => image(ctx, child),
            Role::TextBox => text_box(&mut ctx.slide.text, child),
            _ => {}
        }
    }
}

/// Records a media reference named after the slide's current title.
fn image(ctx: &mut PageContext, node: &Element) {
    for (key, href) in &node.attributes {
        if key != "xlink:href" {
            continue;
        }
        let target = media_target(
            ctx.media_dir,
            &ctx.slide.title,
            ctx.slide.media.len(),
            ctx.slide_index,
            href,
        );
        debug!("media {} -> {}", href, target.display());
        ctx.slide.media.push(MediaRef::new(href.clone(), target));
    }
}

fn text_box(buf: &mut String, node: &Element) {
    for child in node.elements() {
        match child.role {
            Role::Paragraph => paragraph(buf, child),
            Role::List => list(buf, child, LIST_ROOT_DEPTH),
            _ => {}
        }
    }
}

fn custom_shape(buf: &mut String, shape: &Element) {
    match shape.first_element() {
        Some(first) if first.role == Role::List => list_children(buf, shape, LIST_ROOT_DEPTH),
        Some(first) if first.role == Role::TextBox => text_box(buf, first),
        _ => paragraph(buf, shape),
    }
}

/// Collects speaker notes, one line per paragraph or list block.
fn notes(buf: &mut String, node: &Element) {
    for text_box in node.descendants_with_role(Role::TextBox) {
        for child in text_box.elements() {
            let mut line = String::new();
            match child.role {
                Role::Paragraph => paragraph(&mut line, child),
                Role::List => list(&mut line, child, LIST_ROOT_DEPTH),
                _ => continue,
            }
            let line = line.trim_start_matches('\n');
            if line.trim().is_empty() {
                continue;
            }
            if !buf.is_empty() {
                buf.push('\n');
            }
            buf.push_str(line);
        }
    }
}
