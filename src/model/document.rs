//! Presentation structure.

use super::{MediaRef, Slide};
use serde::Serialize;

/// A converted presentation: the ordered slide sequence.
///
/// Index 0 is always the synthetic lead slide named after the source file;
/// the remaining slides follow source page order with hidden pages removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Presentation {
    /// Base name of the source file
    pub source_name: String,
    /// Ordered slides, lead slide first
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Creates a presentation holding only the lead slide.
    pub fn new(source_name: impl Into<String>) -> Self {
        let source_name = source_name.into();
        Self {
            slides: vec![Slide::lead(source_name.clone())],
            source_name,
        }
    }

    /// Returns the slides that came from source pages.
    pub fn content_slides(&self) -> &[Slide] {
        self.slides.get(1..).unwrap_or_default()
    }

    /// Returns an iterator over every media reference in document order.
    pub fn media(&self) -> impl Iterator<Item = &MediaRef> {
        self.slides.iter().flat_map(|s| s.media.iter())
    }

    /// Returns the number of media references.
    pub fn media_count(&self) -> usize {
        self.media().count()
    }

    /// Returns the slide sequence as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_presentation_has_lead_slide() {
        let presentation = Presentation::new("deck.odp");
        assert_eq!(presentation.slides.len(), 1);
        assert_eq!(presentation.slides[0].title, "deck.odp");
        assert!(presentation.slides[0].is_lead());
        assert!(presentation.content_slides().is_empty());
    }

    #[test]
    fn test_media_iterates_in_slide_order() {
        let mut presentation = Presentation::new("deck.odp");
        let mut first = Slide::new();
        first.media.push(MediaRef::new("Pictures/1.png", "media/a-0.png"));
        let mut second = Slide::new();
        second.media.push(MediaRef::new("Pictures/2.png", "media/b-0.png"));
        second.media.push(MediaRef::new("Pictures/3.png", "media/b-1.png"));
        presentation.slides.push(first);
        presentation.slides.push(second);

        let sources: Vec<_> = presentation.media().map(|m| m.source.as_str()).collect();
        assert_eq!(sources, ["Pictures/1.png", "Pictures/2.png", "Pictures/3.png"]);
        assert_eq!(presentation.media_count(), 3);
    }

    #[test]
    fn test_to_json_contains_fields() {
        let presentation = Presentation::new("deck.odp");
        let json = presentation.to_json();
        assert!(json.contains("\"source_name\": \"deck.odp\""));
        assert!(json.contains("\"title_level\": 1"));
    }
}
