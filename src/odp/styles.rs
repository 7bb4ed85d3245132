//! Page visibility from style definitions.
//!
//! Hidden slides are not marked on the page itself: the page references a
//! drawing-page style whose properties carry `presentation:visibility="hidden"`.

use super::tree::{Element, Role};
use std::collections::HashSet;

/// Set of style names whose pages must not be emitted.
#[derive(Debug, Clone, Default)]
pub struct HiddenStyles {
    names: HashSet<String>,
}

impl HiddenStyles {
    /// Scans every style definition below `root`.
    pub fn build(root: &Element) -> Self {
        Self::from_definitions(root.descendants_with_role(Role::StyleDefinition))
    }

    /// Collects the hidden styles among the given style definitions.
    ///
    /// Only direct children of each definition are inspected. Definitions
    /// without a `style:name` are skipped.
    pub fn from_definitions<'a>(definitions: impl IntoIterator<Item = &'a Element>) -> Self {
        let mut names = HashSet::new();

        for style in definitions {
            let Some(name) = style.attr("style:name") else {
                continue;
            };
            let hidden = style
                .elements()
                .any(|props| props.attr("presentation:visibility") == Some("hidden"));
            if hidden {
                names.insert(name.to_string());
            }
        }

        Self { names }
    }

    /// Returns true if the style hides its pages.
    pub fn contains(&self, style_name: &str) -> bool {
        self.names.contains(style_name)
    }

    /// Returns true if the page references a hidden style.
    pub fn hides(&self, page: &Element) -> bool {
        page.attr("draw:style-name")
            .is_some_and(|style_name| self.contains(style_name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
