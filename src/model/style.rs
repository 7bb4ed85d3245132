//! Inline character decorations.

use serde::Serialize;

/// Markdown decoration applied to an inline text run.
///
/// The authoring tool emits its first three automatic character styles as
/// `T1` (italic), `T2` (bold) and `T3` (underline); every other style name
/// leaves the run undecorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Decoration {
    /// Plain text
    #[default]
    None,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `<u>text</u>`
    Underline,
}

impl Decoration {
    /// Resolves a character style name.
    pub fn from_style_name(style_name: Option<&str>) -> Self {
        match style_name {
            Some("T1") => Decoration::Italic,
            Some("T2") => Decoration::Bold,
            Some("T3") => Decoration::Underline,
            _ => Decoration::None,
        }
    }

    /// Wraps a text run in this decoration.
    pub fn apply(self, text: &str) -> String {
        match self {
            Decoration::None => text.to_string(),
            Decoration::Bold => format!("**{}**", text),
            Decoration::Italic => format!("*{}*", text),
            // Markdown has no underline; raw HTML is the accepted fallback.
            Decoration::Underline => format!("<u>{}</u>", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_styles() {
        assert_eq!(Decoration::from_style_name(Some("T1")), Decoration::Italic);
        assert_eq!(Decoration::from_style_name(Some("T2")), Decoration::Bold);
        assert_eq!(Decoration::from_style_name(Some("T3")), Decoration::Underline);
    }

    #[test]
    fn test_resolve_unknown_styles() {
        assert_eq!(Decoration::from_style_name(Some("T4")), Decoration::None);
        assert_eq!(Decoration::from_style_name(Some("t2")), Decoration::None);
        assert_eq!(Decoration::from_style_name(None), Decoration::None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Decoration::Bold.apply("Hi"), "**Hi**");
        assert_eq!(Decoration::Italic.apply("so"), "*so*");
        assert_eq!(Decoration::Underline.apply("Go"), "<u>Go</u>");
        assert_eq!(Decoration::None.apply("plain"), "plain");
    }
}
