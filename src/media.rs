//! Media reference naming.
//!
//! Referenced pictures and videos are renamed after the slide they appear on,
//! so an extracted `media/` directory reads like the deck itself.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of a media slug (without extension).
pub const MAX_SLUG_LENGTH: usize = 128;

/// Extensions rendered as video references.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "mov", "avi", "ogv", "m4v"];

static RE_INVALID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Converts a title into a lower-case, ASCII, hyphen-separated slug.
///
/// Accented letters keep their base letter; anything else outside
/// `[a-z0-9_-]` is dropped. The result may be empty.
pub fn slugify(value: &str) -> String {
    let ascii: String = value.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let cleaned = RE_INVALID.replace_all(&lowered, "");
    let hyphenated = RE_SEPARATORS.replace_all(cleaned.trim(), "-");
    hyphenated
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}

/// Derives the output path for a media reference.
///
/// `media_count` is the number of references already recorded on the slide,
/// which keeps targets within one slide distinct. `slide_index` names the
/// fallback slug when the title has no usable characters.
pub fn media_target(
    media_dir: &Path,
    slide_title: &str,
    media_count: usize,
    slide_index: usize,
    original: &str,
) -> PathBuf {
    let extension = extension_of(original);

    let mut slug = slugify(slide_title);
    if slug.is_empty() {
        slug = format!("slide-{}-image", slide_index);
    }
    slug.push_str(&format!("-{}", media_count));
    // The slug is pure ASCII, so byte truncation stays on a char boundary.
    slug.truncate(MAX_SLUG_LENGTH);

    media_dir.join(format!("{}{}", slug, extension))
}

/// Returns the lower-cased extension of an archive path, with its dot.
fn extension_of(original: &str) -> String {
    Path::new(original)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Returns true if the path has a known video extension.
pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
}
