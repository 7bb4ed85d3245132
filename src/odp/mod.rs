//! OpenDocument presentation parser.
//!
//! ODP files are ZIP archives whose `content.xml` holds every slide as a
//! `draw:page` element. Flat ODP files (`.fodp`) carry the same tree in a
//! single XML document.

mod container;
mod styles;
mod tree;
mod walker;

pub use container::{is_presentation_mimetype, OdpContainer, PRESENTATION_MIMETYPES};
pub use styles::HiddenStyles;
pub use tree::{parse_tree, Element, Node, Role};
pub use walker::SlideWalker;

use crate::detect::{detect_format_from_bytes, FormatType};
use crate::error::{Error, Result};
use crate::model::{MediaRef, Presentation};
use crate::parse_options::ParseOptions;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Where the content tree comes from.
enum Source {
    Package(OdpContainer),
    #[cfg_attr(not(feature = "flat"), allow(dead_code))]
    Flat(String),
}

/// ODP document parser.
pub struct OdpParser {
    source: Source,
    source_name: String,
    options: ParseOptions,
}

impl OdpParser {
    /// Opens a presentation from a file path.
    ///
    /// The lead slide is named after the file's base name.
    pub fn open(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_bytes(data, source_name, options)
    }

    /// Opens a presentation from bytes.
    pub fn from_bytes(
        data: Vec<u8>,
        source_name: impl Into<String>,
        options: ParseOptions,
    ) -> Result<Self> {
        let source = match detect_format_from_bytes(&data)? {
            FormatType::Package => Source::Package(OdpContainer::from_bytes(data)?),
            #[cfg(feature = "flat")]
            FormatType::Flat => Source::Flat(
                String::from_utf8(data).map_err(|e| Error::InvalidData(e.to_string()))?,
            ),
            #[cfg(not(feature = "flat"))]
            FormatType::Flat => {
                return Err(Error::UnsupportedFormat(
                    "Flat ODP support requires 'flat' feature".into(),
                ))
            }
        };

        Ok(Self {
            source,
            source_name: source_name.into(),
            options,
        })
    }

    /// Returns the container format.
    pub fn format(&self) -> FormatType {
        match self.source {
            Source::Package(_) => FormatType::Package,
            Source::Flat(_) => FormatType::Flat,
        }
    }

    /// Parses the presentation into its slide sequence.
    pub fn parse(&mut self) -> Result<Presentation> {
        let root = match &mut self.source {
            Source::Package(container) => {
                let mimetype = container.mimetype();
                check_mimetype(mimetype.as_deref(), &self.options)?;
                parse_tree(&container.read_content()?)?
            }
            Source::Flat(xml) => {
                let root = parse_tree(xml)?;
                let mimetype = root
                    .first_element()
                    .and_then(|document| document.attr("office:mimetype"));
                check_mimetype(mimetype, &self.options)?;
                root
            }
        };

        Ok(transform(&root, &self.source_name, &self.options.media_dir))
    }

    /// Copies every referenced media entry to its target below `base_dir`.
    ///
    /// Entries missing from the container are logged and reported, not fatal.
    pub fn extract_media(
        &mut self,
        presentation: &Presentation,
        base_dir: impl AsRef<Path>,
    ) -> Result<ExtractReport> {
        let base_dir = base_dir.as_ref();
        let mut report = ExtractReport::default();

        for media in presentation.media() {
            let data = match &mut self.source {
                Source::Package(container) => container.read_binary(&media.source),
                Source::Flat(_) => Err(Error::ResourceNotFound(media.source.clone())),
            };

            match data {
                Ok(data) => {
                    let path = base_dir.join(&media.target);
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, data)?;
                    debug!("extracted {} -> {}", media.source, path.display());
                    report.extracted.push(path);
                }
                Err(Error::ResourceNotFound(_)) | Err(Error::ZipArchive(_)) => {
                    warn!("error finding media file {}", media.source);
                    report.missing.push(media.clone());
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "extracted {} media files ({} missing)",
            report.extracted.len(),
            report.missing.len()
        );
        Ok(report)
    }
}

/// Outcome of media extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Paths written, in document order
    pub extracted: Vec<PathBuf>,
    /// References whose source entry was not found
    pub missing: Vec<MediaRef>,
}

impl ExtractReport {
    /// Returns true if every reference was extracted.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

fn check_mimetype(mimetype: Option<&str>, options: &ParseOptions) -> Result<()> {
    match mimetype {
        Some(mimetype) if is_presentation_mimetype(mimetype) => Ok(()),
        Some(mimetype) if options.is_lenient() => {
            warn!("unexpected mimetype {}, converting anyway", mimetype);
            Ok(())
        }
        Some(mimetype) => Err(Error::UnsupportedFormat(mimetype.to_string())),
        None => {
            warn!("document does not declare a mimetype");
            Ok(())
        }
    }
}

/// Converts a parsed content tree into the ordered slide sequence.
///
/// The first slide is a synthetic level-1 slide titled `source_name`; pages
/// whose style is hidden contribute nothing.
pub fn transform(root: &Element, source_name: &str, media_dir: &Path) -> Presentation {
    let hidden = HiddenStyles::build(root);
    debug!("{} hidden page styles", hidden.len());

    let walker = SlideWalker::new(&hidden, media_dir);
    let mut presentation = Presentation::new(source_name);

    for page in root.descendants_with_role(Role::Page) {
        let slide_index = presentation.slides.len();
        if let Some(slide) = walker.walk(page, slide_index) {
            presentation.slides.push(slide);
        }
    }

    presentation
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" office:version="1.3">
  <office:automatic-styles>
    <style:style style:name="dp1" style:family="drawing-page"/>
    <style:style style:name="dp2" style:family="drawing-page">
      <style:drawing-page-properties presentation:visibility="hidden"/>
    </style:style>
  </office:automatic-styles>
  <office:body>
    <office:presentation>
      <draw:page draw:name="page1" draw:style-name="dp1">
        <draw:frame presentation:class="title"><draw:text-box><text:p>First</text:p></draw:text-box></draw:frame>
      </draw:page>
      <draw:page draw:name="page2" draw:style-name="dp2">
        <draw:frame presentation:class="title"><draw:text-box><text:p>Secret</text:p></draw:text-box></draw:frame>
      </draw:page>
      <draw:page draw:name="page3" draw:style-name="dp1">
        <draw:frame><draw:image xlink:href="Pictures/x.png"/></draw:frame>
      </draw:page>
    </office:presentation>
  </office:body>
</office:document-content>"#;

    #[test]
    fn test_transform_order_and_levels() {
        let root = parse_tree(CONTENT).unwrap();
        let presentation = transform(&root, "deck.odp", Path::new("media"));

        let titles: Vec<_> = presentation.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["deck.odp", "First", ""]);

        assert_eq!(presentation.slides[0].title_level, 1);
        assert!(presentation.slides[1..].iter().all(|s| s.title_level == 2));
    }

    #[test]
    fn test_transform_excludes_hidden_pages() {
        let root = parse_tree(CONTENT).unwrap();
        let presentation = transform(&root, "deck.odp", Path::new("media"));

        assert!(presentation
            .slides
            .iter()
            .all(|s| s.name.as_deref() != Some("page2")));
    }

    #[test]
    fn test_fallback_index_is_output_position() {
        let root = parse_tree(CONTENT).unwrap();
        let presentation = transform(&root, "deck.odp", Path::new("assets"));

        let media: Vec<_> = presentation.media().collect();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].target, PathBuf::from("assets/slide-2-image-0.png"));
    }

    #[test]
    fn test_transform_empty_document() {
        let root = parse_tree("<office:document-content/>").unwrap();
        let presentation = transform(&root, "empty.odp", Path::new("media"));
        assert_eq!(presentation.slides.len(), 1);
    }

    #[test]
    fn test_check_mimetype_modes() {
        let strict = ParseOptions::default();
        let lenient = ParseOptions::default().lenient();
        let text = "application/vnd.oasis.opendocument.text";

        assert!(check_mimetype(Some(PRESENTATION_MIMETYPES[0]), &strict).is_ok());
        assert!(matches!(
            check_mimetype(Some(text), &strict),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(check_mimetype(Some(text), &lenient).is_ok());
        assert!(check_mimetype(None, &strict).is_ok());
    }

    #[cfg(feature = "flat")]
    #[test]
    fn test_flat_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document office:mimetype="application/vnd.oasis.opendocument.presentation">
  <office:body><office:presentation>
    <draw:page draw:name="page1">
      <draw:frame presentation:class="title"><draw:text-box><text:p>Flat</text:p></draw:text-box></draw:frame>
    </draw:page>
  </office:presentation></office:body>
</office:document>"#;
        let mut parser =
            OdpParser::from_bytes(xml.as_bytes().to_vec(), "deck.fodp", ParseOptions::default())
                .unwrap();
        assert_eq!(parser.format(), FormatType::Flat);

        let presentation = parser.parse().unwrap();
        assert_eq!(presentation.slides.len(), 2);
        assert_eq!(presentation.slides[1].title, "Flat");
    }
}
