//! ZIP container wrapper for ODP documents.

use crate::error::{Error, Result};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// ODP container paths.
mod paths {
    pub const MIMETYPE: &str = "mimetype";
    pub const CONTENT_XML: &str = "content.xml";
}

/// Mimetypes accepted as presentations.
pub const PRESENTATION_MIMETYPES: &[&str] = &[
    "application/vnd.oasis.opendocument.presentation",
    "application/vnd.oasis.opendocument.presentation-template",
];

/// ZIP container wrapper for ODP files.
pub struct OdpContainer {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl OdpContainer {
    /// Opens an ODP container from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let archive = ZipArchive::new(cursor)?;
        Ok(Self { archive })
    }

    /// Returns the declared mimetype, if the package has one.
    pub fn mimetype(&mut self) -> Option<String> {
        self.read_file(paths::MIMETYPE)
            .ok()
            .map(|content| content.trim().to_string())
    }

    /// Reads a file from the archive as UTF-8 string.
    pub fn read_file(&mut self, path: &str) -> Result<String> {
        let mut file = self
            .archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    /// Reads a binary file from the archive.
    pub fn read_binary(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(path)
            .map_err(|_| Error::ResourceNotFound(path.to_string()))?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Reads the content.xml entry.
    pub fn read_content(&mut self) -> Result<String> {
        self.read_file(paths::CONTENT_XML)
    }
}

/// Returns true if the mimetype names a presentation or presentation template.
pub fn is_presentation_mimetype(mimetype: &str) -> bool {
    PRESENTATION_MIMETYPES.contains(&mimetype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn package(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();
        for (name, data) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_read_entries() {
        let data = package(&[
            ("mimetype", PRESENTATION_MIMETYPES[0].as_bytes()),
            ("content.xml", b"<office:document-content/>"),
            ("Pictures/a.png", &[0x89, 0x50, 0x4E, 0x47]),
        ]);
        let mut container = OdpContainer::from_bytes(data).unwrap();

        assert_eq!(container.mimetype().as_deref(), Some(PRESENTATION_MIMETYPES[0]));
        assert_eq!(container.read_content().unwrap(), "<office:document-content/>");
        assert_eq!(
            container.read_binary("Pictures/a.png").unwrap(),
            vec![0x89, 0x50, 0x4E, 0x47]
        );
    }

    #[test]
    fn test_missing_entries() {
        let data = package(&[("mimetype", b"application/vnd.oasis.opendocument.text")]);
        let mut container = OdpContainer::from_bytes(data).unwrap();

        assert!(matches!(
            container.read_content(),
            Err(Error::MissingComponent(_))
        ));
        assert!(matches!(
            container.read_binary("Pictures/none.png"),
            Err(Error::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_not_a_zip() {
        let result = OdpContainer::from_bytes(b"definitely not a zip archive".to_vec());
        assert!(matches!(result, Err(Error::ZipArchive(_))));
    }

    #[test]
    fn test_presentation_mimetypes() {
        assert!(is_presentation_mimetype(
            "application/vnd.oasis.opendocument.presentation"
        ));
        assert!(is_presentation_mimetype(
            "application/vnd.oasis.opendocument.presentation-template"
        ));
        assert!(!is_presentation_mimetype(
            "application/vnd.oasis.opendocument.text"
        ));
    }
}
