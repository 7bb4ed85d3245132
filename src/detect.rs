//! Format detection for OpenDocument presentations.

use crate::error::{Error, Result};

/// Magic bytes for ZIP archive (packaged ODP)
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// UTF-8 byte order mark, tolerated in front of flat XML documents.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Supported presentation container types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// ZIP package with `content.xml` (.odp, .otp)
    Package,
    /// Single flat XML document (.fodp)
    Flat,
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Package => write!(f, "ODP package"),
            FormatType::Flat => write!(f, "Flat ODP"),
        }
    }
}

/// Detect presentation format from bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<FormatType> {
    if data.len() < 8 {
        return Err(Error::InvalidData("Data too small".into()));
    }

    if data[..4] == ZIP_MAGIC {
        return Ok(FormatType::Package);
    }

    let body = data.strip_prefix(&UTF8_BOM[..]).unwrap_or(data);
    let first = body.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'<') {
        return Ok(FormatType::Flat);
    }

    Err(Error::UnknownFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_zip_magic() {
        let data = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00];
        assert_eq!(
            detect_format_from_bytes(&data).unwrap(),
            FormatType::Package
        );
    }

    #[test]
    fn test_detect_flat_xml() {
        let data = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><office:document>";
        assert_eq!(detect_format_from_bytes(data).unwrap(), FormatType::Flat);
    }

    #[test]
    fn test_detect_flat_xml_with_bom_and_whitespace() {
        let mut data = Vec::from(UTF8_BOM);
        data.extend_from_slice(b"\n  <office:document/>");
        assert_eq!(detect_format_from_bytes(&data).unwrap(), FormatType::Flat);
    }

    #[test]
    fn test_detect_too_short() {
        assert!(matches!(
            detect_format_from_bytes(&[0x50, 0x4B]),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_detect_unknown() {
        let data = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
        assert!(matches!(
            detect_format_from_bytes(&data),
            Err(Error::UnknownFormat)
        ));
    }
}
