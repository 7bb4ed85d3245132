//! Error types for odp2md library.

use std::io;
use thiserror::Error;

/// Result type alias for odp2md operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for odp2md library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The file is an OpenDocument file, but not a presentation.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// ZIP archive parsing error.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// XML parsing error in content.xml.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Required archive entry is missing.
    #[error("Missing required component: {0}")]
    MissingComponent(String),

    /// Referenced media entry not found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}
