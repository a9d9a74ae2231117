//! Error types for the wordparser library.

use std::io;
use thiserror::Error;

/// Result type alias for wordparser operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations (including a missing input path).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a readable ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// A requested archive member does not exist.
    #[error("Missing part: {0}")]
    MissingPart(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// An image was requested but the document has no media.
    #[error("Document contains no images")]
    NoImages,

    /// Error serializing extracted content.
    #[error("JSON serialization error: {0}")]
    Json(String),
}

impl Error {
    /// Whether this error means something the caller asked for does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Error::MissingPart(_) => true,
            _ => false,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::ZipArchive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoImages;
        assert_eq!(err.to_string(), "Document contains no images");

        let err = Error::MissingPart("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing part: word/document.xml");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_zip_io_error_stays_io() {
        let zip_err = zip::result::ZipError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err: Error = zip_err.into();
        assert!(err.is_not_found());

        let err: Error = zip::result::ZipError::InvalidArchive("bad".into()).into();
        assert!(matches!(err, Error::ZipArchive(_)));
        assert!(!err.is_not_found());
    }
}
