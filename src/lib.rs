//! # wordparser
//!
//! Plain text, tables, core properties and embedded images from Word
//! (`.docx`) documents.
//!
//! A `.docx` file is a ZIP archive of XML parts. [`DocumentReader`] opens
//! the archive, parses parts into an element tree on demand and walks it to
//! produce plain values.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordparser::{DocumentReader, ImageSelector};
//!
//! let reader = DocumentReader::open("report.docx")?;
//!
//! // Paragraph text, one line per non-empty paragraph
//! println!("{}", reader.get_text()?);
//!
//! // Tables as rows of cell strings
//! for table in reader.get_tables()? {
//!     for row in table {
//!         println!("{}", row.join(" | "));
//!     }
//! }
//!
//! // Metadata
//! if let Some(title) = reader.get_core_properties()?.get("title") {
//!     println!("Title: {}", title);
//! }
//!
//! // Images
//! if !reader.list_images().is_empty() {
//!     let bytes = reader.read_image(Some(ImageSelector::by_index(0)))?;
//!     std::fs::write("image", bytes)?;
//! }
//!
//! reader.close();
//! # Ok::<(), wordparser::Error>(())
//! ```

pub mod container;
pub mod docx;
pub mod error;
pub mod json;
pub mod model;
pub mod namespaces;
pub mod xml;

// Re-exports
pub use container::OoxmlContainer;
pub use docx::{CoreProperty, DocumentReader, ImageSelector, Tables};
pub use error::{Error, Result};
pub use json::{to_json, JsonFormat};
pub use model::{CoreProperties, DocumentSummary, Row, Table};
pub use xml::XmlElement;

use std::path::Path;

/// Extract the paragraph text of a document.
///
/// # Example
///
/// ```no_run
/// let text = wordparser::extract_text("document.docx")?;
/// println!("{}", text);
/// # Ok::<(), wordparser::Error>(())
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    DocumentReader::open(path)?.get_text()
}

/// Extract every table of a document.
pub fn extract_tables(path: impl AsRef<Path>) -> Result<Vec<Table>> {
    DocumentReader::open(path)?.get_tables()
}

/// Extract the core properties of a document.
pub fn extract_core_properties(path: impl AsRef<Path>) -> Result<CoreProperties> {
    DocumentReader::open(path)?.get_core_properties()
}
