//! Word (`.docx`) document reading.
//!
//! [`DocumentReader`] is the entry point; the submodules hold the tree
//! walks it is built from.

pub mod images;
pub mod properties;
mod reader;
pub mod text;

pub use images::ImageSelector;
pub use properties::CoreProperty;
pub use reader::{DocumentReader, Tables};

/// Main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Core properties part.
pub const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// Prefix of embedded media members.
pub const MEDIA_PREFIX: &str = "word/media/";
