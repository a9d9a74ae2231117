//! Plain values returned by the document accessors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cell texts of one table row, left to right.
pub type Row = Vec<String>;

/// Rows of one table, top to bottom.
pub type Table = Vec<Row>;

/// Core property key (`title`, `lastModifiedBy`, ...) to value.
pub type CoreProperties = BTreeMap<String, String>;

/// Overview of a document, as shown by `wordparser info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Number of archive members
    pub members: usize,

    /// Paragraphs with text, at any depth
    pub paragraphs: usize,

    /// Tables, nested ones included
    pub tables: usize,

    /// Members under `word/media/`
    pub images: usize,

    /// Words in the extracted text
    pub words: usize,

    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}
