//! Document reader over a `.docx` package.

use super::images::ImageSelector;
use super::properties::core_properties;
use super::text::{self, TABLE};
use super::{CORE_PROPERTIES_PART, DOCUMENT_PART, MEDIA_PREFIX};
use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use crate::model::{CoreProperties, DocumentSummary, Table};
use crate::xml::XmlElement;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Reader for Word (`.docx`) documents.
///
/// Every accessor reads and parses the part it needs on each call, so
/// repeated calls always see the package as stored and never share
/// traversal state. The reader owns the archive; dropping it (or calling
/// [`DocumentReader::close`]) releases the underlying file.
///
/// # Example
///
/// ```no_run
/// use wordparser::DocumentReader;
///
/// let reader = DocumentReader::open("report.docx")?;
/// println!("{}", reader.get_text()?);
/// for table in reader.iter_tables()? {
///     println!("{} rows", table.len());
/// }
/// # Ok::<(), wordparser::Error>(())
/// ```
pub struct DocumentReader<R = BufReader<File>> {
    container: OoxmlContainer<R>,
}

impl DocumentReader {
    /// Open a document from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            container: OoxmlContainer::open(path)?,
        })
    }
}

impl DocumentReader<Cursor<Vec<u8>>> {
    /// Create a reader over an in-memory document.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            container: OoxmlContainer::from_bytes(data)?,
        })
    }
}

impl<R: Read + Seek> DocumentReader<R> {
    /// Create a reader over any seekable source.
    pub fn from_reader(reader: R) -> Result<Self> {
        Ok(Self {
            container: OoxmlContainer::from_reader(reader)?,
        })
    }

    /// All archive members, in archive order.
    pub fn list_files(&self) -> Vec<String> {
        self.container.list_files()
    }

    /// Whether the archive has a member with this exact name.
    pub fn exists(&self, name: &str) -> bool {
        self.container.exists(name)
    }

    /// Parse an archive member into an element tree.
    pub fn read_part_as_tree(&self, name: &str) -> Result<XmlElement> {
        self.container.read_tree(name)
    }

    /// Text of every non-empty paragraph, joined with `\n`.
    ///
    /// Paragraphs inside tables, text boxes and other containers are
    /// included in document order.
    pub fn get_text(&self) -> Result<String> {
        let root = self.read_part_as_tree(DOCUMENT_PART)?;
        Ok(text::element_full_text(&root))
    }

    /// Lazily yield each table in document order.
    ///
    /// The main part is parsed up front; each table's rows are built when
    /// the iterator reaches it.
    pub fn iter_tables(&self) -> Result<Tables> {
        let root = self.read_part_as_tree(DOCUMENT_PART)?;
        Ok(Tables::new(root))
    }

    /// All tables in document order.
    pub fn get_tables(&self) -> Result<Vec<Table>> {
        Ok(self.iter_tables()?.collect())
    }

    /// Core properties from `docProps/core.xml`.
    ///
    /// A package without the core part yields an empty mapping.
    pub fn get_core_properties(&self) -> Result<CoreProperties> {
        if !self.container.exists(CORE_PROPERTIES_PART) {
            log::debug!("{} not present", CORE_PROPERTIES_PART);
            return Ok(CoreProperties::new());
        }
        let root = self.read_part_as_tree(CORE_PROPERTIES_PART)?;
        Ok(core_properties(&root))
    }

    /// Members under `word/media/`, in archive order.
    pub fn list_images(&self) -> Vec<String> {
        self.container.list_files_with_prefix(MEDIA_PREFIX)
    }

    /// Raw bytes of one image.
    ///
    /// `None` reads the first image. See [`ImageSelector`] for how a name
    /// and index are resolved. Fails with [`Error::NoImages`] only when the
    /// document has no media at all.
    pub fn read_image(&self, selector: Option<ImageSelector<'_>>) -> Result<Vec<u8>> {
        let images = self.list_images();
        let target = selector
            .unwrap_or_default()
            .resolve(&images)
            .ok_or(Error::NoImages)?;
        self.container.read_binary(target)
    }

    /// Counts and headline metadata for the document.
    pub fn summary(&self) -> Result<DocumentSummary> {
        let root = self.read_part_as_tree(DOCUMENT_PART)?;
        let mut properties = self.get_core_properties()?;
        let text = text::element_full_text(&root);

        Ok(DocumentSummary {
            members: self.container.len(),
            paragraphs: text::paragraph_texts(&root).count(),
            tables: root.find_all(TABLE).count(),
            images: self.list_images().len(),
            words: text.split_whitespace().count(),
            title: properties.remove("title"),
            creator: properties.remove("creator"),
        })
    }

    /// Release the archive and the file behind it.
    pub fn close(self) {
        drop(self.container.into_inner());
    }
}

impl<R: Read + Seek> std::fmt::Debug for DocumentReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentReader")
            .field("container", &self.container)
            .finish()
    }
}

/// Lazy iterator over the tables of a parsed main part.
///
/// Owns its tree, so it stays valid after the reader that produced it is
/// closed.
#[derive(Debug, Clone)]
pub struct Tables {
    root: XmlElement,
    paths: std::vec::IntoIter<Vec<usize>>,
}

impl Tables {
    fn new(root: XmlElement) -> Self {
        let paths = root.paths_to(TABLE).into_iter();
        Self { root, paths }
    }
}

impl Iterator for Tables {
    type Item = Table;

    fn next(&mut self) -> Option<Table> {
        loop {
            let path = self.paths.next()?;
            if let Some(table) = self.root.at_path(&path) {
                let rows = text::table_rows(table);
                log::trace!("table at {:?}: {} rows", path, rows.len());
                return Some(rows);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}
