//! ZIP container abstraction for Word packages.

use crate::error::{Error, Result};
use crate::xml::XmlElement;
use std::borrow::Cow;
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Upper bound on the buffer reserved from a member's declared size.
const PREALLOC_LIMIT: u64 = 64 * 1024 * 1024;

/// An open package archive.
///
/// Members are read on demand through `&self`; nothing is cached between
/// reads. The archive (and the file it was opened from) is released when
/// the container is dropped or [`OoxmlContainer::into_inner`] is called.
pub struct OoxmlContainer<R = BufReader<File>> {
    archive: RefCell<zip::ZipArchive<R>>,
}

impl OoxmlContainer {
    /// Open a package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wordparser::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("document.docx")?;
    /// println!("{} members", container.list_files().len());
    /// # Ok::<(), wordparser::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("opened archive {}", path.display());
        Self::from_reader(BufReader::new(file))
    }
}

impl OoxmlContainer<Cursor<Vec<u8>>> {
    /// Create a container over an in-memory archive.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }
}

impl<R: Read + Seek> OoxmlContainer<R> {
    /// Create a container over any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// List all members, in archive directory order.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// List members whose names start with `prefix`, in archive order.
    pub fn list_files_with_prefix(&self, prefix: &str) -> Vec<String> {
        let archive = self.archive.borrow();
        archive
            .file_names()
            .filter(|n| n.starts_with(prefix))
            .map(String::from)
            .collect()
    }

    /// Check if a member exists.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// Read a member's raw bytes.
    ///
    /// The size declared in the archive only sizes the initial buffer (up
    /// to a fixed cap) and must match what was actually read.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive.by_name(path).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => Error::MissingPart(path.to_string()),
            other => Error::from(other),
        })?;
        let declared = file.size();
        let mut data = Vec::with_capacity(declared.min(PREALLOC_LIMIT) as usize);
        file.read_to_end(&mut data)?;
        if data.len() as u64 != declared {
            return Err(Error::ZipArchive(format!(
                "{}: declared {} bytes but contains {}",
                path,
                declared,
                data.len()
            )));
        }
        Ok(data)
    }

    /// Read a member as text, decoding UTF-8 or UTF-16 content.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        Ok(decode_xml_bytes(&bytes)?.into_owned())
    }

    /// Read a member and parse it into an element tree.
    pub fn read_tree(&self, path: &str) -> Result<XmlElement> {
        let xml = self.read_xml(path)?;
        log::debug!("parsing {} ({} bytes)", path, xml.len());
        XmlElement::parse(&xml).map_err(|e| match e {
            Error::XmlParse(msg) => Error::XmlParse(format!("{}: {}", path, msg)),
            other => other,
        })
    }

    /// Number of members in the archive.
    pub fn len(&self) -> usize {
        self.archive.borrow().len()
    }

    /// Whether the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release the archive and hand back the underlying reader.
    pub fn into_inner(self) -> R {
        self.archive.into_inner().into_inner()
    }
}

impl<R: Read + Seek> std::fmt::Debug for OoxmlContainer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.len())
            .finish()
    }
}

/// Decode XML bytes as UTF-8 (with or without BOM) or UTF-16 LE/BE.
///
/// UTF-16 is recognized by its BOM, or by the null-byte layout of an ASCII
/// `<` at the start of the document. Invalid UTF-8 without any UTF-16 sign
/// is decoded lossily.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<Cow<'_, str>> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => std::str::from_utf8(rest)
            .map(Cow::Borrowed)
            .map_err(|e| Error::XmlParse(format!("invalid UTF-8: {}", e))),
        [0xFF, 0xFE, rest @ ..] => Ok(Cow::Owned(utf16_as_utf8_declared(decode_utf16(
            rest,
            u16::from_le_bytes,
        )?))),
        [0xFE, 0xFF, rest @ ..] => Ok(Cow::Owned(utf16_as_utf8_declared(decode_utf16(
            rest,
            u16::from_be_bytes,
        )?))),
        _ => match std::str::from_utf8(bytes) {
            Ok(s) => Ok(Cow::Borrowed(s)),
            Err(_) => match bytes {
                [_, 0, _, 0, ..] => Ok(Cow::Owned(utf16_as_utf8_declared(decode_utf16(
                    bytes,
                    u16::from_le_bytes,
                )?))),
                [0, _, 0, _, ..] => Ok(Cow::Owned(utf16_as_utf8_declared(decode_utf16(
                    bytes,
                    u16::from_be_bytes,
                )?))),
                _ => Ok(String::from_utf8_lossy(bytes)),
            },
        },
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::XmlParse(format!("invalid UTF-16: {}", e)))
}

/// Once decoded, the declaration must no longer claim UTF-16.
fn utf16_as_utf8_declared(content: String) -> String {
    if !content.starts_with("<?xml") {
        return content;
    }
    let Some(end) = content.find("?>") else {
        return content;
    };
    let (decl, rest) = content.split_at(end + 2);
    let fixed = ["\"UTF-16\"", "'UTF-16'", "\"utf-16\"", "'utf-16'"]
        .iter()
        .fold(decl.to_string(), |d, quoted| {
            d.replace(&format!("encoding={}", quoted), "encoding=\"UTF-8\"")
        });
    format!("{}{}", fixed, rest)
}
