//! Fixed namespace bindings used by WordprocessingML packages.
//!
//! Queries against the element tree are written with the conventional
//! prefixes (`w:p`, `dc:title`, ...) and resolved through [`NAMESPACES`]
//! to the namespace URI the parser recorded on each element. Documents are
//! free to bind those URIs to other prefixes; only the URI has to match.

/// WordprocessingML main namespace.
pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Word drawing namespace.
pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
/// DrawingML main namespace.
pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// Office document relationships namespace.
pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// Core properties namespace.
pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
/// Dublin Core elements.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// Dublin Core terms.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
/// Variant types used by extended properties.
pub const VT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes";
/// Word 2010 extensions.
pub const W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";

/// Prefix to URI table.
pub const NAMESPACES: &[(&str, &str)] = &[
    ("w", W),
    ("wp", WP),
    ("a", A),
    ("r", R),
    ("cp", CP),
    ("dc", DC),
    ("dcterms", DCTERMS),
    ("vt", VT),
    ("w14", W14),
];

/// Look up the URI bound to a conventional prefix.
pub fn uri_for_prefix(prefix: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// A resolved element name: namespace URI plus local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    /// Namespace URI, `None` for names outside any namespace.
    pub namespace: Option<&'a str>,
    /// Local part of the name.
    pub local: &'a str,
}

impl<'a> QName<'a> {
    /// Resolve `prefix:local` against the fixed table.
    ///
    /// A name without a prefix is taken to be in no namespace. Returns
    /// `None` when the prefix is not one of the fixed bindings.
    pub fn parse(name: &'a str) -> Option<Self> {
        match name.split_once(':') {
            Some((prefix, local)) => Some(QName {
                namespace: Some(uri_for_prefix(prefix)?),
                local,
            }),
            None => Some(QName {
                namespace: None,
                local: name,
            }),
        }
    }

    /// Name in the WordprocessingML main namespace.
    pub const fn w(local: &'a str) -> Self {
        QName {
            namespace: Some(W),
            local,
        }
    }
}

impl std::fmt::Display for QName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(self.local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lookup() {
        assert_eq!(uri_for_prefix("w"), Some(W));
        assert_eq!(uri_for_prefix("dcterms"), Some(DCTERMS));
        assert_eq!(uri_for_prefix("x"), None);
        assert_eq!(NAMESPACES.len(), 9);
    }

    #[test]
    fn test_qname_parse() {
        let name = QName::parse("cp:lastModifiedBy").unwrap();
        assert_eq!(name.namespace, Some(CP));
        assert_eq!(name.local, "lastModifiedBy");

        let plain = QName::parse("Relationship").unwrap();
        assert_eq!(plain.namespace, None);

        assert!(QName::parse("zz:title").is_none());
        assert_eq!(QName::parse("w:p"), Some(QName::w("p")));
    }

    #[test]
    fn test_qname_display() {
        assert_eq!(
            QName::w("tbl").to_string(),
            "{http://schemas.openxmlformats.org/wordprocessingml/2006/main}tbl"
        );
    }
}
