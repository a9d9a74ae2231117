//! Owned element tree for package parts.
//!
//! Parts are small enough to hold in memory, so each read builds a complete
//! tree from the namespace-aware pull parser and the accessors walk it with
//! descendant queries. Element names are stored resolved (namespace URI plus
//! local name) so lookups do not depend on the prefixes a producer chose.

use crate::error::{Error, Result};
use crate::namespaces::QName;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

/// Deepest element nesting accepted by [`XmlElement::parse`].
///
/// Dropping, cloning and comparing trees recurse once per level.
pub const MAX_DEPTH: usize = 1024;

/// An attribute with its resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Namespace URI of the attribute, if prefixed.
    pub namespace: Option<String>,
    /// Local name.
    pub local: String,
    /// Unescaped value.
    pub value: String,
}

/// An element of a parsed part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    namespace: Option<String>,
    prefix: Option<String>,
    local: String,
    attributes: Vec<XmlAttribute>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse a complete XML document and return its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let (resolved, event) = reader.read_resolved_event()?;
            let namespace = owned_namespace(resolved)?;
            match event {
                Event::Start(ref e) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(Error::XmlParse("junk after document element".to_string()));
                    }
                    check_depth(stack.len())?;
                    let element = Self::from_start(&reader, namespace, e)?;
                    stack.push(element);
                }
                Event::Empty(ref e) => {
                    check_depth(stack.len())?;
                    let element = Self::from_start(&reader, namespace, e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None if root.is_none() => root = Some(element),
                        None => {
                            return Err(Error::XmlParse(
                                "junk after document element".to_string(),
                            ))
                        }
                    }
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::XmlParse("unexpected closing tag".to_string()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
                Event::Text(ref e) => {
                    let text = e.unescape()?;
                    match stack.last_mut() {
                        Some(current) => current.push_text(&text),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(Error::XmlParse(
                                "text outside of the document element".to_string(),
                            ))
                        }
                    }
                }
                Event::CData(ref e) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&String::from_utf8_lossy(e));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::XmlParse(format!(
                "unexpected end of document inside <{}>",
                open.tag()
            )));
        }
        root.ok_or_else(|| Error::XmlParse("no root element".to_string()))
    }

    fn from_start(
        reader: &NsReader<&[u8]>,
        namespace: Option<String>,
        start: &BytesStart<'_>,
    ) -> Result<Self> {
        let name = start.name();
        let prefix = name
            .prefix()
            .map(|p| String::from_utf8_lossy(p.as_ref()).into_owned());
        let local = String::from_utf8_lossy(name.local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let (resolved, attr_local) = reader.resolve_attribute(attr.key);
            let attr_namespace = owned_namespace(resolved)?;
            attributes.push(XmlAttribute {
                namespace: attr_namespace,
                local: String::from_utf8_lossy(attr_local.as_ref()).into_owned(),
                value: attr.unescape_value()?.into_owned(),
            });
        }

        Ok(Self {
            namespace,
            prefix,
            local,
            attributes,
            text: None,
            children: Vec::new(),
        })
    }

    /// Text only counts until the first child element, like `.text` in
    /// ElementTree-style APIs; anything after a child is tail text.
    fn push_text(&mut self, text: &str) {
        if self.children.is_empty() {
            self.text.get_or_insert_with(String::new).push_str(text);
        }
    }

    /// Resolved name of this element.
    pub fn qname(&self) -> QName<'_> {
        QName {
            namespace: self.namespace.as_deref(),
            local: &self.local,
        }
    }

    /// Whether this element has the given resolved name.
    pub fn is(&self, name: QName<'_>) -> bool {
        self.local == name.local && self.namespace.as_deref() == name.namespace
    }

    /// Local name without prefix.
    pub fn local_name(&self) -> &str {
        &self.local
    }

    /// Namespace URI, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Tag as written in the source (`prefix:local`).
    pub fn tag(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local),
            None => self.local.clone(),
        }
    }

    /// Text preceding the first child element.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Attribute lookup by resolved name.
    pub fn attribute(&self, name: QName<'_>) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local == name.local && a.namespace.as_deref() == name.namespace)
            .map(|a| a.value.as_str())
    }

    /// Direct children in document order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Every element below this one, depth first, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Every descendant with the given name, at any depth.
    pub fn find_all<'s, 'n>(
        &'s self,
        name: QName<'n>,
    ) -> impl Iterator<Item = &'s XmlElement> + use<'s, 'n> {
        self.descendants().filter(move |el| el.is(name))
    }

    /// First descendant with the given name, at any depth.
    pub fn find(&self, name: QName<'_>) -> Option<&XmlElement> {
        self.descendants().find(|el| el.is(name))
    }

    /// Child-index paths of every descendant with the given name, in
    /// document order. Paths stay valid for as long as the tree is not
    /// modified and can be resolved with [`XmlElement::at_path`].
    pub fn paths_to(&self, name: QName<'_>) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        let mut path: Vec<usize> = Vec::new();
        let mut frames = vec![self.children.iter().enumerate()];

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some((i, child)) => {
                    path.push(i);
                    if child.is(name) {
                        found.push(path.clone());
                    }
                    frames.push(child.children.iter().enumerate());
                }
                None => {
                    frames.pop();
                    path.pop();
                }
            }
        }
        found
    }

    /// Element reached by following child indices from this one.
    pub fn at_path(&self, path: &[usize]) -> Option<&XmlElement> {
        path.iter()
            .try_fold(self, |element, &i| element.children.get(i))
    }
}

/// Pre-order iterator over the descendants of an element.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

fn check_depth(open: usize) -> Result<()> {
    if open >= MAX_DEPTH {
        return Err(Error::XmlParse(format!(
            "elements nested deeper than {} levels",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn owned_namespace(resolved: ResolveResult<'_>) -> Result<Option<String>> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(String::from_utf8_lossy(ns.0).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(Error::XmlParse(format!(
            "unbound namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}
