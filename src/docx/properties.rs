//! Core document properties (`docProps/core.xml`).

use crate::model::CoreProperties;
use crate::namespaces::{QName, CP, DC, DCTERMS};
use crate::xml::XmlElement;

/// The fixed set of core properties that are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreProperty {
    /// `dc:title`
    Title,
    /// `dc:subject`
    Subject,
    /// `dc:creator`, the original author.
    Creator,
    /// `cp:lastModifiedBy`
    LastModifiedBy,
    /// `cp:revision`, the save count as stored (not parsed).
    Revision,
    /// `dcterms:created`, an ISO 8601 timestamp kept as text.
    Created,
    /// `dcterms:modified`, an ISO 8601 timestamp kept as text.
    Modified,
    /// `dc:description`
    Description,
    /// `dc:language`
    Language,
    /// `dc:keywords`; `cp:keywords` is not read.
    Keywords,
}

impl CoreProperty {
    /// All properties, in extraction order.
    pub const ALL: [CoreProperty; 10] = [
        CoreProperty::Title,
        CoreProperty::Subject,
        CoreProperty::Creator,
        CoreProperty::LastModifiedBy,
        CoreProperty::Revision,
        CoreProperty::Created,
        CoreProperty::Modified,
        CoreProperty::Description,
        CoreProperty::Language,
        CoreProperty::Keywords,
    ];

    /// Key used in the extracted mapping.
    pub fn key(self) -> &'static str {
        match self {
            CoreProperty::Title => "title",
            CoreProperty::Subject => "subject",
            CoreProperty::Creator => "creator",
            CoreProperty::LastModifiedBy => "lastModifiedBy",
            CoreProperty::Revision => "revision",
            CoreProperty::Created => "created",
            CoreProperty::Modified => "modified",
            CoreProperty::Description => "description",
            CoreProperty::Language => "language",
            CoreProperty::Keywords => "keywords",
        }
    }

    /// Element holding the property value.
    pub fn element(self) -> QName<'static> {
        let namespace = match self {
            CoreProperty::LastModifiedBy | CoreProperty::Revision => CP,
            CoreProperty::Created | CoreProperty::Modified => DCTERMS,
            _ => DC,
        };
        QName {
            namespace: Some(namespace),
            local: self.key(),
        }
    }
}

/// Collect the core properties found anywhere below `root`.
///
/// Properties whose element is missing or has no text are left out.
pub fn core_properties(root: &XmlElement) -> CoreProperties {
    CoreProperty::ALL
        .iter()
        .filter_map(|&property| {
            let text = root.find(property.element())?.text()?;
            (!text.is_empty()).then(|| (property.key().to_string(), text.to_string()))
        })
        .collect()
}
