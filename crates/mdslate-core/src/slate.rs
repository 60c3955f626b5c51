//! The Slate target tree.
//!
//! Elements serialize as `{ "type": ..., <fields>, "children": [...] }` and
//! text leaves as `{ <mark>: true, ..., "text": ... }`. Mark and link-URL
//! property names come from the resolved type map, so serialization is
//! written by hand rather than derived.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::mdast::{AlignKind, ReferenceType};

#[derive(Clone, Debug, PartialEq)]
pub enum SlateNode {
    Element(Element),
    Text(Text),
}

impl SlateNode {
    /// The `{ text: "" }` leaf that void elements carry as their only child.
    pub fn empty_text() -> Self {
        SlateNode::Text(Text::new(""))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            SlateNode::Element(element) => Some(element),
            SlateNode::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            SlateNode::Text(text) => Some(text),
            SlateNode::Element(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub node_type: String,
    pub data: ElementData,
    pub children: Vec<SlateNode>,
}

impl Element {
    pub fn new(node_type: impl Into<String>, data: ElementData, children: Vec<SlateNode>) -> Self {
        Self {
            node_type: node_type.into(),
            data,
            children,
        }
    }
}

/// Construct-specific fields carried next to `type` and `children`.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementData {
    Plain,
    Heading {
        depth: u8,
    },
    List {
        ordered: bool,
        start: Option<u64>,
        spread: bool,
    },
    ListItem {
        checked: Option<bool>,
        spread: bool,
    },
    Table {
        align: Vec<Option<AlignKind>>,
    },
    Code {
        lang: Option<String>,
        meta: Option<String>,
    },
    Definition {
        identifier: String,
        label: Option<String>,
        url: String,
        title: Option<String>,
    },
    FootnoteDefinition {
        identifier: String,
        label: Option<String>,
    },
    Link {
        /// Property name the URL is written under.
        url_key: String,
        url: String,
        title: Option<String>,
    },
    Image {
        url: String,
        title: Option<String>,
        alt: Option<String>,
    },
    LinkReference {
        reference_type: ReferenceType,
        identifier: String,
        label: Option<String>,
    },
    ImageReference {
        alt: Option<String>,
        reference_type: ReferenceType,
        identifier: String,
        label: Option<String>,
    },
    FootnoteReference {
        identifier: String,
        label: Option<String>,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    /// Resolved property names of the marks set on this leaf.
    pub marks: Vec<String>,
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            marks: Vec::new(),
            text: text.into(),
        }
    }

    pub fn has_mark(&self, key: &str) -> bool {
        self.marks.iter().any(|mark| mark == key)
    }
}

impl Serialize for SlateNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SlateNode::Element(element) => element.serialize(serializer),
            SlateNode::Text(text) => text.serialize(serializer),
        }
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.marks.len() + 1))?;
        for mark in &self.marks {
            map.serialize_entry(mark, &true)?;
        }
        map.serialize_entry("text", &self.text)?;
        map.end()
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.node_type)?;
        self.data.serialize_fields(&mut map)?;
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}

impl ElementData {
    fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match self {
            ElementData::Plain => {}
            ElementData::Heading { depth } => {
                map.serialize_entry("depth", depth)?;
            }
            ElementData::List {
                ordered,
                start,
                spread,
            } => {
                map.serialize_entry("ordered", ordered)?;
                optional_entry(map, "start", start)?;
                map.serialize_entry("spread", spread)?;
            }
            ElementData::ListItem { checked, spread } => {
                optional_entry(map, "checked", checked)?;
                map.serialize_entry("spread", spread)?;
            }
            ElementData::Table { align } => {
                map.serialize_entry("align", align)?;
            }
            ElementData::Code { lang, meta } => {
                optional_entry(map, "lang", lang)?;
                optional_entry(map, "meta", meta)?;
            }
            ElementData::Definition {
                identifier,
                label,
                url,
                title,
            } => {
                map.serialize_entry("identifier", identifier)?;
                optional_entry(map, "label", label)?;
                map.serialize_entry("url", url)?;
                optional_entry(map, "title", title)?;
            }
            ElementData::FootnoteDefinition { identifier, label } => {
                map.serialize_entry("identifier", identifier)?;
                optional_entry(map, "label", label)?;
            }
            ElementData::Link {
                url_key,
                url,
                title,
            } => {
                map.serialize_entry(url_key, url)?;
                optional_entry(map, "title", title)?;
            }
            ElementData::Image { url, title, alt } => {
                map.serialize_entry("url", url)?;
                optional_entry(map, "title", title)?;
                optional_entry(map, "alt", alt)?;
            }
            ElementData::LinkReference {
                reference_type,
                identifier,
                label,
            } => {
                map.serialize_entry("referenceType", reference_type)?;
                map.serialize_entry("identifier", identifier)?;
                optional_entry(map, "label", label)?;
            }
            ElementData::ImageReference {
                alt,
                reference_type,
                identifier,
                label,
            } => {
                optional_entry(map, "alt", alt)?;
                map.serialize_entry("referenceType", reference_type)?;
                map.serialize_entry("identifier", identifier)?;
                optional_entry(map, "label", label)?;
            }
            ElementData::FootnoteReference { identifier, label } => {
                map.serialize_entry("identifier", identifier)?;
                optional_entry(map, "label", label)?;
            }
        }
        Ok(())
    }
}

// Absent optional fields are left off the element entirely.
fn optional_entry<M, T>(map: &mut M, key: &str, value: &Option<T>) -> Result<(), M::Error>
where
    M: SerializeMap,
    T: Serialize,
{
    match value {
        Some(value) => map.serialize_entry(key, value),
        None => Ok(()),
    }
}
