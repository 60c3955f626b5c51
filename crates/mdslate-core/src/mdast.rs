//! The mdast source tree.
//!
//! Nodes deserialize from the JSON shape produced by remark/mdast parsers:
//! every node is an object tagged by `type`. Fields the transform has no use
//! for (`position`, `data`, ...) are ignored, and any `type` outside the set
//! below deserializes to [`Node::Unknown`].

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        depth: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    ThematicBreak,
    Blockquote {
        #[serde(default)]
        children: Vec<Node>,
    },
    List(List),
    ListItem(ListItem),
    Table(Table),
    TableRow {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableCell {
        #[serde(default)]
        children: Vec<Node>,
    },
    Html {
        value: String,
    },
    Code(Code),
    Yaml {
        value: String,
    },
    Toml {
        value: String,
    },
    Definition(Definition),
    FootnoteDefinition(FootnoteDefinition),
    Text {
        value: String,
    },
    Emphasis {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strong {
        #[serde(default)]
        children: Vec<Node>,
    },
    Delete {
        #[serde(default)]
        children: Vec<Node>,
    },
    InlineCode {
        value: String,
    },
    Break,
    Link(Link),
    Image(Image),
    LinkReference(LinkReference),
    ImageReference(ImageReference),
    Footnote {
        #[serde(default)]
        children: Vec<Node>,
    },
    FootnoteReference(FootnoteReference),
    Math {
        value: String,
    },
    InlineMath {
        value: String,
    },
    /// Any construct tag this crate does not recognize.
    #[serde(other)]
    Unknown,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct List {
    #[serde(default)]
    pub ordered: Option<bool>,
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub spread: Option<bool>,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ListItem {
    /// `None` for a plain item, `Some(done)` for a task item.
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub spread: Option<bool>,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub align: Vec<Option<AlignKind>>,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignKind {
    Left,
    Right,
    Center,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub meta: Option<String>,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Definition {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FootnoteDefinition {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    #[default]
    Shortcut,
    Collapsed,
    Full,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LinkReference {
    #[serde(rename = "referenceType")]
    pub reference_type: ReferenceType,
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ImageReference {
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(rename = "referenceType")]
    pub reference_type: ReferenceType,
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FootnoteReference {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
}
