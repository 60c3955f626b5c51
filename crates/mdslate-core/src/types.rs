use serde::{Deserialize, Serialize};

/// One output type tag, written as `{ "type": "<tag>" }` on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NodeType {
    #[serde(rename = "type")]
    pub name: String,
}

impl NodeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// A complete mapping from construct role to output type tag.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TypeMap {
    pub block_quote: NodeType,
    pub code_block: NodeType,
    pub heading: HeadingTypes,
    pub paragraph: NodeType,
    pub delete_mark: NodeType,
    pub emphasis_mark: NodeType,
    #[serde(rename = "inlineCode")]
    pub inline_code: NodeType,
    pub link: NodeType,
    pub link_url: NodeType,
    pub strong_mark: NodeType,
    #[serde(rename = "listItem")]
    pub list_item: NodeType,
    pub ol_list: NodeType,
    pub ul_list: NodeType,
    pub table: NodeType,
    #[serde(rename = "tableHeading")]
    pub table_heading: NodeType,
    #[serde(rename = "tableRow")]
    pub table_row: NodeType,
    #[serde(rename = "tableCell")]
    pub table_cell: NodeType,
}

impl TypeMap {
    /// Tag for a heading of the given depth. Depths outside 1..=6 borrow the
    /// nearest valid depth's tag.
    pub fn heading(&self, depth: u8) -> &str {
        self.heading.get(depth).as_str()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HeadingTypes {
    #[serde(rename = "1")]
    pub h1: NodeType,
    #[serde(rename = "2")]
    pub h2: NodeType,
    #[serde(rename = "3")]
    pub h3: NodeType,
    #[serde(rename = "4")]
    pub h4: NodeType,
    #[serde(rename = "5")]
    pub h5: NodeType,
    #[serde(rename = "6")]
    pub h6: NodeType,
}

impl HeadingTypes {
    pub fn get(&self, depth: u8) -> &NodeType {
        match depth {
            0 | 1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            _ => &self.h6,
        }
    }
}

/// Caller-supplied partial configuration. Absent roles fall back to the
/// defaults; keys this crate does not know are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct TypeOverrides {
    pub block_quote: Option<NodeType>,
    pub code_block: Option<NodeType>,
    pub heading: Option<HeadingOverrides>,
    pub paragraph: Option<NodeType>,
    pub delete_mark: Option<NodeType>,
    pub emphasis_mark: Option<NodeType>,
    #[serde(rename = "inlineCode")]
    pub inline_code: Option<NodeType>,
    pub link: Option<NodeType>,
    pub link_url: Option<NodeType>,
    pub strong_mark: Option<NodeType>,
    #[serde(rename = "listItem")]
    pub list_item: Option<NodeType>,
    pub ol_list: Option<NodeType>,
    pub ul_list: Option<NodeType>,
    pub table: Option<NodeType>,
    #[serde(rename = "tableHeading")]
    pub table_heading: Option<NodeType>,
    #[serde(rename = "tableRow")]
    pub table_row: Option<NodeType>,
    #[serde(rename = "tableCell")]
    pub table_cell: Option<NodeType>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct HeadingOverrides {
    #[serde(rename = "1")]
    pub h1: Option<NodeType>,
    #[serde(rename = "2")]
    pub h2: Option<NodeType>,
    #[serde(rename = "3")]
    pub h3: Option<NodeType>,
    #[serde(rename = "4")]
    pub h4: Option<NodeType>,
    #[serde(rename = "5")]
    pub h5: Option<NodeType>,
    #[serde(rename = "6")]
    pub h6: Option<NodeType>,
}
