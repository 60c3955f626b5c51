mod build;
mod convert;
mod decoration;
mod error;
pub mod json;
pub mod mdast;
mod resolver;
mod slate;
mod types;

pub use convert::{convert_node, convert_nodes, convert_root, mdast_to_slate};
pub use decoration::{Decoration, Mark};
pub use error::{Error, Result};
pub use resolver::{default_types, resolve};
pub use slate::{Element, ElementData, SlateNode, Text};
pub use types::{HeadingOverrides, HeadingTypes, NodeType, TypeMap, TypeOverrides};
