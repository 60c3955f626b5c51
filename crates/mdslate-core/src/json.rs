//! JSON entry points for callers holding serialized trees.

use crate::convert::mdast_to_slate;
use crate::error::{Error, Result};
use crate::mdast::Root;
use crate::slate::SlateNode;
use crate::types::TypeOverrides;

pub fn parse_root(source: &str) -> Result<Root> {
    serde_json::from_str(source).map_err(Error::Source)
}

pub fn parse_overrides(source: &str) -> Result<TypeOverrides> {
    serde_json::from_str(source).map_err(Error::Config)
}

pub fn to_json(nodes: &[SlateNode]) -> Result<String> {
    serde_json::to_string(nodes).map_err(Error::Output)
}

pub fn to_json_pretty(nodes: &[SlateNode]) -> Result<String> {
    serde_json::to_string_pretty(nodes).map_err(Error::Output)
}

/// Parses an mdast JSON document and optional configuration JSON, and returns
/// the Slate nodes as a JSON array.
pub fn convert_json(source: &str, config: Option<&str>) -> Result<String> {
    let root = parse_root(source)?;
    let overrides = config.map(parse_overrides).transpose()?;
    to_json(&mdast_to_slate(&root, overrides.as_ref()))
}
