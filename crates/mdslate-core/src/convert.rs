use tracing::{debug, debug_span, trace};

use crate::build;
use crate::decoration::{Decoration, Mark};
use crate::mdast::{Node, Root};
use crate::resolver::{default_types, resolve};
use crate::slate::{ElementData, SlateNode};
use crate::types::{TypeMap, TypeOverrides};

/// Converts an mdast document into the children of a Slate editor value.
///
/// The root itself is not emitted. `overrides` is merged onto the default
/// type map once and used for the whole walk.
pub fn mdast_to_slate(root: &Root, overrides: Option<&TypeOverrides>) -> Vec<SlateNode> {
    let _span = debug_span!("mdast_to_slate").entered();
    let types = match overrides {
        Some(overrides) => resolve(overrides, default_types()),
        None => default_types().clone(),
    };
    let nodes = convert_root(root, &types);
    debug!(
        source_nodes = root.children.len(),
        target_nodes = nodes.len(),
        "converted document"
    );
    nodes
}

/// Like [`mdast_to_slate`], with an already resolved type map.
pub fn convert_root(root: &Root, types: &TypeMap) -> Vec<SlateNode> {
    convert_nodes(&root.children, types, Decoration::default())
}

/// Converts siblings in order, splicing each node's output into one sequence.
pub fn convert_nodes(nodes: &[Node], types: &TypeMap, deco: Decoration) -> Vec<SlateNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        out.extend(convert_node(node, types, deco));
    }
    out
}

/// Converts one node. Mark nodes (emphasis, strong, delete) produce their
/// children's output directly; unrecognized nodes produce nothing.
pub fn convert_node(node: &Node, types: &TypeMap, deco: Decoration) -> Vec<SlateNode> {
    let converted = match node {
        Node::Paragraph { children } => {
            build::container(types.paragraph.as_str(), children, types, deco)
        }
        Node::Heading { depth, children } => build::heading(*depth, children, types, deco),
        Node::ThematicBreak => build::void("thematicBreak", ElementData::Plain),
        Node::Blockquote { children } => {
            build::container(types.block_quote.as_str(), children, types, deco)
        }
        Node::List(list) => build::list(list, types, deco),
        Node::ListItem(item) => build::list_item(item, types, deco),
        Node::Table(table) => build::table(table, types, deco),
        Node::TableRow { children } => {
            build::table_row(children, types.table_cell.as_str(), types, deco)
        }
        Node::TableCell { children } => {
            build::container(types.table_cell.as_str(), children, types, deco)
        }
        Node::Html { value } => build::literal("html", ElementData::Plain, value),
        Node::Code(code) => build::code(code, types),
        Node::Yaml { value } => build::literal("yaml", ElementData::Plain, value),
        Node::Toml { value } => build::literal("toml", ElementData::Plain, value),
        Node::Definition(definition) => build::definition(definition),
        Node::FootnoteDefinition(definition) => {
            build::footnote_definition(definition, types, deco)
        }
        Node::Text { value } => build::text(value, types, deco),
        Node::Emphasis { children } => {
            return convert_nodes(children, types, deco.with(Mark::Italic));
        }
        Node::Strong { children } => {
            return convert_nodes(children, types, deco.with(Mark::Bold));
        }
        Node::Delete { children } => {
            return convert_nodes(children, types, deco.with(Mark::Strikethrough));
        }
        Node::InlineCode { value } => build::text(value, types, deco.with(Mark::InlineCode)),
        Node::Break => build::void("break", ElementData::Plain),
        Node::Link(link) => build::link(link, types, deco),
        Node::Image(image) => build::image(image),
        Node::LinkReference(reference) => build::link_reference(reference, types, deco),
        Node::ImageReference(reference) => build::image_reference(reference),
        Node::Footnote { children } => build::container("footnote", children, types, deco),
        Node::FootnoteReference(reference) => build::footnote_reference(reference),
        Node::Math { value } => build::literal("math", ElementData::Plain, value),
        Node::InlineMath { value } => build::literal("inlineMath", ElementData::Plain, value),
        Node::Unknown => {
            trace!("dropping unrecognized node and its subtree");
            return Vec::new();
        }
    };
    vec![converted]
}
