//! Per-construct projections from mdast nodes to Slate nodes.

use crate::convert::{convert_node, convert_nodes};
use crate::decoration::Decoration;
use crate::mdast::{
    Code, Definition, FootnoteDefinition, FootnoteReference, Image, ImageReference, Link,
    LinkReference, List, ListItem, Node, Table,
};
use crate::slate::{Element, ElementData, SlateNode, Text};
use crate::types::TypeMap;

pub(crate) fn container(
    node_type: &str,
    children: &[Node],
    types: &TypeMap,
    deco: Decoration,
) -> SlateNode {
    element(
        node_type,
        ElementData::Plain,
        convert_nodes(children, types, deco),
    )
}

pub(crate) fn heading(depth: u8, children: &[Node], types: &TypeMap, deco: Decoration) -> SlateNode {
    element(
        types.heading(depth),
        ElementData::Heading { depth },
        convert_nodes(children, types, deco),
    )
}

pub(crate) fn list(list: &List, types: &TypeMap, deco: Decoration) -> SlateNode {
    let ordered = list.ordered.unwrap_or(false);
    let node_type = if ordered {
        &types.ol_list
    } else {
        &types.ul_list
    };
    element(
        node_type.as_str(),
        ElementData::List {
            ordered,
            start: list.start,
            spread: list.spread.unwrap_or(false),
        },
        convert_nodes(&list.children, types, deco),
    )
}

pub(crate) fn list_item(item: &ListItem, types: &TypeMap, deco: Decoration) -> SlateNode {
    element(
        types.list_item.as_str(),
        ElementData::ListItem {
            checked: item.checked,
            spread: item.spread.unwrap_or(false),
        },
        convert_nodes(&item.children, types, deco),
    )
}

/// Cells of the table's first row are heading cells.
pub(crate) fn table(table: &Table, types: &TypeMap, deco: Decoration) -> SlateNode {
    let mut children = Vec::with_capacity(table.children.len());
    for (idx, child) in table.children.iter().enumerate() {
        match child {
            Node::TableRow { children: cells } => {
                let cell_type = if idx == 0 {
                    &types.table_heading
                } else {
                    &types.table_cell
                };
                children.push(table_row(cells, cell_type.as_str(), types, deco));
            }
            other => children.extend(convert_node(other, types, deco)),
        }
    }
    element(
        types.table.as_str(),
        ElementData::Table {
            align: table.align.clone(),
        },
        children,
    )
}

pub(crate) fn table_row(
    cells: &[Node],
    cell_type: &str,
    types: &TypeMap,
    deco: Decoration,
) -> SlateNode {
    let mut children = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            Node::TableCell { children: content } => {
                children.push(container(cell_type, content, types, deco));
            }
            other => children.extend(convert_node(other, types, deco)),
        }
    }
    element(types.table_row.as_str(), ElementData::Plain, children)
}

pub(crate) fn code(code: &Code, types: &TypeMap) -> SlateNode {
    literal(
        types.code_block.as_str(),
        ElementData::Code {
            lang: code.lang.clone(),
            meta: code.meta.clone(),
        },
        &code.value,
    )
}

/// An element whose only child is its raw value as unmarked text.
pub(crate) fn literal(node_type: &str, data: ElementData, value: &str) -> SlateNode {
    element(node_type, data, vec![SlateNode::Text(Text::new(value))])
}

/// An element with no content of its own.
pub(crate) fn void(node_type: &str, data: ElementData) -> SlateNode {
    element(node_type, data, vec![SlateNode::empty_text()])
}

pub(crate) fn definition(definition: &Definition) -> SlateNode {
    void(
        "definition",
        ElementData::Definition {
            identifier: definition.identifier.clone(),
            label: definition.label.clone(),
            url: definition.url.clone(),
            title: definition.title.clone(),
        },
    )
}

pub(crate) fn footnote_definition(
    definition: &FootnoteDefinition,
    types: &TypeMap,
    deco: Decoration,
) -> SlateNode {
    element(
        "footnoteDefinition",
        ElementData::FootnoteDefinition {
            identifier: definition.identifier.clone(),
            label: definition.label.clone(),
        },
        convert_nodes(&definition.children, types, deco),
    )
}

pub(crate) fn link(link: &Link, types: &TypeMap, deco: Decoration) -> SlateNode {
    element(
        types.link.as_str(),
        ElementData::Link {
            url_key: types.link_url.name.clone(),
            url: link.url.clone(),
            title: link.title.clone(),
        },
        convert_nodes(&link.children, types, deco),
    )
}

pub(crate) fn image(image: &Image) -> SlateNode {
    void(
        "image",
        ElementData::Image {
            url: image.url.clone(),
            title: image.title.clone(),
            alt: image.alt.clone(),
        },
    )
}

pub(crate) fn link_reference(
    reference: &LinkReference,
    types: &TypeMap,
    deco: Decoration,
) -> SlateNode {
    element(
        "linkReference",
        ElementData::LinkReference {
            reference_type: reference.reference_type,
            identifier: reference.identifier.clone(),
            label: reference.label.clone(),
        },
        convert_nodes(&reference.children, types, deco),
    )
}

pub(crate) fn image_reference(reference: &ImageReference) -> SlateNode {
    void(
        "imageReference",
        ElementData::ImageReference {
            alt: reference.alt.clone(),
            reference_type: reference.reference_type,
            identifier: reference.identifier.clone(),
            label: reference.label.clone(),
        },
    )
}

pub(crate) fn footnote_reference(reference: &FootnoteReference) -> SlateNode {
    void(
        "footnoteReference",
        ElementData::FootnoteReference {
            identifier: reference.identifier.clone(),
            label: reference.label.clone(),
        },
    )
}

pub(crate) fn text(value: &str, types: &TypeMap, deco: Decoration) -> SlateNode {
    SlateNode::Text(Text {
        marks: deco.keys(types),
        text: value.to_string(),
    })
}

fn element(node_type: &str, data: ElementData, children: Vec<SlateNode>) -> SlateNode {
    SlateNode::Element(Element::new(node_type, data, children))
}
