use once_cell::sync::Lazy;

use crate::types::{HeadingOverrides, HeadingTypes, NodeType, TypeMap, TypeOverrides};

static DEFAULT_TYPES: Lazy<TypeMap> = Lazy::new(|| TypeMap {
    block_quote: NodeType::new("blockquote"),
    code_block: NodeType::new("code_block"),
    heading: HeadingTypes {
        h1: NodeType::new("h1"),
        h2: NodeType::new("h2"),
        h3: NodeType::new("h3"),
        h4: NodeType::new("h4"),
        h5: NodeType::new("h5"),
        h6: NodeType::new("h6"),
    },
    paragraph: NodeType::new("p"),
    delete_mark: NodeType::new("strikethrough"),
    emphasis_mark: NodeType::new("italic"),
    inline_code: NodeType::new("inlineCode"),
    link: NodeType::new("link"),
    // Property name for the link target on link elements.
    link_url: NodeType::new("url"),
    strong_mark: NodeType::new("bold"),
    list_item: NodeType::new("li"),
    ol_list: NodeType::new("ol"),
    ul_list: NodeType::new("ul"),
    table: NodeType::new("table"),
    table_heading: NodeType::new("th"),
    table_row: NodeType::new("tr"),
    table_cell: NodeType::new("td"),
});

/// The built-in type map used when no override is supplied for a role.
pub fn default_types() -> &'static TypeMap {
    &DEFAULT_TYPES
}

/// Merges `overrides` onto `defaults`. Each role is taken from the overrides
/// when present; heading tags are merged depth by depth.
pub fn resolve(overrides: &TypeOverrides, defaults: &TypeMap) -> TypeMap {
    TypeMap {
        block_quote: pick(&overrides.block_quote, &defaults.block_quote),
        code_block: pick(&overrides.code_block, &defaults.code_block),
        heading: resolve_headings(overrides.heading.as_ref(), &defaults.heading),
        paragraph: pick(&overrides.paragraph, &defaults.paragraph),
        delete_mark: pick(&overrides.delete_mark, &defaults.delete_mark),
        emphasis_mark: pick(&overrides.emphasis_mark, &defaults.emphasis_mark),
        inline_code: pick(&overrides.inline_code, &defaults.inline_code),
        link: pick(&overrides.link, &defaults.link),
        link_url: pick(&overrides.link_url, &defaults.link_url),
        strong_mark: pick(&overrides.strong_mark, &defaults.strong_mark),
        list_item: pick(&overrides.list_item, &defaults.list_item),
        ol_list: pick(&overrides.ol_list, &defaults.ol_list),
        ul_list: pick(&overrides.ul_list, &defaults.ul_list),
        table: pick(&overrides.table, &defaults.table),
        table_heading: pick(&overrides.table_heading, &defaults.table_heading),
        table_row: pick(&overrides.table_row, &defaults.table_row),
        table_cell: pick(&overrides.table_cell, &defaults.table_cell),
    }
}

fn resolve_headings(overrides: Option<&HeadingOverrides>, defaults: &HeadingTypes) -> HeadingTypes {
    let Some(overrides) = overrides else {
        return defaults.clone();
    };
    HeadingTypes {
        h1: pick(&overrides.h1, &defaults.h1),
        h2: pick(&overrides.h2, &defaults.h2),
        h3: pick(&overrides.h3, &defaults.h3),
        h4: pick(&overrides.h4, &defaults.h4),
        h5: pick(&overrides.h5, &defaults.h5),
        h6: pick(&overrides.h6, &defaults.h6),
    }
}

fn pick(value: &Option<NodeType>, fallback: &NodeType) -> NodeType {
    value.as_ref().unwrap_or(fallback).clone()
}
