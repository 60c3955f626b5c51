use mdslate_core::json::parse_root;
use mdslate_core::mdast::{Node, Root};
use mdslate_core::{SlateNode, mdast_to_slate};
use serde_json::{Value, json};

fn convert(tree: Value) -> Value {
    let root: Root = serde_json::from_value(tree).expect("mdast tree");
    let nodes = mdast_to_slate(&root, None);
    serde_json::to_value(&nodes).expect("slate json")
}

fn root(children: Value) -> Value {
    json!({ "type": "root", "children": children })
}

fn text(value: &str) -> Value {
    json!({ "type": "text", "value": value })
}

#[test]
fn paragraph_with_plain_text() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [text("hello")] }
    ])));
    assert_eq!(out, json!([{ "type": "p", "children": [{ "text": "hello" }] }]));
}

#[test]
fn strong_text_becomes_bold_leaf() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [
            { "type": "strong", "children": [text("bold")] }
        ] }
    ])));
    assert_eq!(
        out,
        json!([{ "type": "p", "children": [{ "bold": true, "text": "bold" }] }])
    );
}

#[test]
fn nested_marks_accumulate() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [
            { "type": "emphasis", "children": [
                { "type": "strong", "children": [text("x")] }
            ] }
        ] }
    ])));
    assert_eq!(
        out,
        json!([{ "type": "p", "children": [{ "bold": true, "italic": true, "text": "x" }] }])
    );
}

#[test]
fn sibling_marks_do_not_leak() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [
            { "type": "emphasis", "children": [text("a")] },
            { "type": "strong", "children": [text("b")] },
            text("c"),
        ] }
    ])));
    assert_eq!(
        out,
        json!([{ "type": "p", "children": [
            { "italic": true, "text": "a" },
            { "bold": true, "text": "b" },
            { "text": "c" },
        ] }])
    );
}

#[test]
fn inline_code_mark_applies_to_its_leaf_only() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [
            { "type": "delete", "children": [
                { "type": "inlineCode", "value": "x()" },
                text(" gone"),
            ] },
        ] }
    ])));
    assert_eq!(
        out,
        json!([{ "type": "p", "children": [
            { "strikethrough": true, "inlineCode": true, "text": "x()" },
            { "strikethrough": true, "text": " gone" },
        ] }])
    );
}

#[test]
fn mark_nodes_splice_in_place() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [
            text("a"),
            { "type": "emphasis", "children": [text("b"), text("c")] },
            text("d"),
        ] }
    ])));
    let leaves: Vec<&str> = out[0]["children"]
        .as_array()
        .expect("children")
        .iter()
        .map(|leaf| leaf["text"].as_str().expect("text"))
        .collect();
    assert_eq!(leaves, vec!["a", "b", "c", "d"]);
    assert_eq!(out[0]["children"][0].get("italic"), None);
    assert_eq!(out[0]["children"][2]["italic"], json!(true));
    assert_eq!(out[0]["children"][3].get("italic"), None);
}

#[test]
fn heading_keeps_depth_and_uses_depth_tag() {
    let out = convert(root(json!([
        { "type": "heading", "depth": 2, "children": [text("Title")] }
    ])));
    assert_eq!(
        out,
        json!([{ "type": "h2", "depth": 2, "children": [{ "text": "Title" }] }])
    );
}

#[test]
fn ordered_list_with_item() {
    let out = convert(root(json!([
        { "type": "list", "ordered": true, "start": 1, "spread": false, "children": [
            { "type": "listItem", "spread": false, "checked": null, "children": [
                { "type": "paragraph", "children": [text("item")] }
            ] }
        ] }
    ])));
    assert_eq!(
        out,
        json!([{
            "type": "ol",
            "ordered": true,
            "start": 1,
            "spread": false,
            "children": [{
                "type": "li",
                "spread": false,
                "children": [{ "type": "p", "children": [{ "text": "item" }] }]
            }]
        }])
    );
}

#[test]
fn unordered_task_list_keeps_checked_and_omits_start() {
    let out = convert(root(json!([
        { "type": "list", "ordered": false, "spread": true, "children": [
            { "type": "listItem", "checked": true, "spread": true, "children": [] }
        ] }
    ])));
    assert_eq!(
        out,
        json!([{
            "type": "ul",
            "ordered": false,
            "spread": true,
            "children": [{ "type": "li", "checked": true, "spread": true, "children": [] }]
        }])
    );
}

#[test]
fn unknown_construct_is_dropped_with_subtree() {
    let out = convert(root(json!([
        { "type": "blockquote", "children": [
            { "type": "customBlock", "children": [
                { "type": "paragraph", "children": [text("hidden")] }
            ] }
        ] }
    ])));
    assert_eq!(out, json!([{ "type": "blockquote", "children": [] }]));
}

#[test]
fn unknown_construct_between_siblings_keeps_order() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [text("one")] },
        { "type": "mdxJsxFlowElement", "name": "Widget" },
        { "type": "paragraph", "children": [text("two")] },
    ])));
    assert_eq!(
        out,
        json!([
            { "type": "p", "children": [{ "text": "one" }] },
            { "type": "p", "children": [{ "text": "two" }] },
        ])
    );
}

#[test]
fn void_constructs_carry_one_empty_leaf() {
    let out = convert(root(json!([
        { "type": "thematicBreak" },
        { "type": "paragraph", "children": [
            { "type": "break" },
            { "type": "image", "url": "a.png", "alt": "A" },
            { "type": "imageReference", "referenceType": "full", "identifier": "logo", "label": "Logo", "alt": "logo" },
            { "type": "footnoteReference", "identifier": "1", "label": "1" },
        ] },
        { "type": "definition", "identifier": "logo", "label": "Logo", "url": "/logo.png", "title": null },
    ])));

    assert_eq!(
        out,
        json!([
            { "type": "thematicBreak", "children": [{ "text": "" }] },
            { "type": "p", "children": [
                { "type": "break", "children": [{ "text": "" }] },
                { "type": "image", "url": "a.png", "alt": "A", "children": [{ "text": "" }] },
                {
                    "type": "imageReference",
                    "alt": "logo",
                    "referenceType": "full",
                    "identifier": "logo",
                    "label": "Logo",
                    "children": [{ "text": "" }]
                },
                { "type": "footnoteReference", "identifier": "1", "label": "1", "children": [{ "text": "" }] },
            ] },
            {
                "type": "definition",
                "identifier": "logo",
                "label": "Logo",
                "url": "/logo.png",
                "children": [{ "text": "" }]
            },
        ])
    );
}

#[test]
fn literal_constructs_wrap_raw_value() {
    let out = convert(root(json!([
        { "type": "html", "value": "<br>" },
        { "type": "yaml", "value": "title: x" },
        { "type": "toml", "value": "title = 'x'" },
        { "type": "math", "value": "E = mc^2" },
        { "type": "paragraph", "children": [
            { "type": "strong", "children": [{ "type": "inlineMath", "value": "x" }] }
        ] },
    ])));
    assert_eq!(
        out,
        json!([
            { "type": "html", "children": [{ "text": "<br>" }] },
            { "type": "yaml", "children": [{ "text": "title: x" }] },
            { "type": "toml", "children": [{ "text": "title = 'x'" }] },
            { "type": "math", "children": [{ "text": "E = mc^2" }] },
            { "type": "p", "children": [
                { "type": "inlineMath", "children": [{ "text": "x" }] }
            ] },
        ])
    );
}

#[test]
fn code_block_keeps_lang_and_omits_missing_meta() {
    let out = convert(root(json!([
        { "type": "code", "lang": "rust", "meta": null, "value": "fn main() {}" },
        { "type": "code", "value": "plain" },
    ])));
    assert_eq!(
        out,
        json!([
            { "type": "code_block", "lang": "rust", "children": [{ "text": "fn main() {}" }] },
            { "type": "code_block", "children": [{ "text": "plain" }] },
        ])
    );
}

#[test]
fn table_rows_and_heading_cells() {
    let cell = |value: &str| json!({ "type": "tableCell", "children": [text(value)] });
    let out = convert(root(json!([
        { "type": "table", "align": ["left", null], "children": [
            { "type": "tableRow", "children": [cell("a"), cell("b")] },
            { "type": "tableRow", "children": [cell("1"), cell("2")] },
        ] }
    ])));
    assert_eq!(
        out,
        json!([{
            "type": "table",
            "align": ["left", null],
            "children": [
                { "type": "tr", "children": [
                    { "type": "th", "children": [{ "text": "a" }] },
                    { "type": "th", "children": [{ "text": "b" }] },
                ] },
                { "type": "tr", "children": [
                    { "type": "td", "children": [{ "text": "1" }] },
                    { "type": "td", "children": [{ "text": "2" }] },
                ] },
            ]
        }])
    );
}

#[test]
fn links_and_references() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [
            { "type": "link", "url": "https://example.com", "title": "Example", "children": [
                { "type": "emphasis", "children": [text("site")] }
            ] },
            { "type": "link", "url": "/bare", "children": [text("bare")] },
            { "type": "linkReference", "referenceType": "collapsed", "identifier": "docs", "label": "Docs", "children": [text("Docs")] },
        ] }
    ])));
    assert_eq!(
        out,
        json!([{ "type": "p", "children": [
            {
                "type": "link",
                "url": "https://example.com",
                "title": "Example",
                "children": [{ "italic": true, "text": "site" }]
            },
            { "type": "link", "url": "/bare", "children": [{ "text": "bare" }] },
            {
                "type": "linkReference",
                "referenceType": "collapsed",
                "identifier": "docs",
                "label": "Docs",
                "children": [{ "text": "Docs" }]
            },
        ] }])
    );
}

#[test]
fn footnotes() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [
            { "type": "footnote", "children": [text("inline note")] }
        ] },
        { "type": "footnoteDefinition", "identifier": "n", "label": "N", "children": [
            { "type": "paragraph", "children": [text("note")] }
        ] },
    ])));
    assert_eq!(
        out,
        json!([
            { "type": "p", "children": [
                { "type": "footnote", "children": [{ "text": "inline note" }] }
            ] },
            {
                "type": "footnoteDefinition",
                "identifier": "n",
                "label": "N",
                "children": [{ "type": "p", "children": [{ "text": "note" }] }]
            },
        ])
    );
}

#[test]
fn roleless_constructs_keep_their_mdast_tag() {
    let out = convert(root(json!([
        { "type": "paragraph", "children": [text("p")] },
        { "type": "blockquote", "children": [] },
        { "type": "thematicBreak" },
        { "type": "html", "value": "" },
    ])));
    let tags: Vec<&str> = out
        .as_array()
        .expect("nodes")
        .iter()
        .map(|node| node["type"].as_str().expect("type"))
        .collect();
    assert_eq!(tags, vec!["p", "blockquote", "thematicBreak", "html"]);
}

#[test]
fn positions_and_extra_fields_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let source = r#"{
        "type": "root",
        "children": [{
            "type": "paragraph",
            "position": { "start": { "line": 1, "column": 1, "offset": 0 }, "end": { "line": 1, "column": 3, "offset": 2 } },
            "data": { "hProperties": {} },
            "children": [{ "type": "text", "value": "hi", "position": null }]
        }],
        "position": null
    }"#;
    let root = parse_root(source)?;
    assert_eq!(
        root,
        Root::new(vec![Node::Paragraph {
            children: vec![Node::text("hi")]
        }])
    );
    Ok(())
}

#[test]
fn empty_root_converts_to_empty_sequence() {
    assert!(mdast_to_slate(&Root::default(), None).is_empty());
}

#[test]
fn typed_output_exposes_elements_and_leaves() {
    let root = Root::new(vec![Node::Paragraph {
        children: vec![Node::Strong {
            children: vec![Node::text("x")],
        }],
    }]);
    let nodes = mdast_to_slate(&root, None);
    assert_eq!(nodes.len(), 1);

    let paragraph = nodes[0].as_element().expect("element");
    assert_eq!(paragraph.node_type, "p");
    let leaf = paragraph.children[0].as_text().expect("leaf");
    assert!(leaf.has_mark("bold"));
    assert!(!leaf.has_mark("italic"));
    assert_eq!(leaf.text, "x");
    assert!(matches!(paragraph.children[0], SlateNode::Text(_)));
}
