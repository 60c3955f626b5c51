use mdslate_core::mdast::Root;
use mdslate_core::{TypeOverrides, mdast_to_slate as convert};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Converts an mdast tree (as produced by remark) into Slate nodes.
/// `options` is an optional partial type configuration.
#[wasm_bindgen(js_name = mdastToSlate)]
pub fn mdast_to_slate(tree: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let root: Root = serde_wasm_bindgen::from_value(tree).map_err(to_js_error)?;
    let overrides = overrides_from_js(options)?;
    let nodes = convert(&root, overrides.as_ref());
    // Plain objects rather than `Map`s, so the result loads into Slate as-is.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    nodes.serialize(&serializer).map_err(to_js_error)
}

fn overrides_from_js(value: JsValue) -> Result<Option<TypeOverrides>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let overrides = serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
    Ok(Some(overrides))
}

fn to_js_error(err: serde_wasm_bindgen::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
