use serde::{Deserialize, Serialize};
use tokengen_compiler_css::compile_to_css;
use tokengen_compiler_restyle::compile_to_restyle;
use tokengen_parser::parse;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Message posted back to the plugin UI layer after a generate request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
    /// Transient notification text shown to the user
    pub notification: String,
}

fn generate_css(snapshot_json: &str) -> Result<String, String> {
    let snapshot = parse(snapshot_json).map_err(|e| format!("Parse error: {}", e))?;
    compile_to_css(&snapshot).map_err(|e| format!("CSS compile error: {}", e))
}

fn generate_restyle(snapshot_json: &str) -> Result<String, String> {
    let snapshot = parse(snapshot_json).map_err(|e| format!("Parse error: {}", e))?;
    compile_to_restyle(&snapshot).map_err(|e| format!("Restyle compile error: {}", e))
}

/// Dispatch a UI trigger message. Unrecognized types yield `None`.
fn handle_message(
    message_type: &str,
    snapshot_json: &str,
) -> Option<Result<PluginMessage, String>> {
    match message_type {
        "generate-css" => Some(generate_css(snapshot_json).map(|data| PluginMessage {
            kind: "css-generated".to_string(),
            data,
            notification: "CSS Generated!".to_string(),
        })),
        "generate-restyle" => Some(generate_restyle(snapshot_json).map(|data| PluginMessage {
            kind: "restyle-generated".to_string(),
            data,
            notification: "Restyle Generated!".to_string(),
        })),
        _ => None,
    }
}

/// Compile a snapshot JSON document to CSS
#[wasm_bindgen(js_name = generateCss)]
pub fn generate_css_js(snapshot_json: &str) -> Result<String, JsValue> {
    generate_css(snapshot_json).map_err(|e| JsValue::from_str(&e))
}

/// Compile a snapshot JSON document to a Restyle palette
#[wasm_bindgen(js_name = generateRestyle)]
pub fn generate_restyle_js(snapshot_json: &str) -> Result<String, JsValue> {
    generate_restyle(snapshot_json).map_err(|e| JsValue::from_str(&e))
}

/// Dispatch a UI trigger message.
///
/// Recognized `message_type` values are `generate-css` and
/// `generate-restyle`; anything else is ignored and yields `null`. The
/// result is a [`PluginMessage`] serialized as JSON, ready to post back to
/// the UI layer together with its notification text.
#[wasm_bindgen(js_name = handleMessage)]
pub fn handle_message_js(message_type: &str, snapshot_json: &str) -> Result<JsValue, JsValue> {
    let message = match handle_message(message_type, snapshot_json) {
        Some(result) => result.map_err(|e| JsValue::from_str(&e))?,
        None => return Ok(JsValue::NULL),
    };

    let json = serde_json::to_string(&message)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;
    Ok(JsValue::from_str(&json))
}
