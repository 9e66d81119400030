//! Shared helper functions for MCP tool implementations.

use serde_json::Value;

/// Build a structured error JSON string that LLMs can parse.
pub fn error_json(error_code: &str, message: &str) -> String {
    serde_json::json!({
        "error": error_code,
        "message": message,
    })
    .to_string()
}

/// Like [`error_json`], merging the fields of `extra` into the object.
pub fn error_json_with(error_code: &str, message: &str, extra: Value) -> String {
    let mut body = serde_json::json!({
        "error": error_code,
        "message": message,
    });
    if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), extra) {
        body.extend(extra);
    }
    body.to_string()
}
