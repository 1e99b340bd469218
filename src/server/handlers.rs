//! Helpers shared by tool implementations
//!
//! Argument extraction and MCP content wrapping.

use serde::Serialize;
use serde_json::{json, Value};

use crate::types::McpResult;

/// Build a text content response
pub fn text_response(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Wrap any serializable value as pretty JSON text content
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> McpResult<Value> {
    Ok(text_response(serde_json::to_string_pretty(value)?))
}

/// Required string argument
pub fn require_str<'a>(params: &'a Value, key: &str) -> McpResult<&'a str> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("Missing required argument '{}'", key).into())
}

/// Optional string argument
pub fn optional_str<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

/// Optional non-negative integer argument
pub fn optional_usize(params: &Value, key: &str) -> Option<usize> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| usize::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_helpers() {
        let params = json!({"query": "活血", "limit": 3});
        assert_eq!(require_str(&params, "query").unwrap(), "活血");
        assert!(require_str(&params, "id").is_err());
        assert_eq!(optional_str(&params, "id"), None);
        assert_eq!(optional_usize(&params, "limit"), Some(3));
    }

    #[test]
    fn test_json_response_shape() {
        let response = json_response(&vec!["a", "b"]).unwrap();
        assert_eq!(response["content"][0]["type"], "text");
        let text = response["content"][0]["text"].as_str().unwrap();
        let parsed: Vec<String> = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, vec!["a", "b"]);
    }
}
