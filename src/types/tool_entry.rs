use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::types::{WEB_SEARCH_TOOL_NAME, WEB_SEARCH_TOOL_TYPE, WebSearchTool20250305Param};

/// True when a raw `tools` entry already grants web search.
///
/// Either the versioned type or the tool name is sufficient.
pub fn is_web_search(entry: &Value) -> bool {
    entry.get("type").and_then(Value::as_str) == Some(WEB_SEARCH_TOOL_TYPE)
        || entry.get("name").and_then(Value::as_str) == Some(WEB_SEARCH_TOOL_NAME)
}

/// One entry of a request's `tools` sequence.
///
/// Entries are carried opaquely so that client-defined tools, other server
/// tools and anything the filter does not understand pass through untouched.
/// Only the `type` and `name` keys are ever inspected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ToolEntry(Value);

impl ToolEntry {
    /// Wrap an arbitrary JSON value as a tool entry.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The entry's `type`, when it is an object with a string `type`.
    pub fn tool_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// The entry's `name`, when it is an object with a string `name`.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// True when this entry already grants web search.
    pub fn is_web_search(&self) -> bool {
        is_web_search(&self.0)
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the entry, returning the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ToolEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<WebSearchTool20250305Param> for ToolEntry {
    fn from(tool: WebSearchTool20250305Param) -> Self {
        Self(json!({
            "type": tool.r#type,
            "name": tool.name,
            "max_uses": tool.max_uses,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_tool_is_not_web_search() {
        let entry = ToolEntry::new(json!({"type": "function", "name": "foo"}));
        assert_eq!(entry.tool_type(), Some("function"));
        assert_eq!(entry.name(), Some("foo"));
        assert!(!entry.is_web_search());
    }

    #[test]
    fn web_search_by_type_only() {
        let entry = ToolEntry::new(json!({"type": "web_search_20250305", "name": "search"}));
        assert!(entry.is_web_search());
    }

    #[test]
    fn web_search_by_name_only() {
        let entry = ToolEntry::new(json!({"name": "web_search"}));
        assert_eq!(entry.tool_type(), None);
        assert!(entry.is_web_search());
    }

    #[test]
    fn non_object_entries_pass_through() {
        let entry: ToolEntry = serde_json::from_str(r#""calculator""#).unwrap();
        assert!(!entry.is_web_search());
        assert_eq!(entry.tool_type(), None);
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#""calculator""#);
    }

    #[test]
    fn from_descriptor_preserves_key_order() {
        let entry = ToolEntry::from(WebSearchTool20250305Param::new(7));
        assert!(entry.is_web_search());
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"type":"web_search_20250305","name":"web_search","max_uses":7}"#
        );
    }
}
