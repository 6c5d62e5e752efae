use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::ServerToolUsage;

/// Usage information reported on a response.
///
/// Only server tool usage is typed; token counts and any other accounting
/// fields ride along in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    /// The number of server tool requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_tool_use: Option<ServerToolUsage>,

    /// Remaining usage fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Usage {
    /// Create an empty `Usage`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server tool usage.
    pub fn with_server_tool_use(mut self, server_tool_use: ServerToolUsage) -> Self {
        self.server_tool_use = Some(server_tool_use);
        self
    }

    /// Set an additional usage field such as `input_tokens`.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Web search requests performed, zero when not reported.
    pub fn web_search_requests(&self) -> i64 {
        self.server_tool_use
            .as_ref()
            .and_then(|s| s.web_search_requests)
            .unwrap_or(0)
    }
}

impl From<Usage> for Value {
    fn from(usage: Usage) -> Self {
        let mut fields = usage.extra;
        if let Some(server_tool_use) = usage.server_tool_use {
            fields.insert("server_tool_use".to_string(), server_tool_use.into());
        }
        Value::Object(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn usage_deserialization() {
        let json = json!({
            "input_tokens": 50,
            "output_tokens": 100,
            "server_tool_use": {
                "web_search_requests": 5
            }
        });

        let usage: Usage = serde_json::from_value(json).unwrap();
        assert_eq!(usage.web_search_requests(), 5);
        assert_eq!(usage.extra["input_tokens"], json!(50));
        assert_eq!(usage.server_tool_use, Some(ServerToolUsage::new(5)));
    }

    #[test]
    fn usage_without_server_tools() {
        let usage: Usage =
            serde_json::from_value(json!({"input_tokens": 1, "output_tokens": 2})).unwrap();
        assert_eq!(usage.web_search_requests(), 0);
        let usage: Usage =
            serde_json::from_value(json!({"server_tool_use": {}})).unwrap();
        assert_eq!(usage.web_search_requests(), 0);
    }

    #[test]
    fn usage_into_value() {
        let usage = Usage::new()
            .with_field("input_tokens", json!(10))
            .with_server_tool_use(ServerToolUsage::new(3));
        assert_eq!(
            serde_json::to_string(&Value::from(usage)).unwrap(),
            r#"{"input_tokens":10,"server_tool_use":{"web_search_requests":3}}"#
        );
    }
}
