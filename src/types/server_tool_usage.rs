use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Information about server tool usage for a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerToolUsage {
    /// The number of web search tool requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_search_requests: Option<i64>,

    /// Counters for other server tools.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerToolUsage {
    /// Create a new `ServerToolUsage` with the given web search requests count.
    pub fn new(web_search_requests: i64) -> Self {
        Self {
            web_search_requests: Some(web_search_requests),
            extra: Map::new(),
        }
    }
}

impl From<ServerToolUsage> for Value {
    fn from(usage: ServerToolUsage) -> Self {
        let mut fields = Map::new();
        if let Some(count) = usage.web_search_requests {
            fields.insert("web_search_requests".to_string(), Value::from(count));
        }
        fields.extend(usage.extra);
        Value::Object(fields)
    }
}
