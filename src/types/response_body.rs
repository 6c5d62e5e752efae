use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::types::Usage;

/// A chat-completion response as seen by the filter.
///
/// The response is held as its JSON object and is only ever read, so it
/// serializes back exactly as it arrived.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ResponseBody(Map<String, Value>);

impl ResponseBody {
    /// Create a response body carrying only `usage`.
    pub fn with_usage(usage: Usage) -> Self {
        let mut fields = Map::new();
        fields.insert("usage".to_string(), usage.into());
        Self(fields)
    }

    /// Set an additional field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Decode `usage`, when present and well formed.
    pub fn usage(&self) -> Option<Usage> {
        self.0
            .get("usage")
            .and_then(|usage| serde_json::from_value(usage.clone()).ok())
    }

    /// The number at `usage.server_tool_use.web_search_requests`.
    ///
    /// `None` when any level is missing or the count is not a number.
    pub fn web_search_requests(&self) -> Option<&Number> {
        self.0
            .get("usage")
            .and_then(|usage| usage.pointer("/server_tool_use/web_search_requests"))
            .and_then(as_number)
    }

    /// Read the same count straight out of an untyped body.
    pub fn web_search_requests_in(body: &Value) -> Option<&Number> {
        body.pointer("/usage/server_tool_use/web_search_requests")
            .and_then(as_number)
    }

    /// Borrow the response's JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the response, returning its JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

fn as_number(value: &Value) -> Option<&Number> {
    match value {
        Value::Number(number) => Some(number),
        _ => None,
    }
}

impl From<Map<String, Value>> for ResponseBody {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<ResponseBody> for Value {
    fn from(body: ResponseBody) -> Self {
        Value::Object(body.0)
    }
}
