use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::ToolEntry;
use crate::types::tool_entry::is_web_search;

/// An outgoing chat-completion request as seen by the filter.
///
/// The request is held as its JSON object, so keys keep their order and
/// values such as an explicit `"tools": null` survive untouched.  Only `model`
/// and `tools` are ever read, and only `tools` is ever written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    /// Create a request addressed to `model` with no tools.
    pub fn new(model: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("model".to_string(), Value::String(model.into()));
        Self(fields)
    }

    /// Set the tools.
    pub fn with_tools(self, tools: Vec<ToolEntry>) -> Self {
        let tools = tools.into_iter().map(ToolEntry::into_value).collect();
        self.with_field("tools", Value::Array(tools))
    }

    /// Set an additional passthrough field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// The model identifier, when it is a string.
    pub fn model(&self) -> Option<&str> {
        self.0.get("model").and_then(Value::as_str)
    }

    /// The model identifier, or the empty string when absent.
    pub fn model_or_empty(&self) -> &str {
        self.model().unwrap_or("")
    }

    /// The `tools` entries, when `tools` is an array.
    pub fn tools(&self) -> Option<&[Value]> {
        self.0
            .get("tools")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// True when any tool entry already grants web search.
    pub fn has_web_search(&self) -> bool {
        self.tools()
            .is_some_and(|tools| tools.iter().any(is_web_search))
    }

    /// The `tools` array for appending, created in place when absent or null.
    ///
    /// Returns `None`, leaving the request as it was, when `tools` holds
    /// something other than an array.
    pub fn tools_mut(&mut self) -> Option<&mut Vec<Value>> {
        if matches!(self.0.get("tools"), None | Some(Value::Null)) {
            self.0.insert("tools".to_string(), Value::Array(Vec::new()));
        }
        self.0.get_mut("tools").and_then(Value::as_array_mut)
    }

    /// Borrow the request's JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the request, returning its JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RequestBody {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for RequestBody {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Err(Error::serialization(
                "request body must be a JSON object",
                None,
            )),
        }
    }
}

impl From<RequestBody> for Value {
    fn from(body: RequestBody) -> Self {
        Value::Object(body.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_round_trip_is_exact() {
        let text = r#"{"max_tokens":1024,"tools":null,"model":null,"messages":[{"role":"user","content":"hi"}],"stream":true}"#;
        let body: RequestBody = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&body).unwrap(), text);
    }

    #[test]
    fn request_body_missing_model_is_empty() {
        let body: RequestBody = serde_json::from_value(json!({"messages": []})).unwrap();
        assert_eq!(body.model(), None);
        assert_eq!(body.model_or_empty(), "");
        assert!(!body.has_web_search());
    }

    #[test]
    fn request_body_non_string_model_is_empty() {
        let body = RequestBody::try_from(json!({"model": 4})).unwrap();
        assert_eq!(body.model_or_empty(), "");
    }

    #[test]
    fn tools_mut_creates_when_absent_or_null() {
        let mut body = RequestBody::new("claude-sonnet-4-5");
        assert!(body.tools_mut().is_some_and(|tools| tools.is_empty()));
        assert_eq!(body.as_map()["tools"], json!([]));

        let mut body = RequestBody::try_from(json!({"tools": null, "model": "x"})).unwrap();
        assert!(body.tools_mut().is_some());
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"tools":[],"model":"x"}"#
        );
    }

    #[test]
    fn tools_mut_leaves_non_arrays() {
        let mut body = RequestBody::try_from(json!({"tools": "web_search"})).unwrap();
        assert!(body.tools_mut().is_none());
        assert_eq!(body.as_map()["tools"], json!("web_search"));
        assert!(body.tools().is_none());
    }

    #[test]
    fn request_body_detects_web_search() {
        let body = RequestBody::new("claude-opus-4-5").with_tools(vec![
            ToolEntry::new(json!({"type": "function", "name": "foo"})),
            ToolEntry::new(json!({"name": "web_search"})),
        ]);
        assert!(body.has_web_search());
        assert_eq!(body.tools().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn request_body_rejects_non_objects() {
        let err = RequestBody::try_from(json!([1, 2])).unwrap_err();
        assert!(err.is_serialization());
        assert!(serde_json::from_value::<RequestBody>(json!("hello")).is_err());
    }

    #[test]
    fn request_body_into_value() {
        let body = RequestBody::new("gpt-4").with_field("stream", json!(false));
        assert_eq!(
            Value::from(body),
            json!({"model": "gpt-4", "stream": false})
        );
    }
}
