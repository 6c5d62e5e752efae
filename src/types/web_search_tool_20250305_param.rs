use serde::{Deserialize, Serialize};

/// The versioned tool type Anthropic uses for server-side web search.
pub const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";

/// The name under which the model calls the web search tool.
pub const WEB_SEARCH_TOOL_NAME: &str = "web_search";

/// Parameters for the web search tool.
///
/// This is the descriptor appended to a request's `tools` so that the model may
/// search the web on Anthropic's infrastructure.  Its wire shape is fixed:
/// `{"type": "web_search_20250305", "name": "web_search", "max_uses": N}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebSearchTool20250305Param {
    /// The type of tool, identifying the version.
    #[serde(default = "default_tool_type")]
    pub r#type: String,

    /// Name of the tool. This is how the tool will be called by the model and in `tool_use` blocks.
    #[serde(default = "default_name")]
    pub name: String,

    /// Maximum number of times the tool can be used in the API request.
    pub max_uses: u32,
}

fn default_name() -> String {
    WEB_SEARCH_TOOL_NAME.to_string()
}

fn default_tool_type() -> String {
    WEB_SEARCH_TOOL_TYPE.to_string()
}

impl WebSearchTool20250305Param {
    /// Creates a new web search descriptor capped at `max_uses` searches.
    pub fn new(max_uses: u32) -> Self {
        Self {
            r#type: default_tool_type(),
            name: default_name(),
            max_uses,
        }
    }
}
