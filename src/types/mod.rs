// Public modules
pub mod request_body;
pub mod response_body;
pub mod server_tool_usage;
pub mod tool_entry;
pub mod usage;
pub mod user_context;
pub mod web_search_tool_20250305_param;

// Re-exports
pub use request_body::RequestBody;
pub use response_body::ResponseBody;
pub use server_tool_usage::ServerToolUsage;
pub use tool_entry::ToolEntry;
pub use usage::Usage;
pub use user_context::UserContext;
pub use web_search_tool_20250305_param::{
    WEB_SEARCH_TOOL_NAME, WEB_SEARCH_TOOL_TYPE, WebSearchTool20250305Param,
};
