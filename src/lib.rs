// Public modules
pub mod config;
pub mod cost;
pub mod error;
pub mod filter;
pub mod logger;
pub mod types;

mod observability;

// Re-exports
pub use config::{FilterArgs, FilterConfig};
pub use cost::{WEB_SEARCH_COST_PER_THOUSAND, web_search_cost};
pub use error::{Error, Result};
pub use filter::{Filter, WebSearchFilter, is_claude_model};
pub use logger::{FilterLogger, LogLevel, NullLogger, TracingLogger};
pub use observability::register_biometrics;
pub use types::*;
