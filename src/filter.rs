//! The web search filter.
//!
//! A host pipeline calls [`WebSearchFilter::annotate_request`] before a request
//! is sent upstream and [`WebSearchFilter::annotate_response`] once the response
//! is back, and carries on with whatever body each returns.  The request side
//! adds Anthropic's server-side web search tool to requests for Claude models;
//! the response side reports how many searches were billed.

use std::sync::Arc;

use serde_json::{Number, Value};

use crate::config::FilterConfig;
use crate::cost::web_search_cost;
use crate::error::Result;
use crate::logger::{FilterLogger, LogLevel, TracingLogger};
use crate::observability::{
    REQUESTS, REQUESTS_MATCHED, RESPONSES, TOOLS_INJECTED, WEB_SEARCH_COST, WEB_SEARCH_REQUESTS,
};
use crate::types::{RequestBody, ResponseBody, ToolEntry, UserContext, WebSearchTool20250305Param};

/// The two hooks a host pipeline drives.
///
/// Hosts holding several filters as `Box<dyn Filter>` run them in descending
/// [`Filter::priority`] order.
pub trait Filter: Send + Sync {
    /// Ordering hint; higher runs first.
    fn priority(&self) -> u8;

    /// Transform a request before it is sent upstream.
    fn inlet(&self, body: RequestBody, user: Option<&UserContext>) -> RequestBody;

    /// Observe or transform a response after it is received.
    fn outlet(&self, body: ResponseBody, user: Option<&UserContext>) -> ResponseBody;
}

/// True when `model` names a Claude model.
///
/// Any occurrence of "claude", ignoring ASCII case, qualifies.
pub fn is_claude_model(model: &str) -> bool {
    model.to_ascii_lowercase().contains("claude")
}

/// Enables Anthropic web search for Claude models and logs its cost.
///
/// Holds nothing but its configuration and logger, so a single instance may be
/// shared across threads and called concurrently.
#[derive(Clone)]
pub struct WebSearchFilter {
    config: FilterConfig,
    logger: Arc<dyn FilterLogger>,
}

impl WebSearchFilter {
    /// Create a filter from `config`, logging through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any option is out of range.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            logger: Arc::new(TracingLogger),
        })
    }

    /// Send diagnostics to `logger` instead.
    pub fn with_logger(mut self, logger: Arc<dyn FilterLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// The configuration this filter was built with.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Add the web search tool to a request for a Claude model.
    ///
    /// The body is returned unchanged when the filter is disabled, when
    /// auto-enable is off, when the model is not a Claude model, or when some
    /// entry already grants web search.  Otherwise `tools` is created if absent
    /// or null and a descriptor capped at `max_searches` is appended after the
    /// existing entries.  Applying this twice never yields two descriptors.
    ///
    /// A `tools` value that is not an array is left alone and a warning logged.
    pub fn annotate_request(
        &self,
        mut body: RequestBody,
        _user: Option<&UserContext>,
    ) -> RequestBody {
        if !self.config.enabled {
            return body;
        }
        REQUESTS.click();
        if !is_claude_model(body.model_or_empty()) || !self.config.auto_enable {
            return body;
        }
        REQUESTS_MATCHED.click();
        if body.has_web_search() {
            return body;
        }

        let model = body.model_or_empty().to_string();
        let max_searches = self.config.max_searches;
        match body.tools_mut() {
            Some(tools) => {
                let descriptor = ToolEntry::from(WebSearchTool20250305Param::new(max_searches));
                tools.push(descriptor.into_value());
                TOOLS_INJECTED.click();
                self.logger.log(
                    LogLevel::Info,
                    &format!(
                        "✅ Anthropic Web Search enabled for {model} (max {max_searches} searches)"
                    ),
                );
            }
            None => {
                self.logger.log(
                    LogLevel::Warn,
                    &format!("tools for {model} is not an array; web search not added"),
                );
            }
        }
        body
    }

    /// Log the web searches billed on a response.  The body is returned untouched.
    pub fn annotate_response(
        &self,
        body: ResponseBody,
        _user: Option<&UserContext>,
    ) -> ResponseBody {
        if !self.config.enabled {
            return body;
        }
        self.record_searches(body.web_search_requests());
        body
    }

    /// [`annotate_request`](Self::annotate_request) for hosts holding untyped JSON.
    ///
    /// The value is worked on in place, so a body that needs no descriptor
    /// comes back identical, key order included.
    ///
    /// # Errors
    ///
    /// Fails only when an enabled filter is handed something other than a JSON
    /// object.
    pub fn annotate_request_json(&self, body: Value, user: Option<&UserContext>) -> Result<Value> {
        if !self.config.enabled {
            return Ok(body);
        }
        let request = RequestBody::try_from(body)?;
        Ok(self.annotate_request(request, user).into())
    }

    /// [`annotate_response`](Self::annotate_response) for hosts holding untyped JSON.
    pub fn annotate_response_json(&self, body: Value, _user: Option<&UserContext>) -> Value {
        if !self.config.enabled {
            return body;
        }
        self.record_searches(ResponseBody::web_search_requests_in(&body));
        body
    }

    fn record_searches(&self, count: Option<&Number>) {
        RESPONSES.click();
        let Some(count) = count else {
            return;
        };
        let searches = count.as_f64().unwrap_or(0.0);
        if searches > 0.0 {
            let cost = web_search_cost(searches);
            WEB_SEARCH_REQUESTS.count(count.as_u64().unwrap_or(searches as u64));
            WEB_SEARCH_COST.add(cost);
            self.logger.log(
                LogLevel::Info,
                &format!("🔍 Web searches performed: {count} (cost: ${cost:.4})"),
            );
        }
    }
}

impl Default for WebSearchFilter {
    fn default() -> Self {
        Self {
            config: FilterConfig::default(),
            logger: Arc::new(TracingLogger),
        }
    }
}

impl std::fmt::Debug for WebSearchFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebSearchFilter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Filter for WebSearchFilter {
    fn priority(&self) -> u8 {
        self.config.priority
    }

    fn inlet(&self, body: RequestBody, user: Option<&UserContext>) -> RequestBody {
        self.annotate_request(body, user)
    }

    fn outlet(&self, body: ResponseBody, user: Option<&UserContext>) -> ResponseBody {
        self.annotate_response(body, user)
    }
}
