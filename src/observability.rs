use biometrics::{Collector, Counter, Moments};

pub(crate) static REQUESTS: Counter = Counter::new("websearch_filter.requests");
pub(crate) static REQUESTS_MATCHED: Counter = Counter::new("websearch_filter.requests_matched");
pub(crate) static TOOLS_INJECTED: Counter = Counter::new("websearch_filter.tools_injected");

pub(crate) static RESPONSES: Counter = Counter::new("websearch_filter.responses");
pub(crate) static WEB_SEARCH_REQUESTS: Counter =
    Counter::new("websearch_filter.web_search_requests");
pub(crate) static WEB_SEARCH_COST: Moments =
    Moments::new("websearch_filter.web_search_cost_dollars");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&REQUESTS);
    collector.register_counter(&REQUESTS_MATCHED);
    collector.register_counter(&TOOLS_INJECTED);

    collector.register_counter(&RESPONSES);
    collector.register_counter(&WEB_SEARCH_REQUESTS);
    collector.register_moments(&WEB_SEARCH_COST);
}
