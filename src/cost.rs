//! Web search pricing.

/// Dollars charged per thousand web searches, on top of token costs.
pub const WEB_SEARCH_COST_PER_THOUSAND: f64 = 10.0;

/// Estimated dollar cost of `searches` web searches.
pub fn web_search_cost(searches: f64) -> f64 {
    (searches / 1000.0) * WEB_SEARCH_COST_PER_THOUSAND
}
