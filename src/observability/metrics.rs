//! Metrics collection.
//!
//! # Metrics
//! - `route_lookups_total` (counter): lookups by key, labelled `result` = hit/miss
//! - `route_matches_total` (counter): successful resolutions, labelled by `route`

/// Record a lookup by key.
pub fn record_lookup(found: bool) {
    let result = if found { "hit" } else { "miss" };
    ::metrics::counter!("route_lookups_total", "result" => result).increment(1);
}

/// Record a path resolved to a route.
pub fn record_match(route: &str) {
    ::metrics::counter!("route_matches_total", "route" => route.to_string()).increment(1);
}
