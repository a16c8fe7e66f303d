//! Query string parsing module
//!
//! Splits a raw query string into key/value pairs. Values are taken verbatim;
//! the service only accepts plain tokens and numbers, so no percent-decoding
//! is applied.

use std::collections::HashMap;

/// Parse a query string into a map
///
/// A pair without `=` maps to an empty value. For a repeated key the first
/// occurrence wins.
///
/// # Examples
/// ```
/// use bmi_service::http::query::parse;
/// let params = parse("gender=male&height=1.75");
/// assert_eq!(params.get("gender").map(String::as_str), Some("male"));
/// assert_eq!(params.get("height").map(String::as_str), Some("1.75"));
/// assert_eq!(params.get("weight"), None);
/// ```
pub fn parse(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        params
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    params
}
