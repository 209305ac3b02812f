//! URL query-string helpers.
//!
//! Maps `key=value&...` query strings and full URLs to JSON objects of string
//! values. Percent-decoding follows form-urlencoding rules via the `url`
//! crate; malformed input degrades to an empty object rather than an error.

use serde_json::{Map, Value};
use url::Url;

/// Convert a raw query string (`a=1&b=2`) to a JSON object of string values.
///
/// Each pair is decoded and scoped independently; duplicate keys keep the
/// last value, and a pair without `=` maps its key to the empty string. An
/// empty query string yields `{}`.
pub fn query_string_to_json(query: &str) -> Value {
    let mut map = Map::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        map.insert(key.into_owned(), Value::String(value.into_owned()));
    }
    Value::Object(map)
}

/// Extract a URL's query mapping as a JSON object.
///
/// A URL without a query, or one that fails to parse at all, yields `{}`.
pub fn url_params_as_json(url: &str) -> Value {
    match Url::parse(url) {
        Ok(parsed) => match parsed.query() {
            Some(query) => query_string_to_json(query),
            None => Value::Object(Map::new()),
        },
        Err(_) => Value::Object(Map::new()),
    }
}
