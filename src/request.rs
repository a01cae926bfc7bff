//! Raw request model consumed by the resolver.
//!
//! Transport is out of scope: whatever HTTP layer sits in front hands over a
//! method, a path, a query string, and optionally the body text. Query pairs
//! are kept as an ordered list rather than a map because query keys may
//! repeat and the resolver needs the order they appeared in.

use http::Method;
use serde_json::Value;
use tracing::debug;

/// One inbound request, already read off the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path with the query string stripped.
    pub path: String,
    /// Query pairs in the order they appeared; keys may repeat.
    pub query_params: Vec<(String, String)>,
    /// Raw body text, if any. Parsed lazily by the resolver so a malformed
    /// document can be attributed to the body-sourced parameters.
    pub body: Option<String>,
}

impl RawRequest {
    /// Build a request from a method and a request target, splitting off the
    /// query string.
    #[must_use]
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (target, None),
        };
        let query_params = query.map(parse_query_params).unwrap_or_default();
        RawRequest {
            method,
            path: path.to_string(),
            query_params,
            body: None,
        }
    }

    #[must_use]
    pub fn get(target: &str) -> Self {
        Self::new(Method::GET, target)
    }

    #[must_use]
    pub fn post(target: &str) -> Self {
        Self::new(Method::POST, target)
    }

    #[must_use]
    pub fn put(target: &str) -> Self {
        Self::new(Method::PUT, target)
    }

    /// Attach a raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_json(self, value: &Value) -> Self {
        self.with_body(value.to_string())
    }

    /// All query values present under `name`, in query-string order.
    #[must_use]
    pub fn query_values(&self, name: &str) -> Vec<&str> {
        self.query_params
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Parse a query string into ordered key/value pairs.
///
/// Percent-encoding and `+` are decoded via `url::form_urlencoded`. Repeated
/// keys are kept as separate pairs in their original order.
#[must_use]
pub fn parse_query_params(query: &str) -> Vec<(String, String)> {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    debug!(param_count = pairs.len(), "Query params parsed");
    pairs
}

/// Parse the raw body text as a single JSON document.
///
/// The resolver turns a failure here into an `UnresolvableBody` rejection
/// for every body-sourced parameter.
pub fn parse_body(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_query_params() {
        let q = parse_query_params("x=1&y=2");
        assert_eq!(q, vec![("x".into(), "1".into()), ("y".into(), "2".into())]);
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let q = parse_query_params("q=foo&skip=0&q=bar");
        assert_eq!(
            q,
            vec![
                ("q".into(), "foo".into()),
                ("skip".into(), "0".into()),
                ("q".into(), "bar".into())
            ]
        );
    }

    #[test]
    fn test_percent_decoding() {
        let q = parse_query_params("q=a%20b&r=c+d");
        assert_eq!(q[0].1, "a b");
        assert_eq!(q[1].1, "c d");
    }

    #[test]
    fn test_target_split() {
        let req = RawRequest::get("/items/3?q=x");
        assert_eq!(req.path, "/items/3");
        assert_eq!(req.query_values("q"), vec!["x"]);
    }

    #[test]
    fn test_with_json_round_trip() {
        let req = RawRequest::post("/items").with_json(&json!({ "name": "hammer" }));
        let body = req.body.expect("body set");
        assert_eq!(parse_body(&body).expect("valid json"), json!({ "name": "hammer" }));
    }
}
