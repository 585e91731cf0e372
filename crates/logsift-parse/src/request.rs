//! Request-line decomposition.
//!
//! Splits the quoted request field (`GET /path?x=1 HTTP/2.0`) into method,
//! target, path, query, and protocol, and counts distinct query keys.

use std::collections::HashSet;

use url::Url;

/// Decomposed parts of a request line. Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParts {
    /// HTTP method.
    pub method: String,
    /// Request target exactly as logged.
    pub uri: String,
    /// Path portion of the target.
    pub path: String,
    /// Query string without the leading `?`.
    pub query: String,
    /// Protocol version, e.g. `HTTP/2.0`.
    pub proto: String,
}

/// Splits a request line on whitespace into its three parts, then separates
/// path and query.
///
/// Absolute request targets (containing `://`) are decomposed as URLs; an
/// unparseable absolute target falls back to the plain `?` split. Targets
/// with fewer than three whitespace-separated words leave the remaining
/// parts empty.
#[must_use]
pub fn split_request(request: &str) -> RequestParts {
    let mut words = request.split_whitespace();
    let method = words.next().unwrap_or_default().to_owned();
    let uri = words.next().unwrap_or_default().to_owned();
    let proto = words.next().unwrap_or_default().to_owned();

    let (path, query) = split_target(&uri);

    RequestParts {
        method,
        uri,
        path,
        query,
        proto,
    }
}

fn split_target(uri: &str) -> (String, String) {
    if !uri.is_empty() && uri.contains("://") {
        if let Ok(url) = Url::parse(uri) {
            return (
                url.path().to_owned(),
                url.query().unwrap_or_default().to_owned(),
            );
        }
    }
    match uri.split_once('?') {
        Some((path, query)) => (path.to_owned(), query.to_owned()),
        None => (uri.to_owned(), String::new()),
    }
}

/// Counts distinct query-string keys that carry a non-blank value,
/// using www-form-urlencoded semantics (`+` as space, percent decoding).
#[must_use]
pub fn count_query_keys(query: &str) -> usize {
    if query.is_empty() {
        return 0;
    }
    let keys: HashSet<String> = url::form_urlencoded::parse(query.as_bytes())
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, _)| key.into_owned())
        .collect();
    keys.len()
}
