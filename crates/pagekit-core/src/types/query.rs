//! Query-string handling for generated page links.
//!
//! Query strings use `application/x-www-form-urlencoded` rules (via
//! `form_urlencoded`): `+` is a space, and everything outside ASCII
//! alphanumerics and `*-._` is percent-encoded on output.

use std::collections::HashMap;

/// Request query parameters as received from the URL.
pub type QueryParams = HashMap<String, String>;

/// Split a request URL into its path and its query string (if any).
pub fn split_url(original_url: &str) -> (&str, Option<&str>) {
    match original_url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (original_url, None),
    }
}

/// Parse a query string into ordered, decoded key/value pairs.
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

/// Parse the query string of a URL into a map. Later duplicates win.
pub fn query_params_from_url(original_url: &str) -> QueryParams {
    split_url(original_url)
        .1
        .map(parse_query_string)
        .unwrap_or_default()
        .into_iter()
        .collect()
}

/// Serialize ordered pairs back into a query string.
pub fn serialize_query_string(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Set `key` to `value`: the first occurrence is overwritten and any later
/// duplicates dropped, or the pair is appended when the key is absent.
fn set_param(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value;
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = index <= first || k != key;
                index += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value)),
    }
}

/// Canonical link template derived once per request.
///
/// Carries the original path and query parameters with the resolved page
/// and page size filled in. Link variants differ only in the page value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    base_path: String,
    pairs: Vec<(String, String)>,
    page_key: String,
}

impl UrlTemplate {
    /// Build the template from the URL the request arrived on.
    pub fn from_original_url(
        original_url: &str,
        page_key: &str,
        page: u64,
        rows_key: &str,
        rows_per_page: u64,
    ) -> Self {
        let (base_path, query) = split_url(original_url);
        let mut pairs = query.map(parse_query_string).unwrap_or_default();
        set_param(&mut pairs, page_key, page.to_string());
        set_param(&mut pairs, rows_key, rows_per_page.to_string());

        Self {
            base_path: base_path.to_string(),
            pairs,
            page_key: page_key.to_string(),
        }
    }

    /// URL for the given page.
    pub fn with_page(&self, page: u64) -> String {
        let mut pairs = self.pairs.clone();
        set_param(&mut pairs, &self.page_key, page.to_string());
        format!("{}?{}", self.base_path, serialize_query_string(&pairs))
    }
}
