use harkit_core::har::Value;
use url::Url;

/// Build a HAR `queryString` from a URL
///
/// Pairs are percent-decoded and kept in wire order, repeated names
/// included. A URL without a query gives an empty list.
pub fn query_string_from_url(url: &Url) -> Vec<Value> {
    url.query_pairs()
        .map(|(name, value)| Value::new(name, value))
        .collect()
}
