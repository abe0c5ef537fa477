//! URL query string helpers.

use url::form_urlencoded;

/// Collects every value of `key` from a raw query string, in order.
///
/// Keys may repeat. Keys and values are form-urlencoded, so `+` reads as a space and invalid
/// UTF-8 is replaced rather than rejected.
pub fn query_values(raw_query: &str, key: &str) -> Vec<String> {
    form_urlencoded::parse(raw_query.as_bytes())
        .filter(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
        .collect()
}
