pub mod about;
pub mod catalog;
pub mod home;

use std::collections::HashMap;

pub type Query = HashMap<String, String>;

/// Builds `path?k=v&...` with form-urlencoded pairs, the same encoding
/// the query extractor reads back.
pub fn href(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    match serde_urlencoded::to_string(pairs) {
        Ok(query) => format!("{path}?{query}"),
        Err(err) => {
            tracing::warn!(path, error = %err, "failed to encode link query");
            path.to_string()
        }
    }
}

/// Reads `key` as a slide index; anything unparsable selects the first.
pub(crate) fn index_param(query: &Query, key: &str) -> usize {
    match query.get(key).map(|raw| raw.parse::<usize>()) {
        Some(Ok(i)) => i,
        Some(Err(_)) => {
            tracing::debug!(key, value = ?query.get(key), "ignoring invalid slide index");
            0
        }
        None => 0,
    }
}
