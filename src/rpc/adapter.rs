//! Response adapters — pure functions from raw response bytes to a typed value.

use serde::de::DeserializeOwned;

/// Turns response bytes into a `T`, or `None` if they don't parse.
pub type ResponseAdapter<T> = fn(&[u8]) -> Option<T>;

/// UTF-8 text with surrounding whitespace and one pair of JSON quotes removed.
///
/// Nodes return scalar strings as JSON, e.g. `"0a1b"\n`.
pub fn string(bytes: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(bytes).ok()?.trim();
    let text = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    Some(text.to_string())
}

/// Integer sent either bare or as a quoted string.
pub fn integer(bytes: &[u8]) -> Option<i64> {
    string(bytes)?.parse().ok()
}

/// Any serde-deserializable type.
pub fn json<T: DeserializeOwned>(bytes: &[u8]) -> Option<T> {
    serde_json::from_slice(bytes).ok()
}

pub fn json_value(bytes: &[u8]) -> Option<serde_json::Value> {
    json(bytes)
}

pub fn raw(bytes: &[u8]) -> Option<Vec<u8>> {
    Some(bytes.to_vec())
}
