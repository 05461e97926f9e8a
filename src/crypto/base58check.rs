//! Base58-check encoding with prefix validation.
//!
//! Layout: `base58(prefix ‖ payload ‖ sha256d(prefix ‖ payload)[..4])`.

use crate::crypto::prefix::{self, Prefix};

/// Encode `payload` under `prefix`.
pub fn encode(prefix: &Prefix, payload: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(prefix.bytes.len() + payload.len());
    bytes.extend_from_slice(prefix.bytes);
    bytes.extend_from_slice(payload);
    bs58::encode(bytes).with_check().into_string()
}

/// Decode and verify checksum, returning prefix ‖ payload.
fn decode_checked(text: &str) -> Option<Vec<u8>> {
    bs58::decode(text).with_check(None).into_vec().ok()
}

/// Decode `text`, requiring exactly `prefix` and its payload length.
pub fn decode(text: &str, prefix: &Prefix) -> Option<Vec<u8>> {
    let decoded = decode_checked(text)?;
    if !prefix.matches(&decoded) {
        return None;
    }
    Some(decoded[prefix.bytes.len()..].to_vec())
}

/// Decode `text` against the whole prefix table.
pub fn decode_any(text: &str) -> Option<(&'static Prefix, Vec<u8>)> {
    let decoded = decode_checked(text)?;
    let prefix = prefix::identify(&decoded)?;
    Some((prefix, decoded[prefix.bytes.len()..].to_vec()))
}
