//! Operation signing — watermarking forged bytes and composing signed payloads.
//!
//! The node forges an operation into hex bytes; the client signs
//! `watermark ‖ bytes` and sends the signed payload to preapply and injection.

#[cfg(feature = "http")]
pub mod client;
pub mod payload;
pub mod preapply;

pub use payload::SignedOperationPayload;

use serde_json::{json, Map, Value};

use crate::error::{ErrorKind, RpcError};
use crate::signer::{Signer, SigningService};

/// Magic byte prepended to forged bytes before signing generic operations.
pub const GENERIC_OPERATION_WATERMARK: u8 = 0x03;

/// Unsigned operation object sent to the forge RPC.
pub fn unsigned_operation(branch: &str, contents: Vec<Value>) -> Map<String, Value> {
    let mut operation = Map::new();
    operation.insert("branch".to_string(), json!(branch));
    operation.insert("contents".to_string(), Value::Array(contents));
    operation
}

/// Sign forged hex bytes with the generic operation watermark.
///
/// Fails with `signingError` if the hex is malformed or the signer declines.
pub fn sign_forged(
    forged_operation: &str,
    signer: &dyn Signer,
) -> Result<SignedOperationPayload, RpcError> {
    let forged = hex::decode(forged_operation).map_err(|e| {
        RpcError::with_underlying(ErrorKind::SigningError, format!("invalid forged hex: {}", e))
    })?;

    let mut watermarked = Vec::with_capacity(forged.len() + 1);
    watermarked.push(GENERIC_OPERATION_WATERMARK);
    watermarked.extend_from_slice(&forged);

    let signature = SigningService::sign(&watermarked, signer)
        .ok_or_else(|| RpcError::from_kind(ErrorKind::SigningError))?;
    Ok(SignedOperationPayload::new(forged_operation, signature))
}
