//! Preapply result inspection.
//!
//! A preapply response is an array of operations, each with `contents`
//! entries carrying `metadata.operation_result.status`. Anything other than
//! `"applied"` means the node would reject the operation.

use serde_json::Value;

use crate::error::{ErrorKind, RpcError};

const APPLIED: &str = "applied";

/// Check a preapply response, failing with `preapplicationError` if any
/// content did not apply.
pub fn check(response: &Value) -> Result<(), RpcError> {
    let Some(operations) = response.as_array() else {
        return Err(RpcError::from_kind(ErrorKind::UnexpectedResponse));
    };

    for operation in operations {
        let contents = operation
            .get("contents")
            .and_then(Value::as_array)
            .ok_or_else(|| RpcError::from_kind(ErrorKind::UnexpectedResponse))?;

        for content in contents {
            let result = content
                .get("metadata")
                .and_then(|m| m.get("operation_result"));
            let Some(result) = result else {
                continue;
            };
            let status = result.get("status").and_then(Value::as_str).unwrap_or("");
            if status != APPLIED {
                let underlying = match result.get("errors") {
                    Some(errors) => errors.to_string(),
                    None => format!("operation status: {}", status),
                };
                tracing::warn!(status, "preapply rejected operation");
                return Err(RpcError::with_underlying(
                    ErrorKind::PreapplicationError,
                    underlying,
                ));
            }
        }
    }

    Ok(())
}
