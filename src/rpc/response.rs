//! Response classification.
//!
//! Turns a completed exchange into a typed value or an [`RpcError`]. The order
//! of checks is fixed:
//!
//! 1. a status other than 200 → error kind by status range, body text attached;
//! 2. a transport error → `rpcError` with its description;
//! 3. missing body or adapter failure → `unexpectedResponse`;
//! 4. otherwise the parsed value.

use crate::error::{ErrorKind, RpcError};
use crate::rpc::{ResponseAdapter, RpcRequest};

/// The only status treated as success.
pub const HTTP_OK: u16 = 200;

type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Raw result of executing a request: status, body, transport error.
#[derive(Debug, Default)]
pub struct RequestOutcome {
    pub status: Option<u16>,
    pub body: Option<Vec<u8>>,
    pub transport_error: Option<TransportError>,
}

impl RequestOutcome {
    pub fn new(
        status: Option<u16>,
        body: Option<Vec<u8>>,
        transport_error: Option<TransportError>,
    ) -> Self {
        Self {
            status,
            body,
            transport_error,
        }
    }

    /// A response that arrived with `status` and `body`.
    pub fn response(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(Some(status), Some(body.into()), None)
    }

    /// A request that failed before any response arrived.
    pub fn transport_failure(error: impl Into<TransportError>) -> Self {
        Self::new(None, None, Some(error.into()))
    }

    /// Status 200 and no transport error. Only such an outcome reaches the
    /// adapter.
    pub fn is_success_status(&self) -> bool {
        self.status == Some(HTTP_OK) && self.transport_error.is_none()
    }
}

/// Classify `outcome` for the request that produced it.
pub fn handle_response<T>(outcome: RequestOutcome, request: &RpcRequest<T>) -> Result<T, RpcError> {
    classify(outcome, request.adapter())
}

/// Classify `outcome` with an explicit adapter.
pub fn classify<T>(outcome: RequestOutcome, adapter: ResponseAdapter<T>) -> Result<T, RpcError> {
    if let Some(status) = outcome.status.filter(|s| *s != HTTP_OK) {
        let kind = ErrorKind::from_status(status);
        let underlying = outcome
            .body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
            .map(str::to_string);
        tracing::warn!(status, kind = kind.as_str(), "RPC returned non-200 status");
        return Err(RpcError::new(kind, underlying));
    }

    if let Some(error) = outcome.transport_error {
        tracing::warn!(kind = ErrorKind::RpcError.as_str(), "RPC transport failed: {}", error);
        return Err(RpcError::with_underlying(ErrorKind::RpcError, error.to_string()));
    }

    match outcome.body.as_deref().and_then(adapter) {
        Some(value) => Ok(value),
        None => {
            tracing::warn!(
                kind = ErrorKind::UnexpectedResponse.as_str(),
                "RPC response missing or unparseable"
            );
            Err(RpcError::from_kind(ErrorKind::UnexpectedResponse))
        }
    }
}
