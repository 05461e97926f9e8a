//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The RPC error kind, if this error came from the RPC path.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            SdkError::Rpc(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// Closed set of RPC-path failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unknown,
    InvalidUrl,
    RpcError,
    UnexpectedResponse,
    UnexpectedRequestFormat,
    SigningError,
    PreapplicationError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::InvalidUrl => "invalidURL",
            Self::RpcError => "rpcError",
            Self::UnexpectedResponse => "unexpectedResponse",
            Self::UnexpectedRequestFormat => "unexpectedRequestFormat",
            Self::SigningError => "signingError",
            Self::PreapplicationError => "preapplicationError",
        }
    }

    /// Select a kind for a non-200 HTTP status.
    ///
    /// 4xx means the node rejected what we sent; 5xx means we could not make
    /// sense of what came back. Anything else is unknown.
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => Self::UnexpectedRequestFormat,
            500..=u16::MAX => Self::UnexpectedResponse,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An RPC-path failure: a kind plus optional context from the subsystem that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.description())]
pub struct RpcError {
    pub kind: ErrorKind,
    pub underlying: Option<String>,
}

impl RpcError {
    pub fn new(kind: ErrorKind, underlying: Option<String>) -> Self {
        Self { kind, underlying }
    }

    pub fn from_kind(kind: ErrorKind) -> Self {
        Self {
            kind,
            underlying: None,
        }
    }

    pub fn with_underlying(kind: ErrorKind, underlying: impl Into<String>) -> Self {
        Self {
            kind,
            underlying: Some(underlying.into()),
        }
    }

    /// Human-readable description. Never empty.
    pub fn description(&self) -> String {
        let kind = format!("(TezosError {})", self.kind);
        match &self.underlying {
            Some(underlying) => format!("{} {}", underlying, kind),
            None => kind,
        }
    }
}
