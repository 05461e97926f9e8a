//! RPC envelope — request description, response adapters, classification.
//!
//! An [`RpcRequest<T>`] is inert: it names an endpoint, optional headers, an
//! optional payload and the adapter that turns response bytes into `T`. A
//! transport executes it and produces a [`RequestOutcome`]; [`handle_response`]
//! turns that outcome into `Result<T, RpcError>`.
//!
//! Requests without a payload are GETs; requests with one are POSTs.

pub mod adapter;
pub mod endpoints;
pub mod response;

pub use adapter::ResponseAdapter;
pub use response::{handle_response, RequestOutcome};

/// Re-usable header sets.
pub struct Headers;

impl Headers {
    pub fn content_type_json() -> Vec<(String, String)> {
        vec![("Content-Type".to_string(), "application/json".to_string())]
    }
}

/// HTTP method implied by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of a single RPC call whose result is a `T`.
pub struct RpcRequest<T> {
    endpoint: String,
    headers: Option<Vec<(String, String)>>,
    payload: Option<String>,
    adapter: ResponseAdapter<T>,
}

impl<T> RpcRequest<T> {
    /// A GET request.
    pub fn new(endpoint: impl Into<String>, adapter: ResponseAdapter<T>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: None,
            payload: None,
            adapter,
        }
    }

    /// A POST request with a JSON payload and the JSON content-type header.
    pub fn post(
        endpoint: impl Into<String>,
        payload: impl Into<String>,
        adapter: ResponseAdapter<T>,
    ) -> Self {
        Self::new(endpoint, adapter)
            .with_headers(Headers::content_type_json())
            .with_payload(payload)
    }

    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn headers(&self) -> Option<&[(String, String)]> {
        self.headers.as_deref()
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn adapter(&self) -> ResponseAdapter<T> {
        self.adapter
    }

    /// Whether this request mutates state (POST). True iff a payload is present.
    pub fn is_post_request(&self) -> bool {
        self.payload.is_some()
    }

    pub fn method(&self) -> Method {
        if self.is_post_request() {
            Method::Post
        } else {
            Method::Get
        }
    }
}

impl<T> Clone for RpcRequest<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            headers: self.headers.clone(),
            payload: self.payload.clone(),
            adapter: self.adapter,
        }
    }
}

impl<T> std::fmt::Debug for RpcRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcRequest")
            .field("endpoint", &self.endpoint)
            .field("headers", &self.headers)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}
