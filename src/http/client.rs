//! Low-level HTTP transport — `NodeHttp`.
//!
//! Executes an [`RpcRequest`] against a node, records the exchange as a
//! [`RequestOutcome`], retries according to policy, and classifies the final
//! outcome. Endpoint-specific knowledge lives in `rpc::endpoints`.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::{ErrorKind, RpcError};
use crate::http::retry::RetryPolicy;
use crate::rpc::{handle_response, Method, RequestOutcome, RpcRequest};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for a node's RPC interface.
#[derive(Debug, Clone)]
pub struct NodeHttp {
    base_url: String,
    client: Client,
    default_headers: Vec<(String, String)>,
}

impl NodeHttp {
    pub fn new(base_url: &str) -> Result<Self, RpcError> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, Vec::new())
    }

    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        default_headers: Vec<(String, String)>,
    ) -> Result<Self, RpcError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            RpcError::with_underlying(ErrorKind::InvalidUrl, format!("{}: {}", base_url, e))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| RpcError::with_underlying(ErrorKind::Unknown, e.to_string()))?;

        Ok(Self {
            base_url,
            client,
            default_headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send with the default retry policy for the request's method.
    pub async fn send<T>(&self, rpc: &RpcRequest<T>) -> Result<T, RpcError> {
        self.send_with_retry(rpc, RetryPolicy::for_method(rpc.method()))
            .await
    }

    pub async fn send_with_retry<T>(
        &self,
        rpc: &RpcRequest<T>,
        retry: RetryPolicy,
    ) -> Result<T, RpcError> {
        let url = self.url_for(rpc)?;

        let Some(config) = retry.config() else {
            let outcome = self.execute(&url, rpc).await;
            return handle_response(outcome, rpc);
        };

        let mut attempt = 0;
        loop {
            let outcome = self.execute(&url, rpc).await;
            if attempt >= config.max_retries || !config.should_retry(&outcome) {
                return handle_response(outcome, rpc);
            }

            let delay = config.delay_for_attempt(attempt);
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                status = ?outcome.status,
                "Retrying request to {}",
                rpc.endpoint()
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    fn url_for<T>(&self, rpc: &RpcRequest<T>) -> Result<Url, RpcError> {
        let raw = format!("{}{}", self.base_url, rpc.endpoint());
        Url::parse(&raw)
            .map_err(|e| RpcError::with_underlying(ErrorKind::InvalidUrl, format!("{}: {}", raw, e)))
    }

    /// One round trip. Never fails; every failure is captured in the outcome.
    async fn execute<T>(&self, url: &Url, rpc: &RpcRequest<T>) -> RequestOutcome {
        let method = match rpc.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        tracing::debug!(method = rpc.method().as_str(), "Sending request to {}", rpc.endpoint());

        let mut req = self.client.request(method, url.clone());
        let request_headers = rpc.headers().unwrap_or_default();
        for (name, value) in self.default_headers.iter().chain(request_headers) {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(payload) = rpc.payload() {
            req = req.body(payload.to_string());
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return RequestOutcome::transport_failure(e),
        };
        let status = resp.status().as_u16();

        match resp.bytes().await {
            Ok(body) => RequestOutcome::response(status, body.to_vec()),
            Err(e) => RequestOutcome::new(Some(status), None, Some(Box::new(e))),
        }
    }
}
