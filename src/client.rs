//! High-level client — `TezosClient` with nested sub-client accessors.
//!
//! Chain queries live directly on the client; the operation flow has its own
//! sub-client in `operation/client.rs`.

use std::time::Duration;

use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{NodeHttp, RetryConfig, RetryPolicy};
use crate::operation::client::Operations;
use crate::rpc::endpoints::{self, BlockHeader};
use crate::rpc::{Method, RpcRequest};

pub use crate::operation::client::Operations as OperationsClient;

/// The primary entry point for talking to a node.
#[derive(Debug, Clone)]
pub struct TezosClient {
    pub(crate) http: NodeHttp,
    pub(crate) chain: String,
    /// Policy for GETs. POSTs are never retried.
    pub(crate) read_retry: RetryPolicy,
}

impl TezosClient {
    pub fn builder() -> TezosClientBuilder {
        TezosClientBuilder::default()
    }

    pub fn operations(&self) -> Operations<'_> {
        Operations { client: self }
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Execute any request, classifying the response.
    pub async fn send<T>(&self, rpc: &RpcRequest<T>) -> Result<T, SdkError> {
        let policy = match rpc.method() {
            Method::Get => self.read_retry.clone(),
            Method::Post => RetryPolicy::None,
        };
        Ok(self.http.send_with_retry(rpc, policy).await?)
    }

    pub async fn block_header(&self) -> Result<BlockHeader, SdkError> {
        self.send(&endpoints::block_header(&self.chain)).await
    }

    pub async fn chain_id(&self) -> Result<String, SdkError> {
        self.send(&endpoints::chain_id(&self.chain)).await
    }

    pub async fn head_hash(&self) -> Result<String, SdkError> {
        self.send(&endpoints::head_hash(&self.chain)).await
    }

    /// Current counter of an implicit account.
    pub async fn counter(&self, address: &str) -> Result<i64, SdkError> {
        self.send(&endpoints::counter(&self.chain, address)).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TezosClientBuilder {
    base_url: String,
    chain: String,
    timeout: Duration,
    read_retry: RetryPolicy,
    headers: Vec<(String, String)>,
}

impl Default for TezosClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_NODE_URL.to_string(),
            chain: crate::network::DEFAULT_CHAIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
            read_retry: RetryPolicy::Idempotent,
            headers: Vec::new(),
        }
    }
}

impl TezosClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn chain(mut self, chain: &str) -> Self {
        self.chain = chain.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry config for GET requests.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.read_retry = RetryPolicy::Custom(config);
        self
    }

    /// Disable retries entirely.
    pub fn no_retry(mut self) -> Self {
        self.read_retry = RetryPolicy::None;
        self
    }

    /// Header sent with every request.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> Result<TezosClient, SdkError> {
        Ok(TezosClient {
            http: NodeHttp::with_config(&self.base_url, self.timeout, self.headers)?,
            chain: self.chain,
            read_retry: self.read_retry,
        })
    }
}
