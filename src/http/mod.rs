//! HTTP transport layer — `NodeHttp` with per-method retry policies.

pub mod client;
pub mod retry;

pub use client::NodeHttp;
pub use retry::{RetryConfig, RetryPolicy};
