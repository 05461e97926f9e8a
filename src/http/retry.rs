//! Retry policies for node requests.

use std::time::Duration;

use crate::rpc::{Method, RequestOutcome};

/// Retry policy for a request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries — the default for POSTs, since injection is not idempotent.
    #[default]
    None,
    /// Retry on transport failures + 429/502/503/504. Default for GETs.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Default policy for a request method.
    pub fn for_method(method: Method) -> Self {
        match method {
            Method::Get => RetryPolicy::Idempotent,
            Method::Post => RetryPolicy::None,
        }
    }

    /// Resolve to a concrete config; `None` means "send once".
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// The default config for idempotent (GET) requests.
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 502, 503, 504],
            ..Self::default()
        }
    }

    /// Whether `outcome` is worth another attempt.
    ///
    /// Looks at the raw outcome so classification only ever runs once, on the
    /// final attempt.
    pub fn should_retry(&self, outcome: &RequestOutcome) -> bool {
        if outcome.is_success_status() {
            return false;
        }
        match outcome.status {
            Some(status) if status != crate::rpc::response::HTTP_OK => {
                self.retryable_statuses.contains(&status)
            }
            _ => outcome.transport_error.is_some(),
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
