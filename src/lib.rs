//! # Tezos SDK
//!
//! A Rust client SDK for Tezos nodes: RPC request envelopes, response
//! classification, and multi-curve key identity (ed25519, secp256k1).
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Keys, signatures, base58-check, the RPC envelope and
//!    response classification (always available, no I/O)
//! 2. **Signing** — `Signer` capability, in-memory `Wallet`, `RemoteSigner`
//! 3. **HTTP transport** — `NodeHttp` with per-method retry policies
//! 4. **High-Level Client** — `TezosClient` with an `operations()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tezos_sdk::prelude::*;
//!
//! let client = TezosClient::builder()
//!     .base_url("https://rpc.tzbeta.net")
//!     .build()?;
//!
//! let wallet = Wallet::from_mnemonic(mnemonic, "", SigningCurve::Ed25519)
//!     .ok_or_else(|| SdkError::Validation("bad mnemonic".into()))?;
//! let hash = client
//!     .operations()
//!     .forge_sign_preapply_inject(contents, &wallet)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Curves, prefixes, base58-check, keys, signatures.
pub mod crypto;

/// RPC envelope: requests, adapters, outcome classification, endpoints.
pub mod rpc;

/// Operation watermarking, signed payloads, preapply inspection.
pub mod operation;

/// Unified SDK error types.
pub mod error;

/// Network defaults.
pub mod network;

// ── Layer 2: Signing ─────────────────────────────────────────────────────────

/// Signer capability and signing service.
pub mod signer;

/// In-memory wallet.
pub mod wallet;

// ── Layer 3: HTTP transport ──────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TezosClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Keys and signatures
    pub use crate::crypto::{PublicKey, SecretKey, Signature, SigningCurve};

    // Signing
    pub use crate::signer::{RemoteSigner, Signer, SigningService};
    pub use crate::wallet::Wallet;

    // RPC envelope
    pub use crate::rpc::endpoints::BlockHeader;
    pub use crate::rpc::{handle_response, Method, RequestOutcome, RpcRequest};

    // Operations
    pub use crate::operation::SignedOperationPayload;

    // Errors
    pub use crate::error::{ErrorKind, RpcError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_CHAIN, DEFAULT_NODE_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{OperationsClient, TezosClient, TezosClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
