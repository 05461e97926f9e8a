//! Network defaults for the Tezos SDK.

/// Default node RPC base URL (a public mainnet node).
pub const DEFAULT_NODE_URL: &str = "https://rpc.tzbeta.net";

/// Default chain alias used in `/chains/{chain}/...` paths.
pub const DEFAULT_CHAIN: &str = "main";
