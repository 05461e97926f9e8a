//! Endpoint constructors for the node RPCs used by the operation flow.

use serde::{Deserialize, Serialize};

use crate::rpc::{adapter, RpcRequest};

/// Subset of `/chains/{chain}/blocks/head/header`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub chain_id: String,
    pub hash: String,
    pub protocol: String,
    #[serde(default)]
    pub level: u64,
}

pub fn block_header(chain: &str) -> RpcRequest<BlockHeader> {
    RpcRequest::new(
        format!("/chains/{}/blocks/head/header", chain),
        adapter::json::<BlockHeader>,
    )
}

pub fn chain_id(chain: &str) -> RpcRequest<String> {
    RpcRequest::new(format!("/chains/{}/chain_id", chain), adapter::string)
}

pub fn head_hash(chain: &str) -> RpcRequest<String> {
    RpcRequest::new(format!("/chains/{}/blocks/head/hash", chain), adapter::string)
}

pub fn counter(chain: &str, address: &str) -> RpcRequest<i64> {
    RpcRequest::new(
        format!(
            "/chains/{}/blocks/head/context/contracts/{}/counter",
            chain, address
        ),
        adapter::integer,
    )
}

/// Forge `payload` (a JSON `{branch, contents}` object) into hex bytes.
pub fn forge_operation(chain_id: &str, head_hash: &str, payload: &str) -> RpcRequest<String> {
    let endpoint = format!(
        "/chains/{}/blocks/{}/helpers/forge/operations",
        chain_id, head_hash
    );
    RpcRequest::post(endpoint, payload, adapter::string)
}

/// Simulate signed operations (a JSON array) against `head_hash`.
pub fn preapply_operation(
    chain_id: &str,
    head_hash: &str,
    payload: &str,
) -> RpcRequest<serde_json::Value> {
    let endpoint = format!(
        "/chains/{}/blocks/{}/helpers/preapply/operations",
        chain_id, head_hash
    );
    RpcRequest::post(endpoint, payload, adapter::json_value)
}

/// Inject signed operation bytes. Resolves to the operation hash.
pub fn inject_operation(signed_bytes_hex: &str) -> RpcRequest<String> {
    let payload = serde_json::Value::String(signed_bytes_hex.to_string()).to_string();
    RpcRequest::post("/injection/operation", payload, adapter::string)
}
