//! Integration tests for the HTTP transport and the operation flow.
//!
//! Each test spins up an in-process HTTP stub on `127.0.0.1:0` that answers
//! with canned node responses, so no network access is required.
//!
//! Run with:
//! ```bash
//! cargo test --test http_integration
//! ```

#![cfg(feature = "http")]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use tezos_sdk::error::ErrorKind;
use tezos_sdk::http::{NodeHttp, RetryConfig};
use tezos_sdk::operation::GENERIC_OPERATION_WATERMARK;
use tezos_sdk::prelude::*;
use tezos_sdk::rpc::endpoints;

const MNEMONIC: &str =
    "soccer click number muscle police corn couch bitter gorilla camp camera shove expire praise pill";

const CHAIN_ID: &str = "NetXdQprcVkpaWU";
const HEAD: &str = "BLockGenesisGenesisGenesisGenesisGenesisf79b5d1CoW2";
const PROTOCOL: &str = "PtParisBxoLz5gzMmn3d9WBQNoPSZakgnkMC2VNuQ3KXfUtUQeZ";
const FORGED: &str = "0a0b0c0d";

/// A request as seen by the stub: method, path, body.
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    body: String,
}

type Route = dyn Fn(&str, &str, usize) -> (u16, String) + Send + Sync;

struct Stub {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn count(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }
}

/// Start a stub node. `route(method, path, nth_call_to_path)` picks the response.
async fn spawn_stub<F>(route: F) -> Stub
where
    F: Fn(&str, &str, usize) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let route: Arc<Route> = Arc::new(route);

    let recorded = requests.clone();
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let recorded = recorded.clone();
            let route = route.clone();
            tokio::spawn(async move {
                serve(stream, recorded, route).await;
            });
        }
    });

    Stub {
        base_url: format!("http://{}", addr),
        requests,
    }
}

async fn serve(mut stream: TcpStream, recorded: Arc<Mutex<Vec<Recorded>>>, route: Arc<Route>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let path = request_line.next().unwrap_or("").to_string();
    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();

    let nth = {
        let mut recorded = recorded.lock().unwrap();
        let nth = recorded.iter().filter(|r| r.path == path).count();
        recorded.push(Recorded {
            method: method.clone(),
            path: path.clone(),
            body,
        });
        nth
    };

    let (status, response_body) = route(&method, &path, nth);
    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        response_body.len(),
        response_body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_retries: 2,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        backoff_factor: 2.0,
        jitter: false,
        retryable_statuses: vec![429, 502, 503, 504],
    }
}

fn client_for(stub: &Stub) -> TezosClient {
    TezosClient::builder()
        .base_url(&stub.base_url)
        .retry(fast_retry())
        .build()
        .unwrap()
}

fn header_json() -> String {
    json!({
        "chain_id": CHAIN_ID,
        "hash": HEAD,
        "protocol": PROTOCOL,
        "level": 42
    })
    .to_string()
}

fn preapply_json(status: &str) -> String {
    json!([{
        "contents": [{
            "kind": "transaction",
            "metadata": { "operation_result": { "status": status } }
        }]
    }])
    .to_string()
}

fn forge_path() -> String {
    format!("/chains/{}/blocks/{}/helpers/forge/operations", CHAIN_ID, HEAD)
}

fn preapply_path() -> String {
    format!("/chains/{}/blocks/{}/helpers/preapply/operations", CHAIN_ID, HEAD)
}

fn node_route(
    preapply_status: &'static str,
) -> impl Fn(&str, &str, usize) -> (u16, String) + Send + Sync + 'static {
    let forge = forge_path();
    let preapply = preapply_path();
    move |_method: &str, path: &str, _nth: usize| match path {
        "/chains/main/blocks/head/header" => (200, header_json()),
        "/injection/operation" => (200, "\"ooOperationHash\"\n".to_string()),
        p if p == forge => (200, format!("\"{}\"\n", FORGED)),
        p if p == preapply => (200, preapply_json(preapply_status)),
        _ => (404, "not found".to_string()),
    }
}

fn transaction() -> Value {
    json!({
        "kind": "transaction",
        "amount": "1",
        "destination": "tz1Y3qqTg9HdrzZGbEjiCPmwuZ7fWVxpPtRw"
    })
}

// ── Plain requests ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_string_success() {
    let stub = spawn_stub(|_, _, _| (200, format!("\"{}\"\n", HEAD))).await;
    let client = client_for(&stub);

    assert_eq!(client.head_hash().await.unwrap(), HEAD);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/chains/main/blocks/head/hash");
}

#[tokio::test]
async fn test_counter_parses_quoted_integer() {
    let stub = spawn_stub(|_, _, _| (200, "\"1337\"\n".to_string())).await;
    let client = client_for(&stub);

    let counter = client
        .counter("tz1Y3qqTg9HdrzZGbEjiCPmwuZ7fWVxpPtRw")
        .await
        .unwrap();
    assert_eq!(counter, 1337);
}

#[tokio::test]
async fn test_block_header_json() {
    let stub = spawn_stub(|_, _, _| (200, header_json())).await;
    let header = client_for(&stub).block_header().await.unwrap();
    assert_eq!(header.chain_id, CHAIN_ID);
    assert_eq!(header.protocol, PROTOCOL);
    assert_eq!(header.level, 42);
}

// ── Classification over the wire ─────────────────────────────────────────────

#[tokio::test]
async fn test_400_is_unexpected_request_format() {
    let stub = spawn_stub(|_, _, _| (400, "bad request body".to_string())).await;
    let err = client_for(&stub).chain_id().await.unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::UnexpectedRequestFormat));
    let SdkError::Rpc(rpc) = err else {
        panic!("expected an RPC error");
    };
    assert_eq!(rpc.underlying.as_deref(), Some("bad request body"));
    assert_eq!(
        rpc.to_string(),
        "bad request body (TezosError unexpectedRequestFormat)"
    );
}

#[tokio::test]
async fn test_500_is_unexpected_response() {
    let stub = spawn_stub(|_, _, _| (500, "boom".to_string())).await;
    let err = client_for(&stub).chain_id().await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnexpectedResponse));
    // 500 is not in the retryable set.
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn test_unparseable_body_is_unexpected_response() {
    let stub = spawn_stub(|_, _, _| (200, "{ not json".to_string())).await;
    let err = client_for(&stub).block_header().await.unwrap_err();
    let SdkError::Rpc(rpc) = err else {
        panic!("expected an RPC error");
    };
    assert_eq!(rpc.kind, ErrorKind::UnexpectedResponse);
    assert_eq!(rpc.underlying, None);
}

#[tokio::test]
async fn test_connection_refused_is_rpc_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = NodeHttp::new(&format!("http://{}", addr)).unwrap();
    let err = http
        .send_with_retry(&endpoints::chain_id("main"), RetryPolicy::None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::RpcError);
    assert!(err.underlying.is_some());
}

// ── Retries ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_retries_on_503() {
    let stub = spawn_stub(|_, _, nth| {
        if nth == 0 {
            (503, "busy".to_string())
        } else {
            (200, "\"NetXdQprcVkpaWU\"".to_string())
        }
    })
    .await;

    let chain_id = client_for(&stub).chain_id().await.unwrap();
    assert_eq!(chain_id, CHAIN_ID);
    assert_eq!(stub.count("/chains/main/chain_id"), 2);
}

#[tokio::test]
async fn test_retries_exhausted_classifies_final_outcome() {
    let stub = spawn_stub(|_, _, _| (503, "still busy".to_string())).await;
    let err = client_for(&stub).chain_id().await.unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::UnexpectedResponse));
    assert_eq!(stub.requests().len(), 3);
}

#[tokio::test]
async fn test_post_is_never_retried() {
    let stub = spawn_stub(|_, _, _| (503, "busy".to_string())).await;
    let client = client_for(&stub);
    let err = client
        .send(&endpoints::inject_operation("00"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::UnexpectedResponse));
    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].body, "\"00\"");
}

// ── Operation flow ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_forge_sign_preapply_inject() {
    let stub = spawn_stub(node_route("applied")).await;
    let client = client_for(&stub);
    let wallet = Wallet::from_mnemonic(MNEMONIC, "", SigningCurve::Ed25519).unwrap();

    let hash = client
        .operations()
        .forge_sign_preapply_inject(vec![transaction()], &wallet)
        .await
        .unwrap();
    assert_eq!(hash, "ooOperationHash");

    let requests = stub.requests();
    let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/chains/main/blocks/head/header".to_string(),
            forge_path(),
            preapply_path(),
            "/injection/operation".to_string(),
        ]
    );

    // Forge body carries branch + contents.
    let forge_body: Value = serde_json::from_str(&requests[1].body).unwrap();
    assert_eq!(forge_body["branch"], json!(HEAD));
    assert_eq!(forge_body["contents"][0], transaction());

    // Preapply body is a one-element array with protocol and signature.
    let preapply_body: Value = serde_json::from_str(&requests[2].body).unwrap();
    assert_eq!(preapply_body[0]["protocol"], json!(PROTOCOL));
    assert_eq!(preapply_body[0]["branch"], json!(HEAD));
    let signature = Signature::from_base58(preapply_body[0]["signature"].as_str().unwrap()).unwrap();

    let mut watermarked = vec![GENERIC_OPERATION_WATERMARK];
    watermarked.extend(hex::decode(FORGED).unwrap());
    assert!(wallet.public_key().verify(&signature, &watermarked));

    // Injected bytes are forged hex followed by the raw signature.
    let injected: String = serde_json::from_str(&requests[3].body).unwrap();
    assert_eq!(injected, format!("{}{}", FORGED, signature.to_hex()));
}

#[tokio::test]
async fn test_failed_preapply_stops_before_injection() {
    let stub = spawn_stub(node_route("failed")).await;
    let client = client_for(&stub);
    let wallet = Wallet::from_mnemonic(MNEMONIC, "", SigningCurve::Ed25519).unwrap();

    let err = client
        .operations()
        .forge_sign_preapply_inject(vec![transaction()], &wallet)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::PreapplicationError));
    assert_eq!(stub.count("/injection/operation"), 0);
}

#[tokio::test]
async fn test_declining_signer_is_signing_error() {
    let stub = spawn_stub(node_route("applied")).await;
    let client = client_for(&stub);
    let wallet = Wallet::from_mnemonic(MNEMONIC, "", SigningCurve::Ed25519).unwrap();
    let signer = RemoteSigner::new(wallet.public_key().clone(), |_| None);

    let err = client
        .operations()
        .forge_sign_preapply_inject(vec![transaction()], &signer)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::SigningError));
    assert_eq!(stub.count(&preapply_path()), 0);
}
