//! End-to-end tests against a local mock server: auth headers, signature
//! verification, and envelope decoding over a real HTTP round trip.

use axum::body::Bytes;
use axum::extract::OriginalUri;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;

use okxos_sdk::errcode;
use okxos_sdk::http::Credential;
use okxos_sdk::prelude::*;

const API_KEY: &str = "test-api-key";
const SECRET_KEY: &str = "test-secret-key";
const PASSPHRASE: &str = "test-passphrase";

/// Recomputes the signature from the received request and rejects the call
/// with an invalid-signature envelope when it does not match.
fn verify_signature(
    headers: &HeaderMap,
    method: &str,
    request_path: &str,
    body: &[u8],
) -> Result<(), String> {
    for name in [
        "OK-ACCESS-KEY",
        "OK-ACCESS-PASSPHRASE",
        "OK-ACCESS-TIMESTAMP",
        "OK-ACCESS-SIGN",
    ] {
        if !headers.contains_key(name) {
            return Err(format!("missing header {name}"));
        }
    }
    if headers["OK-ACCESS-KEY"] != API_KEY {
        return Err("wrong api key".into());
    }
    if headers["OK-ACCESS-PASSPHRASE"] != PASSPHRASE {
        return Err("wrong passphrase".into());
    }

    let timestamp = headers["OK-ACCESS-TIMESTAMP"].to_str().unwrap();
    let expected = Credential::new(API_KEY, SECRET_KEY, PASSPHRASE)
        .sign(timestamp, method, request_path, body);
    if headers["OK-ACCESS-SIGN"].to_str().unwrap() != expected {
        return Err("signature mismatch".into());
    }
    Ok(())
}

async fn quote_handler(
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> String {
    let request_path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    match verify_signature(&headers, "GET", &request_path, b"") {
        Ok(()) => r#"{"code":"0","msg":"","data":[{
            "chainId":"1",
            "fromTokenAmount":"1000000000000000000",
            "toTokenAmount":"3000000000",
            "estimateGasFee":"135000"
        }]}"#
            .to_string(),
        Err(msg) => format!(r#"{{"code":"50113","msg":"Invalid signature: {msg}"}}"#),
    }
}

async fn save_order_handler(
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> String {
    let request_path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    match verify_signature(&headers, "POST", &request_path, &body) {
        Ok(()) => {
            let req: serde_json::Value = serde_json::from_slice(&body).unwrap();
            format!(
                r#"{{"code":"0","msg":"","data":[{{"orderHash":{},"status":"1"}}]}}"#,
                req["orderHash"]
            )
        }
        Err(msg) => format!(r#"{{"code":"50113","msg":"Invalid signature: {msg}"}}"#),
    }
}

async fn rate_limited_handler() -> &'static str {
    r#"{"code":"50011","msg":"Rate limit reached"}"#
}

async fn void_handler() -> &'static str {
    r#"{"code":"0","msg":"","data":null}"#
}

async fn malformed_handler() -> &'static str {
    "<html>bad gateway</html>"
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/v5/dex/aggregator/quote", get(quote_handler))
        .route("/dex/aggregator/limit-order/save-order", post(save_order_handler))
        .route("/api/v5/dex/cross-chain/supported/bridges", get(rate_limited_handler))
        .route("/api/v5/wallet/account/delete-account", post(void_handler))
        .route("/api/v5/wallet/chain/supported-chains", get(malformed_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> OkxClient {
    OkxClient::builder(API_KEY, SECRET_KEY, PASSPHRASE)
        .base_url(base_url)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_signed_get_round_trip() {
    let base_url = spawn_server().await;
    let quote = client(&base_url)
        .swap()
        .quote(&QuoteRequest {
            chain_id: "1".into(),
            amount: "1000000000000000000".into(),
            from_token_address: "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee".into(),
            to_token_address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into(),
            ..Default::default()
        })
        .await
        .expect("server verified the signature");
    assert_eq!(quote.chain_id, "1");
    assert_eq!(quote.to_token_amount, "3000000000");
}

#[tokio::test]
async fn test_signed_post_covers_body() {
    let base_url = spawn_server().await;
    let detail = client(&base_url)
        .limit_order()
        .create_order(&CreateOrderRequest {
            order_hash: "0xhash".into(),
            chain_id: "1".into(),
            signature: "0xsig".into(),
            ..Default::default()
        })
        .await
        .expect("server verified the signature over the body");
    assert_eq!(detail.order_hash, "0xhash");
}

#[tokio::test]
async fn test_api_error_maps_to_predicate() {
    let base_url = spawn_server().await;
    let err = client(&base_url)
        .cross_chain()
        .supported_bridges(None)
        .await
        .unwrap_err();
    assert!(errcode::is_rate_limit_reached(&err));
    assert!(!errcode::is_invalid_signature(&err));
    assert_eq!(err.api_code(), Some(50011));
}

#[tokio::test]
async fn test_void_success() {
    let base_url = spawn_server().await;
    client(&base_url)
        .wallet()
        .delete_account("acc-1")
        .await
        .expect("null data with code 0 is a void success");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let base_url = spawn_server().await;
    let err = client(&base_url)
        .wallet()
        .supported_chains()
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Decode(_)));
}

#[tokio::test]
async fn test_project_header_is_sent() {
    // The extra header must not break signing; the signature covers only
    // the canonical parts, not the header set.
    let base_url = spawn_server().await;
    let client = OkxClient::builder(API_KEY, SECRET_KEY, PASSPHRASE)
        .base_url(&base_url)
        .project_id("test-project")
        .build()
        .unwrap();
    client
        .wallet()
        .delete_account("acc-1")
        .await
        .expect("request with project header still verifies");
}
