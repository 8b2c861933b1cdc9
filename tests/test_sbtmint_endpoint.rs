//! End-to-end tests for `POST /api/blockchain/sbtmint`:
//! the real router is served on a local port with a scripted minter behind it.

use async_trait::async_trait;
use sbt_mint_backend::{
    transport, HttpSbtMinter, InMemoryAccountStore, MintError, MintService, SbtMinter,
};
use serde_json::{json, Value as JsonValue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

enum Script {
    Succeed(JsonValue),
    Reject(&'static str),
    Hang,
}

struct ScriptedMinter {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedMinter {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl SbtMinter for ScriptedMinter {
    async fn mint(&self) -> Result<JsonValue, MintError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Succeed(v) => Ok(v.clone()),
            Script::Reject(msg) => Err(MintError::Rejected(msg.to_string())),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(JsonValue::Null)
            }
        }
    }
}

async fn serve(router: axum::Router) -> Result<String, Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://{}", addr))
}

async fn start_server(
    minter: Arc<dyn SbtMinter>,
    timeout: Duration,
) -> Result<String, Box<dyn std::error::Error>> {
    let state = transport::http::AppState {
        accounts: Arc::new(InMemoryAccountStore::new()),
        mint_service: Arc::new(MintService::new(minter, timeout)),
    };
    serve(transport::http::create_router(state)).await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sbtmint_success() -> Result<(), Box<dyn std::error::Error>> {
    let minter = ScriptedMinter::new(Script::Succeed(json!({ "txHash": "0x123" })));
    let base_url = start_server(minter.clone(), Duration::from_secs(5)).await?;

    let resp = reqwest::Client::new()
        .post(format!("{}/api/blockchain/sbtmint", base_url))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 200);

    let body: JsonValue = resp.json().await?;
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "SBT mint transaction successful",
            "data": { "txHash": "0x123" }
        })
    );
    assert_eq!(minter.calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sbtmint_failure_is_reported_once() -> Result<(), Box<dyn std::error::Error>> {
    let minter = ScriptedMinter::new(Script::Reject("insufficient funds"));
    let base_url = start_server(minter.clone(), Duration::from_secs(5)).await?;

    let resp = reqwest::Client::new()
        .post(format!("{}/api/blockchain/sbtmint", base_url))
        .json(&json!({ "ignored": true }))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 500);

    let body: JsonValue = resp.json().await?;
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Failed to process SBT mint transaction",
            "error": "insufficient funds"
        })
    );
    // No retries on failure.
    assert_eq!(minter.calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sbtmint_timeout_becomes_failure() -> Result<(), Box<dyn std::error::Error>> {
    let minter = ScriptedMinter::new(Script::Hang);
    let base_url = start_server(minter, Duration::from_secs(1)).await?;

    let resp = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?
        .post(format!("{}/api/blockchain/sbtmint", base_url))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 500);

    let body: JsonValue = resp.json().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("sbt mint timed out after 1s"));
    Ok(())
}

/// Drives the real `HttpSbtMinter` against a fake mint service.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_http_minter_against_fake_service() -> Result<(), Box<dyn std::error::Error>> {
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Json;

    let fake = axum::Router::new()
        .route(
            "/mint-ok",
            post(|| async { Json(json!({ "txHash": "0xfeed" })) }),
        )
        .route(
            "/mint-broke",
            post(|| async {
                (
                    StatusCode::PAYMENT_REQUIRED,
                    Json(json!({ "error": "insufficient funds" })),
                )
            }),
        );
    let fake_url = serve(fake).await?;

    let ok = HttpSbtMinter::new(reqwest::Client::new(), format!("{}/mint-ok", fake_url));
    assert_eq!(ok.mint().await?, json!({ "txHash": "0xfeed" }));

    let broke = HttpSbtMinter::new(reqwest::Client::new(), format!("{}/mint-broke", fake_url));
    let base_url = start_server(Arc::new(broke), Duration::from_secs(5)).await?;
    let body: JsonValue = reqwest::Client::new()
        .post(format!("{}/api/blockchain/sbtmint", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("insufficient funds"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_site_metadata_is_served() -> Result<(), Box<dyn std::error::Error>> {
    let minter = ScriptedMinter::new(Script::Succeed(JsonValue::Null));
    let base_url = start_server(minter, Duration::from_secs(5)).await?;

    let body: JsonValue = reqwest::get(format!("{}/api/site", base_url))
        .await?
        .json()
        .await?;
    assert_eq!(body["name"], json!(sbt_mint_backend::SITE_CONFIG.name));
    assert_eq!(body["url"], json!(sbt_mint_backend::SITE_CONFIG.url));
    assert!(body["links"]["github"].is_string());
    Ok(())
}
