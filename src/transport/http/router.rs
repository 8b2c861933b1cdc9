use crate::domain::site::{SiteConfig, SiteLinks};
use crate::transport::http::handlers::{accounts, health, mint, site};
use crate::transport::http::types::{AccountView, ApiResponse, CreateAccountRequest, MintResponse};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        mint::sbtmint_handler,
        site::site_handler,
        accounts::create_account_handler,
        accounts::get_account_handler,
        accounts::mark_deployed_handler,
        accounts::touch_account_handler
    ),
    components(schemas(
        ApiResponse,
        MintResponse,
        CreateAccountRequest,
        AccountView,
        SiteConfig,
        SiteLinks
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/blockchain/sbtmint", post(mint::sbtmint_handler))
        .route("/api/site", get(site::site_handler))
        .route("/api/accounts", post(accounts::create_account_handler))
        .route("/api/accounts/:address", get(accounts::get_account_handler))
        .route(
            "/api/accounts/:address/deployed",
            post(accounts::mark_deployed_handler),
        )
        .route("/api/accounts/:address/touch", post(accounts::touch_account_handler))
        .with_state(app_state)
}
