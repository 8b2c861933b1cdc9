// src/bin/api_server.rs

use sbt_mint_backend::infra::config::{self, AccountStoreKind};
use sbt_mint_backend::transport;
use sbt_mint_backend::{AccountStore, HttpSbtMinter, InMemoryAccountStore, MintService, PostgresAccountStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // --- Account Store Initialization ---
    let accounts: Arc<dyn AccountStore> = match config::account_store_kind()? {
        AccountStoreKind::Postgres => {
            info!("initializing PostgresAccountStore");
            Arc::new(PostgresAccountStore::connect().await?)
        }
        AccountStoreKind::Memory => {
            warn!("ACCOUNT_STORE=memory: smart accounts will not survive a restart");
            Arc::new(InMemoryAccountStore::new())
        }
    };

    // --- Mint Service Initialization ---
    let minter = HttpSbtMinter::from_env()?;
    let timeout = config::mint_timeout()?;
    info!(
        endpoint = minter.endpoint(),
        timeout_secs = timeout.as_secs(),
        "SBT minter configured"
    );
    let mint_service = Arc::new(MintService::new(Arc::new(minter), timeout));

    let app_state = transport::http::AppState {
        accounts,
        mint_service,
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for shutdown signal");
            }
            info!("shutdown signal received");
        })
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}
