use crate::transport::http::types::{AppState, MintResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Triggers one SBT mint. Takes no input; any request body is ignored.
#[utoipa::path(
    post,
    path = "/api/blockchain/sbtmint",
    responses(
        (status = 200, description = "Mint transaction succeeded", body = MintResponse),
        (status = 500, description = "Mint service failed, rejected, or timed out", body = MintResponse)
    )
)]
pub async fn sbtmint_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.mint_service.mint().await {
        Ok(data) => {
            tracing::info!("sbt mint succeeded");
            (StatusCode::OK, Json(MintResponse::succeeded(data)))
        }
        Err(e) => {
            tracing::error!(error = %e, "SBT mint error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MintResponse::failed(e.to_string())),
            )
        }
    }
}
