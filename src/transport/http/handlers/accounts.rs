use crate::transport::http::handlers::common::{account_error_response, account_json};
use crate::transport::http::types::{json_422, ApiResponse, AppState, CreateAccountRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Smart account created", body = ApiResponse),
        (status = 400, description = "Empty address or private key", body = ApiResponse),
        (status = 409, description = "Address already on record", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_account_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, r#"{"address": "...", "privateKey": "..."}"#).into_response();
        }
    };

    match state
        .accounts
        .create(&request.address, &request.private_key)
        .await
    {
        Ok(account) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(account_json(&account))),
        )
            .into_response(),
        Err(e) => account_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/accounts/{address}",
    params(
        ("address" = String, Path, description = "Smart account address")
    ),
    responses(
        (status = 200, description = "Smart account found", body = ApiResponse),
        (status = 404, description = "No account with this address", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn get_account_handler(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> impl IntoResponse {
    match state.accounts.get(&address).await {
        Ok(account) => (StatusCode::OK, Json(ApiResponse::ok(account_json(&account)))).into_response(),
        Err(e) => account_error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/accounts/{address}/deployed",
    params(
        ("address" = String, Path, description = "Smart account address")
    ),
    responses(
        (status = 200, description = "Account marked deployed (idempotent)", body = ApiResponse),
        (status = 404, description = "No account with this address", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn mark_deployed_handler(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> impl IntoResponse {
    match state.accounts.mark_deployed(&address).await {
        Ok(account) => (StatusCode::OK, Json(ApiResponse::ok(account_json(&account)))).into_response(),
        Err(e) => account_error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/accounts/{address}/touch",
    params(
        ("address" = String, Path, description = "Smart account address")
    ),
    responses(
        (status = 200, description = "last_used_at bumped", body = ApiResponse),
        (status = 404, description = "No account with this address", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn touch_account_handler(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> impl IntoResponse {
    match state.accounts.touch(&address).await {
        Ok(account) => (StatusCode::OK, Json(ApiResponse::ok(account_json(&account)))).into_response(),
        Err(e) => account_error_response(e).into_response(),
    }
}
