use crate::domain::account::{AccountError, SmartAccount};
use crate::transport::http::types::{AccountView, ApiResponse};
use axum::http::StatusCode;
use axum::Json;

pub type HandlerError = (StatusCode, Json<ApiResponse>);

pub fn account_error_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::DuplicateKey(_) => StatusCode::CONFLICT,
        AccountError::NotFound(_) => StatusCode::NOT_FOUND,
        AccountError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AccountError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps a store error to the response envelope. Storage failures are logged; the
/// client-caused kinds are not.
pub fn account_error_response(err: AccountError) -> HandlerError {
    let status = account_error_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "account store failure");
    }
    (status, Json(ApiResponse::err(err.to_string())))
}

pub fn account_json(account: &SmartAccount) -> serde_json::Value {
    serde_json::to_value(AccountView::from(account)).unwrap_or(serde_json::Value::Null)
}
