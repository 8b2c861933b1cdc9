use crate::app::mint_service::MintService;
use crate::domain::account::{AccountStore, SmartAccount};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub mint_service: Arc<MintService>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

pub const MINT_SUCCESS_MESSAGE: &str = "SBT mint transaction successful";
pub const MINT_FAILURE_MESSAGE: &str = "Failed to process SBT mint transaction";

/// Response of `POST /api/blockchain/sbtmint`.
#[derive(Serialize, Debug, ToSchema)]
pub struct MintResponse {
    pub success: bool,
    pub message: String,
    /// Opaque result from the mint service (success only).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MintResponse {
    pub fn succeeded(data: JsonValue) -> Self {
        Self {
            success: true,
            message: MINT_SUCCESS_MESSAGE.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: MINT_FAILURE_MESSAGE.to_string(),
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub address: String,
    pub private_key: String,
}

/// Public view of a smart account. Deliberately has no key field.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub address: String,
    pub is_deployed: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_used_at: Option<DateTime<Utc>>,
}

impl From<&SmartAccount> for AccountView {
    fn from(account: &SmartAccount) -> Self {
        Self {
            address: account.address.clone(),
            is_deployed: account.is_deployed,
            created_at: account.created_at,
            last_used_at: account.last_used_at,
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::err(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
