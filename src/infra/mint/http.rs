// Responsible for all communication with the external SBT mint service.

use crate::infra::config;
use crate::infra::mint::{MintError, SbtMinter};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value as JsonValue;

/// Mints by POSTing an empty JSON object to the configured mint endpoint.
#[derive(Clone)]
pub struct HttpSbtMinter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSbtMinter {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Builds a minter from `SBT_MINT_URL`.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(reqwest::Client::new(), config::sbt_mint_url()?))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SbtMinter for HttpSbtMinter {
    async fn mint(&self) -> Result<JsonValue, MintError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(JsonValue::Null);
            }
            return serde_json::from_str(&body)
                .map_err(|e| MintError::InvalidResponse(format!("body is not JSON: {}", e)));
        }

        Err(MintError::Rejected(rejection_message(status, &body)))
    }
}

/// Picks the most specific failure text out of a non-2xx mint response.
fn rejection_message(status: StatusCode, body: &str) -> String {
    if let Ok(JsonValue::Object(map)) = serde_json::from_str::<JsonValue>(body) {
        for field in ["error", "message"] {
            if let Some(s) = map.get(field).and_then(|v| v.as_str()) {
                return s.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("mint service responded with status {}", status)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_field_then_message_field() {
        let body = r#"{"error":"insufficient funds","message":"ignored"}"#;
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, body),
            "insufficient funds"
        );
        let body = r#"{"message":"nonce too low"}"#;
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, body),
            "nonce too low"
        );
    }

    #[test]
    fn falls_back_to_raw_body_then_status() {
        assert_eq!(
            rejection_message(StatusCode::BAD_GATEWAY, "  upstream down \n"),
            "upstream down"
        );
        assert_eq!(
            rejection_message(StatusCode::BAD_GATEWAY, ""),
            "mint service responded with status 502 Bad Gateway"
        );
    }
}
