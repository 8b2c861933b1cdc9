//! The external SBT mint collaborator.
//!
//! Minting mechanics live outside this service; all we see is an async call that takes no
//! arguments and yields either an opaque JSON result or a typed failure.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::time::Duration;
use thiserror::Error;

pub mod http;

pub use http::HttpSbtMinter;

#[derive(Error, Debug)]
pub enum MintError {
    /// The mint service answered and refused the mint. Carries its message verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("sbt mint timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("sbt mint request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sbt mint returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait SbtMinter: Send + Sync {
    async fn mint(&self) -> Result<JsonValue, MintError>;
}
