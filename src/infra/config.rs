//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context};
use std::time::Duration;

/// Which backend holds smart-account records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStoreKind {
    Postgres,
    Memory,
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")
}

/// Postgres pool size (default: 5).
pub fn database_max_connections() -> anyhow::Result<u32> {
    match std::env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(v) => v
            .parse::<u32>()
            .map(|n| n.max(1))
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32"),
        Err(_) => Ok(5),
    }
}

/// Account store backend (default: postgres).
pub fn account_store_kind() -> anyhow::Result<AccountStoreKind> {
    let raw = std::env::var("ACCOUNT_STORE").unwrap_or_else(|_| "postgres".to_string());
    match raw.trim().to_lowercase().as_str() {
        "postgres" => Ok(AccountStoreKind::Postgres),
        "memory" => Ok(AccountStoreKind::Memory),
        other => Err(anyhow!(
            "ACCOUNT_STORE must be 'postgres' or 'memory' (got '{}')",
            other
        )),
    }
}

/// Endpoint of the external SBT mint service (required).
pub fn sbt_mint_url() -> anyhow::Result<String> {
    std::env::var("SBT_MINT_URL").context("SBT_MINT_URL must be set")
}

/// Upper bound on a single mint call (default: 30s, minimum 1s).
pub fn mint_timeout() -> anyhow::Result<Duration> {
    let secs = match std::env::var("MINT_TIMEOUT_SECS") {
        Ok(v) => v
            .parse::<u64>()
            .context("MINT_TIMEOUT_SECS must be a valid u64")?,
        Err(_) => 30,
    };
    Ok(Duration::from_secs(secs.max(1)))
}

/// Listen address for the API server (default: 0.0.0.0:3000).
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
