//! Persistent smart-account store implementation using PostgreSQL.

use crate::domain::account::{
    validate_new_account, AccountError, AccountStore, PrivateKey, SmartAccount,
};
use crate::infra::config;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tokio::sync::OnceCell;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS smart_accounts (
    address TEXT PRIMARY KEY,
    private_key TEXT NOT NULL,
    is_deployed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    last_used_at TIMESTAMPTZ NULL,
    CONSTRAINT smart_accounts_last_used_after_created
        CHECK (last_used_at IS NULL OR last_used_at >= created_at)
)";

const RETURNING_COLUMNS: &str = "address, private_key, is_deployed, created_at, last_used_at";

/// Process-wide guard: the table DDL runs once no matter how many stores are built.
static SCHEMA_REGISTERED: OnceCell<()> = OnceCell::const_new();

/// A smart-account store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    /// Connects using `DATABASE_URL` / `DATABASE_MAX_CONNECTIONS` and registers the schema.
    pub async fn connect() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let database_url = config::database_url()?;

        let pool = PgPoolOptions::new()
            .max_connections(config::database_max_connections()?)
            .connect(&database_url)
            .await?;

        Ok(Self::new(pool).await?)
    }

    pub async fn new(pool: PgPool) -> Result<Self, AccountError> {
        register_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Creates `smart_accounts` on first call; later calls return immediately.
pub async fn register_schema(pool: &PgPool) -> Result<(), AccountError> {
    SCHEMA_REGISTERED
        .get_or_try_init(|| async move {
            sqlx::query(CREATE_TABLE_SQL).execute(pool).await?;
            tracing::info!("smart_accounts schema registered");
            Ok::<(), AccountError>(())
        })
        .await?;
    Ok(())
}

/// Whether the one-time schema registration has completed in this process.
pub fn schema_registered() -> bool {
    SCHEMA_REGISTERED.initialized()
}

fn row_to_account(row: &PgRow) -> Result<SmartAccount, AccountError> {
    let address: String = row.try_get("address")?;
    let private_key: String = row.try_get("private_key")?;
    let is_deployed: bool = row.try_get("is_deployed")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let last_used_at: Option<DateTime<Utc>> = row.try_get("last_used_at")?;
    Ok(SmartAccount::from_parts(
        address,
        PrivateKey::new(private_key),
        is_deployed,
        created_at,
        last_used_at,
    ))
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn create(&self, address: &str, private_key: &str) -> Result<SmartAccount, AccountError> {
        validate_new_account(address, private_key)?;

        // The primary key serializes racing inserts; the loser gets no row back.
        let sql = format!(
            "INSERT INTO smart_accounts (address, private_key) VALUES ($1, $2)
             ON CONFLICT (address) DO NOTHING
             RETURNING {}",
            RETURNING_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(address)
            .bind(private_key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                tracing::info!(address, "smart account created");
                row_to_account(&row)
            }
            None => Err(AccountError::DuplicateKey(address.to_string())),
        }
    }

    async fn get(&self, address: &str) -> Result<SmartAccount, AccountError> {
        let sql = format!(
            "SELECT {} FROM smart_accounts WHERE address = $1",
            RETURNING_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(address)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => row_to_account(&row),
            None => Err(AccountError::NotFound(address.to_string())),
        }
    }

    async fn mark_deployed(&self, address: &str) -> Result<SmartAccount, AccountError> {
        let sql = format!(
            "UPDATE smart_accounts SET is_deployed = TRUE WHERE address = $1 RETURNING {}",
            RETURNING_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(address)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => {
                tracing::info!(address, "smart account marked deployed");
                row_to_account(&row)
            }
            None => Err(AccountError::NotFound(address.to_string())),
        }
    }

    async fn touch(&self, address: &str) -> Result<SmartAccount, AccountError> {
        let sql = format!(
            "UPDATE smart_accounts SET last_used_at = GREATEST(now(), created_at)
             WHERE address = $1 RETURNING {}",
            RETURNING_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(address)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => {
                tracing::debug!(address, "smart account touched");
                row_to_account(&row)
            }
            None => Err(AccountError::NotFound(address.to_string())),
        }
    }

    async fn ping(&self) -> Result<(), AccountError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
