use crate::domain::account::{AccountError, SmartAccount};
use async_trait::async_trait;

/// Contract for any smart-account backend.
///
/// Implementations must make `create` atomic with respect to the address: of two
/// concurrent creates for the same address, exactly one succeeds and the other gets
/// `AccountError::DuplicateKey`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new, undeployed account. Never overwrites an existing record.
    async fn create(&self, address: &str, private_key: &str) -> Result<SmartAccount, AccountError>;

    async fn get(&self, address: &str) -> Result<SmartAccount, AccountError>;

    /// Sets `is_deployed = true`. Calling it again is a no-op, not an error.
    async fn mark_deployed(&self, address: &str) -> Result<SmartAccount, AccountError>;

    /// Bumps `last_used_at` to now.
    async fn touch(&self, address: &str) -> Result<SmartAccount, AccountError>;

    /// Cheap liveness check of the underlying storage.
    async fn ping(&self) -> Result<(), AccountError> {
        Ok(())
    }
}
