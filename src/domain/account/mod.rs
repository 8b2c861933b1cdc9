//! Smart-account records: one blockchain-controlled account per address, paired with its
//! signing key.

use chrono::{DateTime, Utc};
use std::fmt;

pub mod error;
pub mod memory;
pub mod store;

pub use error::AccountError;
pub use memory::InMemoryAccountStore;
pub use store::AccountStore;

/// Signing key material for a smart account.
///
/// Never serialized and never printed; read it through [`PrivateKey::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(String);

impl PrivateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A platform-provisioned smart account.
///
/// Callers only ever hold copies; the [`AccountStore`] owns durability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartAccount {
    pub address: String,
    private_key: PrivateKey,
    pub is_deployed: bool,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl SmartAccount {
    /// A freshly provisioned, not-yet-deployed account.
    pub fn new(address: String, private_key: PrivateKey, created_at: DateTime<Utc>) -> Self {
        Self {
            address,
            private_key,
            is_deployed: false,
            created_at,
            last_used_at: None,
        }
    }

    /// Rebuilds a record read back from storage.
    pub fn from_parts(
        address: String,
        private_key: PrivateKey,
        is_deployed: bool,
        created_at: DateTime<Utc>,
        last_used_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            address,
            private_key,
            is_deployed,
            created_at,
            last_used_at,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// One-way: there is no operation that clears the flag.
    pub(crate) fn mark_deployed(&mut self) {
        self.is_deployed = true;
    }

    /// Records a use at `now`, never earlier than `created_at`.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.last_used_at = Some(now.max(self.created_at));
    }
}

/// Rejects inputs that can never form a valid record.
pub(crate) fn validate_new_account(address: &str, private_key: &str) -> Result<(), AccountError> {
    if address.trim().is_empty() {
        return Err(AccountError::InvalidInput(
            "address must not be empty".to_string(),
        ));
    }
    if private_key.is_empty() {
        return Err(AccountError::InvalidInput(
            "private key must not be empty".to_string(),
        ));
    }
    Ok(())
}
