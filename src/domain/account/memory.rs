//! Process-local account store, used by tests and `ACCOUNT_STORE=memory`.

use crate::domain::account::{
    validate_new_account, AccountError, AccountStore, PrivateKey, SmartAccount,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, SmartAccount>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, address: &str, private_key: &str) -> Result<SmartAccount, AccountError> {
        validate_new_account(address, private_key)?;

        let mut accounts = self.accounts.write().await;
        match accounts.entry(address.to_string()) {
            Entry::Occupied(_) => Err(AccountError::DuplicateKey(address.to_string())),
            Entry::Vacant(slot) => {
                let account = SmartAccount::new(
                    address.to_string(),
                    PrivateKey::new(private_key),
                    Utc::now(),
                );
                Ok(slot.insert(account).clone())
            }
        }
    }

    async fn get(&self, address: &str) -> Result<SmartAccount, AccountError> {
        self.accounts
            .read()
            .await
            .get(address)
            .cloned()
            .ok_or_else(|| AccountError::NotFound(address.to_string()))
    }

    async fn mark_deployed(&self, address: &str) -> Result<SmartAccount, AccountError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(address)
            .ok_or_else(|| AccountError::NotFound(address.to_string()))?;
        account.mark_deployed();
        Ok(account.clone())
    }

    async fn touch(&self, address: &str) -> Result<SmartAccount, AccountError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(address)
            .ok_or_else(|| AccountError::NotFound(address.to_string()))?;
        account.touch(Utc::now());
        Ok(account.clone())
    }
}
