//! In-memory account storage used by tests.

use super::Storage;
use crate::{error::AppError, models::account::Account};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Accounts keyed by identity; identities are handed out sequentially from 1, like a SERIAL column.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    accounts: BTreeMap<i32, Account>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_account(&self, account: Account) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let account = Account {
            id: inner.next_id,
            ..account
        };
        inner.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        self.inner.write().await.accounts.remove(&id);
        Ok(())
    }

    async fn update_account(&self, _account: &Account) -> Result<(), AppError> {
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        self.inner
            .read()
            .await
            .accounts
            .get(&id)
            .cloned()
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let storage = MemoryStorage::new();

        let first = storage
            .create_account(Account::new("Ada", "Lovelace"))
            .await
            .unwrap();
        let second = storage
            .create_account(Account::new("Alan", "Turing"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(storage.get_accounts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let storage = MemoryStorage::new();
        let account = storage
            .create_account(Account::new("Ada", "Lovelace"))
            .await
            .unwrap();

        storage.delete_account(account.id).await.unwrap();
        storage.delete_account(account.id).await.unwrap();

        let result = storage.get_account_by_id(account.id).await;
        assert!(matches!(result, Err(AppError::AccountNotFound(1))));
    }

    #[tokio::test]
    async fn ping_reports_reachable() {
        MemoryStorage::new().ping().await.unwrap();
    }

    #[tokio::test]
    async fn update_leaves_account_untouched() {
        let storage = MemoryStorage::new();
        let account = storage
            .create_account(Account::new("Ada", "Lovelace"))
            .await
            .unwrap();

        let mut changed = account.clone();
        changed.balance = 500;
        storage.update_account(&changed).await.unwrap();

        assert_eq!(storage.get_account_by_id(account.id).await.unwrap(), account);
    }
}
