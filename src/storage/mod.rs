//! Account persistence.
//!
//! Handlers only see the [`Storage`] trait. The production implementation is
//! [`PostgresStorage`]; tests use an in-memory map with the same semantics.

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PostgresStorage;

use crate::{error::AppError, models::account::Account};
use async_trait::async_trait;
use std::sync::Arc;

/// Shared storage handle injected into handlers as axum state.
pub type DynStorage = Arc<dyn Storage>;

/// Persistence operations over accounts.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist a new account and return it with its storage-assigned identity.
    async fn create_account(&self, account: Account) -> Result<Account, AppError>;

    /// Remove the account with this identity. Removing an absent account is not an error.
    async fn delete_account(&self, id: i32) -> Result<(), AppError>;

    /// Accepted and ignored; account mutation is not supported.
    async fn update_account(&self, account: &Account) -> Result<(), AppError>;

    /// All stored accounts.
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// The account with this identity, or [`AppError::AccountNotFound`].
    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
