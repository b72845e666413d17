//! PostgreSQL-backed account storage.
//!
//! Every operation is a single parameterized statement against the `account`
//! table. No transactions, retries or batching.

use super::Storage;
use crate::{
    config::Config,
    db::{self, DbPool},
    error::AppError,
    models::account::Account,
};
use async_trait::async_trait;

/// Column list shared by the read queries. `number` and `balance` are SERIAL (INT4) in the
/// table and widened here; `create_at` is a plain TIMESTAMP holding UTC wall time.
const ACCOUNT_COLUMNS: &str = r#"
    id,
    first_name,
    last_name,
    number::BIGINT AS number,
    balance::BIGINT AS balance,
    create_at AT TIME ZONE 'UTC' AS created_at
"#;

#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: DbPool,
}

impl PostgresStorage {
    /// Connect using the database settings in `config`.
    ///
    /// # Errors
    ///
    /// Fails if the database cannot be reached or rejects the credentials.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = db::create_pool(config.connect_options(), config.db_max_connections).await?;
        Ok(Self::new(pool))
    }

    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `account` table if it does not exist yet. Safe to call on every startup.
    pub async fn init(&self) -> Result<(), sqlx::migrate::MigrateError> {
        db::run_migrations(&self.pool).await
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn create_account(&self, account: Account) -> Result<Account, AppError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO account (first_name, last_name, number, balance, create_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .bind(account.created_at.naive_utc())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, number = account.number, "account inserted");

        Ok(Account { id, ..account })
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(id, deleted, "account delete executed");

        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<(), AppError> {
        tracing::debug!(id = account.id, "account update ignored");
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        let accounts =
            sqlx::query_as::<_, Account>(&format!("SELECT {ACCOUNT_COLUMNS} FROM account"))
                .fetch_all(&self.pool)
                .await?;

        Ok(accounts)
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AccountNotFound(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
