//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /account - List all accounts
//! - POST /account - Create new account
//! - GET /account/{id} - Get account by ID
//! - DELETE /account/{id} - Delete account by ID

use crate::{
    error::AppError,
    handlers::json::AppJson,
    models::account::{Account, CreateAccountRequest},
    storage::DynStorage,
};
use axum::extract::{Path, State};
use serde::Serialize;

/// Confirmation body returned after a delete.
#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    message: String,
}

/// List all accounts.
///
/// # Response
///
/// - **Success (200 OK)**: Returns array of accounts (may be empty)
pub async fn list_accounts(
    State(storage): State<DynStorage>,
) -> Result<AppJson<Vec<Account>>, AppError> {
    let accounts = storage.get_accounts().await?;
    Ok(AppJson(accounts))
}

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: Returns the created account, with its assigned `id`,
///   a random `accountNumber`, zero `balance` and `createdAt` set to now
/// - **Error (400)**: Malformed body or database error
pub async fn create_account(
    State(storage): State<DynStorage>,
    AppJson(request): AppJson<CreateAccountRequest>,
) -> Result<AppJson<Account>, AppError> {
    let account = storage.create_account(Account::from(request)).await?;

    tracing::info!(id = account.id, "account created");

    Ok(AppJson(account))
}

/// Get a specific account by ID.
///
/// # URL Parameters
///
/// - `id` - integer identity of the account
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (400)**: ID is not an integer, or no such account
pub async fn get_account(
    State(storage): State<DynStorage>,
    Path(raw_id): Path<String>,
) -> Result<AppJson<Account>, AppError> {
    let id = parse_id(&raw_id)?;
    let account = storage.get_account_by_id(id).await?;
    Ok(AppJson(account))
}

/// Delete an account by ID.
///
/// Deleting an account that does not exist still succeeds.
///
/// # Response
///
/// ```json
/// { "message": "account deleted" }
/// ```
pub async fn delete_account(
    State(storage): State<DynStorage>,
    Path(raw_id): Path<String>,
) -> Result<AppJson<MessageResponse>, AppError> {
    let id = parse_id(&raw_id)?;
    storage.delete_account(id).await?;

    tracing::info!(id, "account deleted");

    Ok(AppJson(MessageResponse {
        message: "account deleted".to_string(),
    }))
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}
