//! Account data models and API request types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account, also returned to clients
//! - `CreateAccountRequest`: Request body for creating accounts

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for randomly generated account numbers.
const ACCOUNT_NUMBER_LIMIT: i64 = 1_000_000;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `account` table. The storage layer selects columns under these field names
/// (`number` and `balance` widened to BIGINT, `create_at` read as UTC).
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "accountNumber": 482913,
///   "balance": 0,
///   "createdAt": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Identity assigned by storage on insert; zero until persisted
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Account number, assigned once in [`Account::new`]
    #[serde(rename = "accountNumber")]
    pub number: i64,

    /// Current balance in minor units
    pub balance: i64,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a fresh, unpersisted account with a random account number, zero balance and the
    /// current time as creation timestamp.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rand::rng().random_range(0..ACCOUNT_NUMBER_LIMIT),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a new account.
///
/// Missing fields decode as empty strings.
///
/// # JSON Example
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateAccountRequest> for Account {
    fn from(request: CreateAccountRequest) -> Self {
        Account::new(request.first_name, request.last_name)
    }
}
