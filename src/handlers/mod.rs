//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Delegates to the storage layer
//! 3. Returns `Result<AppJson<_>, AppError>`; failures are rendered by `AppError`
/// Account management endpoints
pub mod accounts;
/// Health check endpoint
pub mod health;
/// JSON extractor and response wrapper
pub mod json;
/// Transfer endpoint
pub mod transfer;

use crate::{error::AppError, storage::DynStorage};
use axum::{
    Router,
    http::Method,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

/// Build the application router with all routes and shared storage.
///
/// The account paths answer unsupported methods with [`AppError::ActionNotAllowed`]
/// instead of axum's default 405. `/transfer` accepts any method.
pub fn router(storage: DynStorage) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/account",
            get(accounts::list_accounts)
                .post(accounts::create_account)
                .fallback(action_not_allowed),
        )
        .route(
            "/account/{id}",
            get(accounts::get_account)
                .delete(accounts::delete_account)
                .fallback(action_not_allowed),
        )
        .route("/transfer", any(transfer::transfer))
        // Per-request spans for observability
        .layer(TraceLayer::new_for_http())
        // Share storage with all handlers via State extraction
        .with_state(storage)
}

async fn action_not_allowed(method: Method) -> AppError {
    AppError::ActionNotAllowed(method)
}
