//! Health check endpoint for service monitoring.

use crate::{error::AppError, handlers::json::AppJson, storage::DynStorage};
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Returns service status and database connectivity.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// If storage is unreachable, returns the standard 400 error response.
pub async fn health_check(
    State(storage): State<DynStorage>,
) -> Result<AppJson<HealthResponse>, AppError> {
    storage.ping().await?;

    Ok(AppJson(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
