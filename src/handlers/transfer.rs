//! Transfer HTTP handler.
//!
//! - /transfer (any method) - Accept a transfer request and echo it back

use crate::{error::AppError, handlers::json::AppJson, models::transfer::TransferRequest};

/// Accept a transfer request.
///
/// Any method is accepted. No funds are moved and no account is looked up;
/// the decoded request is returned as-is.
///
/// # Request Body
///
/// ```json
/// { "toAccount": 1, "amount": 100 }
/// ```
///
/// # Response (200)
///
/// The same JSON document.
pub async fn transfer(
    AppJson(request): AppJson<TransferRequest>,
) -> Result<AppJson<TransferRequest>, AppError> {
    tracing::info!(
        to_account = request.to_account,
        amount = request.amount,
        "transfer requested"
    );

    Ok(AppJson(request))
}
