//! Transfer request model.

use serde::{Deserialize, Serialize};

/// Request to transfer money to an account.
///
/// The service only decodes and echoes this back; no balance is touched.
/// Missing fields decode as zero.
///
/// # JSON Example
///
/// ```json
/// {
///   "toAccount": 1,
///   "amount": 100
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferRequest {
    /// Destination account identity
    pub to_account: i32,

    /// Amount to transfer in minor units
    pub amount: i64,
}
