//! Data models representing database entities and request bodies.

/// Bank account model
pub mod account;
/// Transfer request model
pub mod transfer;
