//! # Service Error Types
//!
//! One error enum per service family, composing the validation errors of
//! revive-core with the storage errors of revive-db.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Validation failures  → rejected BEFORE any storage access;     │
//! │                         no partial write from invalid input     │
//! │  Storage failures     → propagate unchanged; never retried      │
//! │  InvalidCredentials   → generic on purpose: wrong password and  │
//! │                         unknown username are indistinguishable  │
//! │  Sale NotFound /      → recoverable, surfaced to the operator   │
//! │  OutOfStock                                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use revive_core::ValidationError;
use revive_db::StorageError;

/// Login failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The username/password pair matched no account.
    ///
    /// Deliberately carries no detail: the message must not reveal whether
    /// the username exists.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The credential lookup itself failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of a barcode sale.
#[derive(Debug, Error)]
pub enum SaleError {
    /// No inventory item carries the scanned barcode.
    #[error("no item with barcode {barcode}")]
    NotFound { barcode: String },

    /// The item exists but its stock is exhausted.
    #[error("item '{name}' is out of stock")]
    OutOfStock { name: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of catalog mutations that validate input.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of repair-ticket creation.
#[derive(Debug, Error)]
pub enum RepairError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of customer registration and point adjustment.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
