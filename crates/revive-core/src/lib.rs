//! # revive-core: Pure Business Logic for Revive POS
//!
//! This crate is the **heart** of Revive POS, a shop-management core for a
//! recycle-and-repair retailer. It contains all business rules as pure
//! functions and plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Revive POS Architecture                      │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │              Presentation Layer (external)                │ │
//! │  │   login form ──► dashboard tabs ──► barcode input         │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │ plain function calls            │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │                    revive-shop (services)                 │ │
//! │  │   authenticate, add_item, sell_by_barcode, ...            │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │              ★ revive-core (THIS CRATE) ★                 │ │
//! │  │                                                           │ │
//! │  │  ┌─────────┐ ┌───────┐ ┌────────────┐ ┌───────────────┐  │ │
//! │  │  │  types  │ │ money │ │ validation │ │ barcode/creds │  │ │
//! │  │  └─────────┘ └───────┘ └────────────┘ └───────────────┘  │ │
//! │  │                                                           │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK                        │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │                 revive-db (SQLite storage)                │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, RepairTicket, Customer, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error type
//! - [`validation`] - Business rule validation
//! - [`barcode`] - 9-digit barcode generation and format checks
//! - [`credentials`] - Password digest used by authentication

// =============================================================================
// Module Declarations
// =============================================================================

pub mod barcode;
pub mod credentials;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Username of the account seeded at first startup.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Fixed password of the seeded admin account.
///
/// A single-tenant local install ships with one known credential; there is
/// no registration or password-reset flow in this system.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Upper bound for an item price, in cents ($1,000,000.00).
///
/// Matches the range the item dialogs accept. Anything above this is a data
/// entry mistake, not a price.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Upper bound for an item stock count.
pub const MAX_STOCK: i64 = 1_000_000;

/// Maximum length accepted for names and free-text fields.
pub const MAX_TEXT_LEN: usize = 200;

/// Loyalty points granted on explicit customer registration.
///
/// Customers created implicitly through a repair ticket start at 0 instead.
pub const REGISTRATION_BONUS_POINTS: i64 = 100;
