//! # Domain Types
//!
//! Core domain types used throughout Revive POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐       │
//! │  │   Account     │  │ InventoryItem │  │ RepairTicket  │       │
//! │  │ ───────────── │  │ ───────────── │  │ ───────────── │       │
//! │  │ username      │  │ name          │  │ item          │       │
//! │  │ password_hash │  │ price_cents   │  │ issue         │       │
//! │  │ role          │  │ stock         │  │ status        │       │
//! │  └───────────────┘  │ barcode       │  │ customer_id   │       │
//! │                     └───────────────┘  │ barcode       │       │
//! │  ┌───────────────┐  ┌───────────────┐  └───────────────┘       │
//! │  │   Customer    │  │  SaleRecord   │                          │
//! │  │ ───────────── │  │ ───────────── │  RepairTicket ──► many   │
//! │  │ name, email   │  │ item_name     │  to-one ──► Customer     │
//! │  │ points        │  │ price_cents   │                          │
//! │  └───────────────┘  │ barcode       │                          │
//! │                     └───────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every persisted entity carries an integer surrogate key assigned by the
//! database at insertion time, plus a barcode where the entity is scannable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// Access level associated with an [`Account`].
///
/// Controls which dashboard capabilities the presentation layer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access: user management, reports, inventory administration.
    Admin,
    /// Day-to-day operations: sales, repairs, customer lookups.
    Staff,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Staff => write!(f, "staff"),
        }
    }
}

// =============================================================================
// Account
// =============================================================================

/// A login account.
///
/// Accounts are read on every login attempt and never deleted. The one
/// admin account is seeded at first startup; there is no registration flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Account {
    /// Surrogate key assigned at insertion.
    pub id: i64,

    /// Unique login name.
    pub username: String,

    /// Hex SHA-256 digest of the password. The raw password is never stored.
    pub password_hash: String,

    /// Access level.
    pub role: Role,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Inventory
// =============================================================================

/// An item available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryItem {
    /// Surrogate key assigned at insertion.
    pub id: i64,

    /// Display name shown on the inventory tab and receipts.
    pub name: String,

    /// Optional merchandise category (e.g. "Appliances").
    pub category: Option<String>,

    /// Optional condition grade (e.g. "Refurbished").
    pub condition: Option<String>,

    /// Price in cents. Never negative.
    pub price_cents: i64,

    /// Units on hand. A sale never drives this below zero.
    pub stock: i64,

    /// 9-digit numeric barcode, unique, assigned at creation, immutable.
    pub barcode: String,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Returns the price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether a single-unit sale can proceed.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Caller-supplied fields for a new inventory item.
///
/// The barcode and surrogate key are assigned by the catalog service at
/// creation time, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub price: Money,
    pub stock: i64,
}

impl NewItem {
    /// Convenience constructor for the common dialog path (name/price/stock).
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> Self {
        NewItem {
            name: name.into(),
            category: None,
            condition: None,
            price,
            stock,
        }
    }
}

// =============================================================================
// Repairs
// =============================================================================

/// Status of a repair ticket.
///
/// The set of statuses is open: new tickets start as `Pending`, and the
/// surrounding workflow may move them through values this crate does not
/// enumerate. Stored and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
pub struct RepairStatus(String);

impl RepairStatus {
    /// Status every new ticket is created with.
    pub fn pending() -> Self {
        RepairStatus("Pending".to_string())
    }

    /// Wraps an arbitrary status value.
    pub fn new(status: impl Into<String>) -> Self {
        RepairStatus(status.into())
    }

    /// The status text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A repair request for a customer's item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RepairTicket {
    /// Surrogate key assigned at insertion.
    pub id: i64,

    /// What was brought in (free text).
    pub item: String,

    /// What is wrong with it (free text).
    pub issue: String,

    /// Current workflow status. New tickets are `Pending`.
    pub status: RepairStatus,

    /// The customer who owns the item.
    pub customer_id: i64,

    /// 9-digit numeric barcode, unique, printed on the claim stub.
    pub barcode: String,

    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Customers
// =============================================================================

/// A registered or implicitly created customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Surrogate key assigned at insertion.
    pub id: i64,

    /// Customer name. Exact-matched when a repair ticket references one.
    pub name: String,

    /// Optional contact email. Absent for repair-created customers.
    pub email: Option<String>,

    /// Loyalty point balance. May go negative under the default policy.
    pub points: i64,

    /// When the customer row was created.
    pub created_at: DateTime<Utc>,
}

/// How point deductions treat the zero boundary.
///
/// The balance is allowed to go negative by default; clamping is an explicit
/// opt-in so existing balances keep their historical semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyPolicy {
    /// `points + delta`, whatever the result.
    #[default]
    Unclamped,
    /// `max(0, points + delta)`.
    ClampAtZero,
}

// =============================================================================
// Sales
// =============================================================================

/// One completed single-unit sale, appended to the ledger at sale time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleRecord {
    /// Surrogate key assigned at insertion.
    pub id: i64,

    /// Name of the item at the moment of sale.
    pub item_name: String,

    /// Price charged, in cents.
    pub price_cents: i64,

    /// The sale barcode generated for this transaction.
    pub barcode: String,

    /// When the sale completed.
    pub created_at: DateTime<Utc>,
}

/// What a successful barcode sale hands back to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// Name of the item sold.
    pub name: String,

    /// Price charged.
    pub price: Money,

    /// Freshly generated barcode identifying this sale.
    pub sale_barcode: String,
}

// =============================================================================
// Barcode Resolution
// =============================================================================

/// Outcome of resolving a scanned barcode.
///
/// Resolution tries the inventory table first and falls back to repairs;
/// `NotFound` is a valid outcome of lookup, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BarcodeResult {
    /// The barcode belongs to an inventory item.
    Inventory {
        name: String,
        price: Money,
        stock: i64,
    },
    /// The barcode belongs to a repair ticket.
    Repair {
        item: String,
        issue: String,
        status: RepairStatus,
    },
    /// No item or ticket carries this barcode.
    NotFound,
}
