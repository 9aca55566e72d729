//! # revive-db: Database Layer for Revive POS
//!
//! This crate provides database access for the Revive POS system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Revive POS Data Flow                        │
//! │                                                                 │
//! │  Service call (sell_by_barcode)                                 │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │                  revive-db (THIS CRATE)                   │ │
//! │  │                                                           │ │
//! │  │  ┌────────────┐   ┌──────────────┐   ┌────────────────┐  │ │
//! │  │  │  Database  │   │ Repositories │   │   Migrations   │  │ │
//! │  │  │ (pool.rs)  │◄──│ (inventory,  │   │   (embedded)   │  │ │
//! │  │  │            │   │  repairs...) │   │ 001_init.sql   │  │ │
//! │  │  └────────────┘   └──────────────┘   └────────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │        SQLite database file (e.g. ./shop.db)              │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation, startup bootstrap
//! - [`migrations`] - Embedded database migrations
//! - [`seed`] - Idempotent default-admin seeding
//! - [`error`] - Storage error type
//! - [`repository`] - Repository implementations, one per table
//!
//! ## Usage
//!
//! ```rust,ignore
//! use revive_db::{Database, DbConfig};
//!
//! // Open (creating if absent), migrate, seed the admin account
//! let db = Database::new(DbConfig::new("shop.db")).await?;
//!
//! // Use repositories
//! let items = db.inventory().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StorageError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::account::AccountRepository;
pub use repository::customer::CustomerRepository;
pub use repository::inventory::{InventoryRepository, SellOutcome};
pub use repository::repair::RepairRepository;
pub use repository::sale::SaleRepository;
