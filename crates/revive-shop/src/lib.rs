//! # revive-shop: Service Facade for Revive POS
//!
//! The contracts the presentation layer programs against. Each service
//! validates its input with revive-core rules, calls into the revive-db
//! repositories, and returns plain records or typed errors, never a
//! rendered string, never a dialog.
//!
//! ## Services
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       ShopServices                              │
//! │                                                                 │
//! │  identity()   authenticate(username, password) → Role           │
//! │  catalog()    list / add / edit / delete / sell_by_barcode /    │
//! │               recent_sales                                      │
//! │  repairs()    create_repair_request / list_repairs              │
//! │  customers()  register / search / adjust_points                 │
//! │  lookup()     resolve_barcode → Inventory | Repair | NotFound   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use revive_db::{Database, DbConfig};
//! use revive_shop::ShopServices;
//!
//! let db = Database::new(DbConfig::new("shop.db")).await?;
//! let shop = ShopServices::new(db);
//!
//! let role = shop.identity().authenticate("admin", "admin123").await?;
//! let receipt = shop.catalog().sell_by_barcode("000123456").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customers;
pub mod error;
pub mod identity;
pub mod lookup;
pub mod repairs;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::CatalogService;
pub use customers::CustomerService;
pub use error::{AuthError, CatalogError, CustomerError, RepairError, SaleError};
pub use identity::IdentityService;
pub use lookup::LookupService;
pub use repairs::RepairService;

use revive_core::LoyaltyPolicy;
use revive_db::Database;

/// All shop services over one database handle.
///
/// Each service owns its own cheap [`Database`] clone, so a host that only
/// needs one service can construct just that one; this aggregate is the
/// convenient everything-wired-up entry point.
#[derive(Debug, Clone)]
pub struct ShopServices {
    identity: IdentityService,
    catalog: CatalogService,
    repairs: RepairService,
    customers: CustomerService,
    lookup: LookupService,
}

impl ShopServices {
    /// Wires every service to `db` with the default loyalty policy.
    pub fn new(db: Database) -> Self {
        Self::with_loyalty_policy(db, LoyaltyPolicy::default())
    }

    /// Wires every service to `db`, with an explicit loyalty policy for
    /// the customer service.
    pub fn with_loyalty_policy(db: Database, policy: LoyaltyPolicy) -> Self {
        ShopServices {
            identity: IdentityService::new(db.clone()),
            catalog: CatalogService::new(db.clone()),
            repairs: RepairService::new(db.clone()),
            customers: CustomerService::with_policy(db.clone(), policy),
            lookup: LookupService::new(db),
        }
    }

    /// Authentication.
    pub fn identity(&self) -> &IdentityService {
        &self.identity
    }

    /// Inventory CRUD and barcode sales.
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Repair requests.
    pub fn repairs(&self) -> &RepairService {
        &self.repairs
    }

    /// Customer registration and loyalty points.
    pub fn customers(&self) -> &CustomerService {
        &self.customers
    }

    /// Barcode resolution.
    pub fn lookup(&self) -> &LookupService {
        &self.lookup
    }
}
