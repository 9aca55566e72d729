//! # Barcode Lookup Service
//!
//! Resolves a scanned barcode to whatever carries it.
//!
//! ## Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    resolve_barcode(code)                        │
//! │                                                                 │
//! │  1. inventory WHERE barcode = code ──► Inventory{name,price,    │
//! │        │ no row                          stock}                 │
//! │        ▼                                                        │
//! │  2. repairs WHERE barcode = code ────► Repair{item,issue,       │
//! │        │ no row                          status}                │
//! │        ▼                                                        │
//! │  3. NotFound (a valid outcome, not an error)                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inventory-before-repairs is normative: both kinds draw codes from the
//! same 10^9 space, so in the (never-observed) event of a cross-table
//! collision the item wins, deterministically.

use tracing::debug;

use revive_core::{BarcodeResult, Money};
use revive_db::{Database, StorageError};

/// Barcode resolution service.
#[derive(Debug, Clone)]
pub struct LookupService {
    db: Database,
}

impl LookupService {
    /// Creates a new LookupService.
    pub fn new(db: Database) -> Self {
        LookupService { db }
    }

    /// Resolves a barcode to an inventory item, a repair ticket, or
    /// [`BarcodeResult::NotFound`].
    pub async fn resolve_barcode(&self, code: &str) -> Result<BarcodeResult, StorageError> {
        debug!(barcode = %code, "Resolving barcode");

        if let Some(item) = self.db.inventory().get_by_barcode(code).await? {
            return Ok(BarcodeResult::Inventory {
                name: item.name,
                price: Money::from_cents(item.price_cents),
                stock: item.stock,
            });
        }

        if let Some(ticket) = self.db.repairs().get_by_barcode(code).await? {
            return Ok(BarcodeResult::Repair {
                item: ticket.item,
                issue: ticket.issue,
                status: ticket.status,
            });
        }

        Ok(BarcodeResult::NotFound)
    }
}
