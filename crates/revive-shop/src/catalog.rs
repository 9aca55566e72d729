//! # Catalog Service
//!
//! Inventory CRUD plus the barcode sale.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Operator scans "000123456" and hits Sell                       │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  sell_by_barcode("000123456")                                   │
//! │       │                                                         │
//! │       ├── no such item   → SaleError::NotFound                  │
//! │       ├── stock == 0     → SaleError::OutOfStock                │
//! │       ▼                                                         │
//! │  stock -= 1  +  ledger row      (one transaction, revive-db)    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SaleReceipt { name, price, sale_barcode }                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::{CatalogError, SaleError};
use revive_core::{barcode, validation, InventoryItem, Money, NewItem, SaleReceipt, SaleRecord};
use revive_db::{Database, SellOutcome, StorageError};

/// How many fresh draws an insert gets before a barcode collision is
/// reported instead of retried. At 10^9 codes one retry is already rare;
/// five bounds the loop without ever mattering in practice.
const MAX_BARCODE_ATTEMPTS: u32 = 5;

/// Inventory catalog service.
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    /// Creates a new CatalogService.
    pub fn new(db: Database) -> Self {
        CatalogService { db }
    }

    /// Returns the full inventory snapshot for the inventory tab.
    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, StorageError> {
        self.db.inventory().list().await
    }

    /// Adds a new item, assigning it a fresh barcode.
    ///
    /// Rejects an empty name and out-of-range price/stock before touching
    /// storage. On the (theoretical) barcode collision the insert re-rolls
    /// a new code, up to [`MAX_BARCODE_ATTEMPTS`] times.
    pub async fn add_item(&self, new: NewItem) -> Result<InventoryItem, CatalogError> {
        validation::validate_required_text("name", &new.name)?;
        validation::validate_price(new.price)?;
        validation::validate_stock(new.stock)?;

        let name = new.name.trim();
        let repo = self.db.inventory();

        let mut attempt = 0;
        loop {
            let code = barcode::generate();
            match repo
                .insert(
                    name,
                    new.category.as_deref(),
                    new.condition.as_deref(),
                    new.price.cents(),
                    new.stock,
                    &code,
                )
                .await
            {
                Ok(item) => {
                    info!(id = item.id, barcode = %item.barcode, "Item added");
                    return Ok(item);
                }
                Err(err) if err.is_unique_violation_on("barcode") && attempt + 1 < MAX_BARCODE_ATTEMPTS => {
                    debug!(barcode = %code, "Barcode collision, drawing again");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Overwrites an item's name, price, and stock in place.
    ///
    /// The barcode is immutable once assigned. Fails not-found when `id`
    /// doesn't resolve to a row.
    pub async fn edit_item(
        &self,
        id: i64,
        name: &str,
        price: Money,
        stock: i64,
    ) -> Result<InventoryItem, StorageError> {
        let repo = self.db.inventory();
        repo.update(id, name, price.cents(), stock).await?;

        info!(id, "Item updated");

        // The guarded update above succeeded, so the row exists.
        repo.get(id)
            .await?
            .ok_or_else(|| StorageError::not_found("inventory item", id))
    }

    /// Removes an item permanently.
    ///
    /// Irreversible; the presentation layer owns any confirmation prompt.
    pub async fn delete_item(&self, id: i64) -> Result<(), StorageError> {
        self.db.inventory().delete(id).await?;
        info!(id, "Item deleted");
        Ok(())
    }

    /// Sells one unit of the item carrying `code`.
    ///
    /// The decrement and the ledger append are one atomic step; a failed
    /// sale leaves both untouched.
    pub async fn sell_by_barcode(&self, code: &str) -> Result<SaleReceipt, SaleError> {
        let sale_barcode = barcode::generate();

        match self.db.inventory().sell_one(code, &sale_barcode).await? {
            SellOutcome::Sold { name, price_cents } => {
                info!(barcode = %code, sale_barcode = %sale_barcode, "Sale completed");
                Ok(SaleReceipt {
                    name,
                    price: Money::from_cents(price_cents),
                    sale_barcode,
                })
            }
            SellOutcome::OutOfStock => {
                // The outcome proves the row exists; read the name for the
                // operator-facing message.
                let name = self
                    .db
                    .inventory()
                    .get_by_barcode(code)
                    .await?
                    .map(|item| item.name)
                    .unwrap_or_else(|| code.to_string());
                Err(SaleError::OutOfStock { name })
            }
            SellOutcome::NotFound => Err(SaleError::NotFound {
                barcode: code.to_string(),
            }),
        }
    }

    /// Returns the most recent completed sales, newest first.
    pub async fn recent_sales(&self, limit: u32) -> Result<Vec<SaleRecord>, StorageError> {
        self.db.sales().list_recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revive_core::ValidationError;
    use revive_db::DbConfig;

    async fn service() -> CatalogService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        CatalogService::new(db)
    }

    #[tokio::test]
    async fn test_add_item_assigns_a_nine_digit_barcode() {
        let catalog = service().await;

        let item = catalog
            .add_item(NewItem::new("Toaster", Money::from_cents(1250), 3))
            .await
            .unwrap();

        assert!(barcode::is_well_formed(&item.barcode));
        assert_eq!(item.price_cents, 1250);
        assert_eq!(item.stock, 3);

        let listed = catalog.list_inventory().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, item.id);
    }

    #[tokio::test]
    async fn test_add_item_rejects_bad_input_without_writing() {
        let catalog = service().await;

        let err = catalog
            .add_item(NewItem::new("", Money::from_cents(100), 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::Required { .. })
        ));

        let err = catalog
            .add_item(NewItem::new("Lamp", Money::from_cents(-5), 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let err = catalog
            .add_item(NewItem::new("Lamp", Money::from_cents(100), -1))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        assert!(catalog.list_inventory().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_consecutive_adds_get_distinct_barcodes() {
        let catalog = service().await;

        let mut codes = std::collections::HashSet::new();
        for i in 0..20 {
            let item = catalog
                .add_item(NewItem::new(format!("Item {i}"), Money::from_cents(100), 1))
                .await
                .unwrap();
            assert!(barcode::is_well_formed(&item.barcode));
            codes.insert(item.barcode);
        }
        assert_eq!(codes.len(), 20);
    }

    #[tokio::test]
    async fn test_edit_then_delete_then_edit_fails_not_found() {
        let catalog = service().await;

        let item = catalog
            .add_item(NewItem::new("Kettle", Money::from_cents(900), 5))
            .await
            .unwrap();

        let edited = catalog
            .edit_item(item.id, "Electric Kettle", Money::from_cents(1100), 4)
            .await
            .unwrap();
        assert_eq!(edited.name, "Electric Kettle");
        assert_eq!(edited.price_cents, 1100);
        assert_eq!(edited.stock, 4);
        assert_eq!(edited.barcode, item.barcode, "barcode must be immutable");

        catalog.delete_item(item.id).await.unwrap();

        let err = catalog
            .edit_item(item.id, "Ghost", Money::from_cents(1), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));

        assert!(catalog.list_inventory().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sell_by_barcode_lifecycle() {
        let catalog = service().await;

        let item = catalog
            .add_item(NewItem::new("Radio", Money::from_cents(2000), 1))
            .await
            .unwrap();

        let receipt = catalog.sell_by_barcode(&item.barcode).await.unwrap();
        assert_eq!(receipt.name, "Radio");
        assert_eq!(receipt.price, Money::from_cents(2000));
        assert!(barcode::is_well_formed(&receipt.sale_barcode));
        assert_ne!(receipt.sale_barcode, item.barcode);

        // Second sale of a now-empty item fails and changes nothing.
        let err = catalog.sell_by_barcode(&item.barcode).await.unwrap_err();
        assert!(matches!(err, SaleError::OutOfStock { .. }));
        assert_eq!(catalog.list_inventory().await.unwrap()[0].stock, 0);

        let err = catalog.sell_by_barcode("000000000").await.unwrap_err();
        assert!(matches!(err, SaleError::NotFound { .. }));

        let sales = catalog.recent_sales(10).await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].item_name, "Radio");
    }
}
