//! # Inventory Repository
//!
//! Database operations for inventory items.
//!
//! ## Key Operations
//! - CRUD over the inventory table
//! - Barcode lookups
//! - The atomic single-unit sale
//!
//! ## The Sale Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     sell_one(barcode)                           │
//! │                                                                 │
//! │  BEGIN                                                          │
//! │    SELECT id, name, price_cents, stock WHERE barcode = ?        │
//! │      ├── no row       → NotFound (nothing written)              │
//! │      ├── stock <= 0   → OutOfStock (nothing written)            │
//! │      ▼                                                          │
//! │    UPDATE inventory SET stock = stock - 1                       │
//! │      WHERE id = ? AND stock > 0   ← guard re-checked in SQL     │
//! │    INSERT INTO sales (item_name, price_cents, barcode, ...)     │
//! │  COMMIT                                                         │
//! │                                                                 │
//! │  The decrement and the ledger append commit together or not     │
//! │  at all; no partial update is ever observable.                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use revive_core::InventoryItem;

/// Outcome of an attempted single-unit sale.
///
/// The service layer maps this onto its own error taxonomy; the repository
/// only reports what the rows said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SellOutcome {
    /// Stock was decremented and the ledger row written.
    Sold { name: String, price_cents: i64 },
    /// The item exists but has no stock left.
    OutOfStock,
    /// No item carries this barcode.
    NotFound,
}

/// Repository for inventory database operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Returns the full inventory snapshot.
    pub async fn list(&self) -> StorageResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, category, condition, price_cents, stock, barcode,
                   created_at, updated_at
            FROM inventory
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Gets an item by its id.
    pub async fn get(&self, id: i64) -> StorageResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, category, condition, price_cents, stock, barcode,
                   created_at, updated_at
            FROM inventory
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its barcode.
    pub async fn get_by_barcode(&self, barcode: &str) -> StorageResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, category, condition, price_cents, stock, barcode,
                   created_at, updated_at
            FROM inventory
            WHERE barcode = ?1
            "#,
        )
        .bind(barcode)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new item.
    ///
    /// ## Returns
    /// * `Ok(InventoryItem)` - Inserted item with its assigned id
    /// * `Err(StorageError::UniqueViolation)` - Barcode already taken
    pub async fn insert(
        &self,
        name: &str,
        category: Option<&str>,
        condition: Option<&str>,
        price_cents: i64,
        stock: i64,
        barcode: &str,
    ) -> StorageResult<InventoryItem> {
        debug!(name = %name, barcode = %barcode, "Inserting inventory item");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO inventory (name, category, condition, price_cents, stock,
                                   barcode, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(condition)
        .bind(price_cents)
        .bind(stock)
        .bind(barcode)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(InventoryItem {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            category: category.map(str::to_string),
            condition: condition.map(str::to_string),
            price_cents,
            stock,
            barcode: barcode.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrites the three mutable fields of an existing item.
    ///
    /// The barcode is immutable once assigned and is not touched here.
    ///
    /// ## Returns
    /// * `Err(StorageError::NotFound)` - `id` doesn't resolve to a row
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        price_cents: i64,
        stock: i64,
    ) -> StorageResult<()> {
        debug!(id = %id, "Updating inventory item");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET name = ?2, price_cents = ?3, stock = ?4, updated_at = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(price_cents)
        .bind(stock)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("inventory item", id));
        }

        Ok(())
    }

    /// Removes an item permanently.
    ///
    /// Irreversible; any confirmation step belongs to the caller's caller.
    pub async fn delete(&self, id: i64) -> StorageResult<()> {
        debug!(id = %id, "Deleting inventory item");

        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("inventory item", id));
        }

        Ok(())
    }

    /// Sells exactly one unit of the item carrying `barcode`.
    ///
    /// Runs the stock check, the decrement, and the sale-ledger append in
    /// one transaction (see the module docs). `sale_barcode` is the freshly
    /// generated code identifying the transaction itself.
    pub async fn sell_one(&self, barcode: &str, sale_barcode: &str) -> StorageResult<SellOutcome> {
        debug!(barcode = %barcode, "Attempting single-unit sale");

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, (i64, String, i64, i64)>(
            "SELECT id, name, price_cents, stock FROM inventory WHERE barcode = ?1",
        )
        .bind(barcode)
        .fetch_optional(&mut *tx)
        .await?;

        let (id, name, price_cents, stock) = match row {
            None => return Ok(SellOutcome::NotFound),
            Some(row) => row,
        };

        if stock <= 0 {
            return Ok(SellOutcome::OutOfStock);
        }

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET stock = stock - 1, updated_at = ?2
            WHERE id = ?1 AND stock > 0
            "#,
        )
        .bind(id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        // The WHERE guard makes a lost-update race impossible even if the
        // snapshot read above went stale.
        if result.rows_affected() == 0 {
            return Ok(SellOutcome::OutOfStock);
        }

        sqlx::query(
            r#"
            INSERT INTO sales (item_name, price_cents, barcode, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&name)
        .bind(price_cents)
        .bind(sale_barcode)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(SellOutcome::Sold { name, price_cents })
    }

    /// Counts inventory rows (for diagnostics and the seed tool).
    pub async fn count(&self) -> StorageResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_list_roundtrip() {
        let db = test_db().await;
        let repo = db.inventory();

        let item = repo
            .insert("Toaster", Some("Appliances"), None, 1250, 3, "000123456")
            .await
            .unwrap();
        assert!(item.id > 0);

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Toaster");
        assert_eq!(all[0].category.as_deref(), Some("Appliances"));
        assert_eq!(all[0].price_cents, 1250);
        assert_eq!(all[0].stock, 3);
        assert_eq!(all[0].barcode, "000123456");
    }

    #[tokio::test]
    async fn test_duplicate_barcode_is_a_unique_violation() {
        let db = test_db().await;
        let repo = db.inventory();

        repo.insert("Kettle", None, None, 900, 1, "111111111")
            .await
            .unwrap();
        let err = repo
            .insert("Lamp", None, None, 700, 1, "111111111")
            .await
            .unwrap_err();

        assert!(err.is_unique_violation_on("barcode"), "got {err:?}");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows() {
        let db = test_db().await;
        let repo = db.inventory();

        let err = repo.update(42, "Ghost", 100, 1).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_sell_one_decrements_until_out_of_stock() {
        let db = test_db().await;
        let repo = db.inventory();

        let item = repo
            .insert("Radio", None, None, 2000, 1, "222222222")
            .await
            .unwrap();

        let outcome = repo.sell_one("222222222", "900000001").await.unwrap();
        assert_eq!(
            outcome,
            SellOutcome::Sold {
                name: "Radio".to_string(),
                price_cents: 2000
            }
        );

        let after = repo.get(item.id).await.unwrap().unwrap();
        assert_eq!(after.stock, 0);

        let outcome = repo.sell_one("222222222", "900000002").await.unwrap();
        assert_eq!(outcome, SellOutcome::OutOfStock);
        assert_eq!(repo.get(item.id).await.unwrap().unwrap().stock, 0);

        let outcome = repo.sell_one("333333333", "900000003").await.unwrap();
        assert_eq!(outcome, SellOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_sell_one_writes_the_ledger_atomically() {
        let db = test_db().await;

        db.inventory()
            .insert("Mixer", None, None, 4500, 2, "444444444")
            .await
            .unwrap();
        db.inventory()
            .sell_one("444444444", "900000009")
            .await
            .unwrap();

        let sales = db.sales().list_recent(10).await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].item_name, "Mixer");
        assert_eq!(sales[0].price_cents, 4500);
        assert_eq!(sales[0].barcode, "900000009");

        // A failed sale must leave the ledger alone.
        db.inventory()
            .sell_one("555555555", "900000010")
            .await
            .unwrap();
        assert_eq!(db.sales().list_recent(10).await.unwrap().len(), 1);
    }
}
