//! # Sale Repository
//!
//! Read access to the append-only sale ledger. Rows are written by the
//! inventory repository inside the sale transaction; nothing updates or
//! deletes them afterwards.

use sqlx::SqlitePool;

use crate::error::StorageResult;
use revive_core::SaleRecord;

/// Repository for the sale ledger.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Returns the most recent sales, newest first.
    pub async fn list_recent(&self, limit: u32) -> StorageResult<Vec<SaleRecord>> {
        let sales = sqlx::query_as::<_, SaleRecord>(
            r#"
            SELECT id, item_name, price_cents, barcode, created_at
            FROM sales
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }
}
