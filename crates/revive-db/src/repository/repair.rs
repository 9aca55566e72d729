//! # Repair Repository
//!
//! Database operations for repair tickets. Tickets are created with status
//! `Pending` and never deleted; status changes belong to the surrounding
//! workflow and arrive as plain text.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageResult;
use revive_core::{RepairStatus, RepairTicket};

/// Repository for repair-ticket database operations.
#[derive(Debug, Clone)]
pub struct RepairRepository {
    pool: SqlitePool,
}

impl RepairRepository {
    /// Creates a new RepairRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RepairRepository { pool }
    }

    /// Inserts a new ticket with status `Pending`.
    ///
    /// ## Returns
    /// * `Err(StorageError::UniqueViolation)` - Barcode already taken
    /// * `Err(StorageError::ForeignKeyViolation)` - `customer_id` unknown
    pub async fn insert(
        &self,
        item: &str,
        issue: &str,
        customer_id: i64,
        barcode: &str,
    ) -> StorageResult<RepairTicket> {
        debug!(item = %item, customer_id = %customer_id, "Inserting repair ticket");

        let now = Utc::now();
        let status = RepairStatus::pending();

        let result = sqlx::query(
            r#"
            INSERT INTO repairs (item, issue, status, customer_id, barcode, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(item)
        .bind(issue)
        .bind(status.as_str().to_string())
        .bind(customer_id)
        .bind(barcode)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(RepairTicket {
            id: result.last_insert_rowid(),
            item: item.to_string(),
            issue: issue.to_string(),
            status,
            customer_id,
            barcode: barcode.to_string(),
            created_at: now,
        })
    }

    /// Gets a ticket by its barcode.
    pub async fn get_by_barcode(&self, barcode: &str) -> StorageResult<Option<RepairTicket>> {
        let ticket = sqlx::query_as::<_, RepairTicket>(
            r#"
            SELECT id, item, issue, status, customer_id, barcode, created_at
            FROM repairs
            WHERE barcode = ?1
            "#,
        )
        .bind(barcode)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }

    /// Returns all tickets, oldest first.
    pub async fn list(&self) -> StorageResult<Vec<RepairTicket>> {
        let tickets = sqlx::query_as::<_, RepairTicket>(
            r#"
            SELECT id, item, issue, status, customer_id, barcode, created_at
            FROM repairs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_and_lookup_by_barcode() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let customer = db
            .customers()
            .find_or_create_by_name("Grace Hopper")
            .await
            .unwrap();

        let ticket = db
            .repairs()
            .insert("Walkman", "Eats tapes", customer.id, "123123123")
            .await
            .unwrap();
        assert_eq!(ticket.status.as_str(), "Pending");

        let found = db
            .repairs()
            .get_by_barcode("123123123")
            .await
            .unwrap()
            .expect("ticket should resolve");
        assert_eq!(found.id, ticket.id);
        assert_eq!(found.item, "Walkman");
        assert_eq!(found.customer_id, customer.id);

        assert_eq!(db.repairs().list().await.unwrap().len(), 1);
    }
}
