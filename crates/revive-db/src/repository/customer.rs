//! # Customer Repository
//!
//! Database operations for customers and their loyalty points.
//!
//! ## Find-or-Create
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │             find_or_create_by_name("Grace Hopper")              │
//! │                                                                 │
//! │  BEGIN                                                          │
//! │    SELECT ... WHERE name = 'Grace Hopper'   (exact match)       │
//! │      ├── row exists → return it                                 │
//! │      ▼                                                          │
//! │    INSERT INTO customers (name, points, ...) VALUES (?, 0, ...) │
//! │  COMMIT                                                         │
//! │                                                                 │
//! │  The select and the conditional insert share one transaction,   │
//! │  so two identical-name submissions cannot both insert.          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use revive_core::Customer;

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Gets a customer by id.
    pub async fn get(&self, id: i64) -> StorageResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, points, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a new customer row.
    pub async fn insert(
        &self,
        name: &str,
        email: Option<&str>,
        points: i64,
    ) -> StorageResult<Customer> {
        debug!(name = %name, points = %points, "Inserting customer");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, email, points, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(points)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Customer {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.map(str::to_string),
            points,
            created_at: now,
        })
    }

    /// Resolves a customer by exact name, creating one when absent.
    ///
    /// Implicitly created customers start with 0 points and no email.
    /// The lookup and the conditional insert run in one transaction so
    /// concurrent identical-name submissions cannot create duplicates.
    pub async fn find_or_create_by_name(&self, name: &str) -> StorageResult<Customer> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, points, created_at
            FROM customers
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(customer) = existing {
            return Ok(customer);
        }

        debug!(name = %name, "Creating customer implicitly");

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, email, points, created_at)
            VALUES (?1, NULL, 0, ?2)
            "#,
        )
        .bind(name)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let customer = Customer {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: None,
            points: 0,
            created_at: now,
        };

        tx.commit().await?;

        Ok(customer)
    }

    /// Case-insensitive substring search over name OR email.
    pub async fn search(&self, term: &str) -> StorageResult<Vec<Customer>> {
        let pattern = format!("%{}%", term);

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, points, created_at
            FROM customers
            WHERE name LIKE ?1 OR email LIKE ?1
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Adds `delta` (either sign) to a customer's point balance.
    ///
    /// With `clamp_at_zero` the stored balance never drops below zero;
    /// without it the balance is whatever the arithmetic says.
    pub async fn adjust_points(
        &self,
        id: i64,
        delta: i64,
        clamp_at_zero: bool,
    ) -> StorageResult<()> {
        debug!(id = %id, delta = %delta, clamp_at_zero, "Adjusting points");

        let sql = if clamp_at_zero {
            "UPDATE customers SET points = MAX(0, points + ?2) WHERE id = ?1"
        } else {
            "UPDATE customers SET points = points + ?2 WHERE id = ?1"
        };

        let result = sqlx::query(sql)
            .bind(id)
            .bind(delta)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("customer", id));
        }

        Ok(())
    }
}
