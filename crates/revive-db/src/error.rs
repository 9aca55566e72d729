//! # Storage Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                            │
//! │                                                                 │
//! │  SQLite Error (sqlx::Error)                                     │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  StorageError (this module) ← adds context and categorization   │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Service errors (revive-shop) ← compose with validation errors  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Presentation layer displays the message                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures propagate unchanged to the caller and are never
//! silently retried.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - `rows_affected() == 0` on a guarded update or delete
    /// - An id that was deleted out from under the caller
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Seeding a username that already exists
    /// - A barcode collision on insert (re-rolled by the caller)
    #[error("duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Foreign key constraint violation.
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// Fatal to the hosting process: the store could not be opened or
    /// created.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StorageError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True when the error is a UNIQUE violation on the named field.
    ///
    /// The barcode insert-retry loops use this to re-roll only on barcode
    /// collisions and surface every other constraint failure.
    pub fn is_unique_violation_on(&self, field_suffix: &str) -> bool {
        matches!(self, StorageError::UniqueViolation { field, .. } if field.ends_with(field_suffix))
    }
}

/// Convert sqlx errors to StorageError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → StorageError::NotFound
/// sqlx::Error::Database       → classify by constraint message
/// sqlx::Error::PoolTimedOut   → StorageError::PoolExhausted
/// Other                       → StorageError::Internal
/// ```
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound {
                entity: "record",
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraints in the message text:
                // "UNIQUE constraint failed: <table>.<column>"
                // "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    StorageError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    StorageError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    StorageError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StorageError::PoolExhausted,

            sqlx::Error::PoolClosed => {
                StorageError::ConnectionFailed("pool is closed".to_string())
            }

            _ => StorageError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type StorageResult<T> = Result<T, StorageError>;
