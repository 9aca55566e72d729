//! # Default Account Seeding
//!
//! Guarantees the invariant that at least one admin account exists: every
//! startup inserts the default administrator if and only if no account with
//! that username is already present.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::StorageResult;
use revive_core::credentials::password_digest;
use revive_core::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

/// Idempotently seeds the default admin account.
///
/// `INSERT OR IGNORE` against the unique username makes repeated startups a
/// no-op; the stored credential is the digest, never the raw password.
pub async fn seed_default_admin(pool: &SqlitePool) -> StorageResult<()> {
    let now = Utc::now();
    let digest = password_digest(DEFAULT_ADMIN_PASSWORD);

    let result = sqlx::query(
        r#"
        INSERT OR IGNORE INTO accounts (username, password_hash, role, created_at)
        VALUES (?1, ?2, 'admin', ?3)
        "#,
    )
    .bind(DEFAULT_ADMIN_USERNAME)
    .bind(&digest)
    .bind(now)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        info!(username = DEFAULT_ADMIN_USERNAME, "Seeded default admin account");
    } else {
        debug!("Default admin account already present");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        // Database::new already seeds once; seed again explicitly.
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        super::seed_default_admin(db.pool()).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
