//! # Account Repository
//!
//! Database operations for login accounts. Accounts are read on every login
//! attempt and never deleted; the single write path is the startup seeding
//! in [`crate::seed`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageResult;
use revive_core::Account;

/// Repository for account database operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    /// Creates a new AccountRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AccountRepository { pool }
    }

    /// Finds the account matching both username and credential digest.
    ///
    /// One query matches both columns at once, so the caller cannot tell an
    /// unknown username from a wrong password; the distinction never
    /// exists in this layer.
    ///
    /// ## Returns
    /// * `Ok(Some(Account))` - Credentials match a stored row
    /// * `Ok(None)` - No row matches
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> StorageResult<Option<Account>> {
        debug!(username = %username, "Looking up credentials");

        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM accounts
            WHERE username = ?1 AND password_hash = ?2
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use revive_core::credentials::password_digest;
    use revive_core::{Role, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

    #[tokio::test]
    async fn test_seeded_admin_is_found_by_credentials() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let account = db
            .accounts()
            .find_by_credentials(
                DEFAULT_ADMIN_USERNAME,
                &password_digest(DEFAULT_ADMIN_PASSWORD),
            )
            .await
            .unwrap()
            .expect("seeded admin should match");

        assert_eq!(account.role, Role::Admin);
        assert_eq!(account.username, "admin");
    }

    #[tokio::test]
    async fn test_wrong_digest_finds_nothing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let account = db
            .accounts()
            .find_by_credentials(DEFAULT_ADMIN_USERNAME, &password_digest("nope"))
            .await
            .unwrap();

        assert!(account.is_none());
    }
}
