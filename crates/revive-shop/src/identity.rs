//! # Identity Service
//!
//! Validates username/password pairs and returns the account's role. The
//! role decides which dashboard capabilities the presentation layer shows.

use tracing::{debug, info};

use crate::error::AuthError;
use revive_core::credentials::password_digest;
use revive_core::Role;
use revive_db::Database;

/// Authentication service.
#[derive(Debug, Clone)]
pub struct IdentityService {
    db: Database,
}

impl IdentityService {
    /// Creates a new IdentityService.
    pub fn new(db: Database) -> Self {
        IdentityService { db }
    }

    /// Authenticates a username/password pair.
    ///
    /// Digests the password and matches username + digest in a single
    /// query. Every mismatch (unknown user, wrong password, empty input)
    /// yields the same [`AuthError::InvalidCredentials`], so callers cannot
    /// enumerate usernames from error text.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Role, AuthError> {
        debug!(username = %username, "Login attempt");

        let digest = password_digest(password);

        let account = self
            .db
            .accounts()
            .find_by_credentials(username, &digest)
            .await?;

        match account {
            Some(account) => {
                info!(username = %username, role = %account.role, "Login succeeded");
                Ok(account.role)
            }
            None => Err(AuthError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revive_core::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
    use revive_db::DbConfig;

    async fn service() -> IdentityService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        IdentityService::new(db)
    }

    #[tokio::test]
    async fn test_seeded_admin_logs_in() {
        let identity = service().await;

        let role = identity
            .authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .await
            .unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[tokio::test]
    async fn test_every_mismatch_is_the_same_error() {
        let identity = service().await;

        let cases = [
            ("admin", "wrongpassword"),
            ("nonexistent", "admin123"),
            ("nonexistent", "wrongpassword"),
            ("", ""),
            ("admin", ""),
        ];

        let mut messages = Vec::new();
        for (user, pass) in cases {
            let err = identity.authenticate(user, pass).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials), "{user}/{pass}");
            messages.push(err.to_string());
        }

        // Identical text for every failure mode.
        assert!(messages.windows(2).all(|w| w[0] == w[1]));
    }
}
