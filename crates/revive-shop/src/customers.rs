//! # Customer/Loyalty Service
//!
//! Registration, substring search, and loyalty point adjustment.

use tracing::info;

use crate::error::CustomerError;
use revive_core::{validation, Customer, LoyaltyPolicy, REGISTRATION_BONUS_POINTS};
use revive_db::{Database, StorageError};

/// Customer and loyalty-point service.
#[derive(Debug, Clone)]
pub struct CustomerService {
    db: Database,
    policy: LoyaltyPolicy,
}

impl CustomerService {
    /// Creates a CustomerService with the default (unclamped) policy.
    pub fn new(db: Database) -> Self {
        CustomerService {
            db,
            policy: LoyaltyPolicy::default(),
        }
    }

    /// Creates a CustomerService with an explicit loyalty policy.
    pub fn with_policy(db: Database, policy: LoyaltyPolicy) -> Self {
        CustomerService { db, policy }
    }

    /// The active loyalty policy.
    pub fn policy(&self) -> LoyaltyPolicy {
        self.policy
    }

    /// Registers a customer explicitly, granting the signup bonus.
    ///
    /// Both fields are required here; unlike the implicit creation on a
    /// repair ticket, registration is the flow that captures contact data.
    pub async fn register_customer(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Customer, CustomerError> {
        validation::validate_required_text("name", name)?;
        validation::validate_required_text("email", email)?;

        let customer = self
            .db
            .customers()
            .insert(name.trim(), Some(email.trim()), REGISTRATION_BONUS_POINTS)
            .await?;

        info!(id = customer.id, "Customer registered");
        Ok(customer)
    }

    /// Case-insensitive substring search over name or email.
    ///
    /// An empty or whitespace term is a cancelled search: returns an empty
    /// list without touching storage, never a list-all.
    pub async fn search_customers(&self, term: &str) -> Result<Vec<Customer>, StorageError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        self.db.customers().search(term).await
    }

    /// Adds `delta` (positive or negative) to a customer's point balance.
    ///
    /// Fails not-found for an unknown id. Whether the balance may cross
    /// zero is the service's [`LoyaltyPolicy`].
    pub async fn adjust_points(&self, customer_id: i64, delta: i64) -> Result<(), CustomerError> {
        let clamp = self.policy == LoyaltyPolicy::ClampAtZero;
        self.db
            .customers()
            .adjust_points(customer_id, delta, clamp)
            .await?;

        info!(customer_id, delta, "Points adjusted");
        Ok(())
    }

    /// Reads a single customer, e.g. to refresh a points display.
    pub async fn get_customer(&self, customer_id: i64) -> Result<Option<Customer>, StorageError> {
        self.db.customers().get(customer_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revive_core::ValidationError;
    use revive_db::DbConfig;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_registration_grants_the_bonus() {
        let customers = CustomerService::new(db().await);

        let ada = customers
            .register_customer("Ada", "ada@example.com")
            .await
            .unwrap();
        assert_eq!(ada.points, 100);
        assert_eq!(ada.email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_registration_requires_both_fields() {
        let customers = CustomerService::new(db().await);

        for (name, email) in [("", "a@b.c"), ("Ada", ""), ("", "")] {
            let err = customers.register_customer(name, email).await.unwrap_err();
            assert!(matches!(
                err,
                CustomerError::Validation(ValidationError::Required { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_empty_search_is_a_cancelled_operation() {
        let customers = CustomerService::new(db().await);
        customers
            .register_customer("Ada", "ada@example.com")
            .await
            .unwrap();

        assert!(customers.search_customers("").await.unwrap().is_empty());
        assert!(customers.search_customers("   ").await.unwrap().is_empty());
        assert_eq!(customers.search_customers("ada").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unclamped_deduction_goes_negative() {
        let customers = CustomerService::new(db().await);
        let ada = customers
            .register_customer("Ada", "ada@example.com")
            .await
            .unwrap();

        // Documents current behavior: deduction below zero is permitted by
        // default, not an endorsed invariant.
        customers.adjust_points(ada.id, -150).await.unwrap();
        let after = customers.get_customer(ada.id).await.unwrap().unwrap();
        assert_eq!(after.points, -50);
    }

    #[tokio::test]
    async fn test_clamp_policy_stops_at_zero() {
        let customers =
            CustomerService::with_policy(db().await, LoyaltyPolicy::ClampAtZero);
        let ada = customers
            .register_customer("Ada", "ada@example.com")
            .await
            .unwrap();

        customers.adjust_points(ada.id, -150).await.unwrap();
        let after = customers.get_customer(ada.id).await.unwrap().unwrap();
        assert_eq!(after.points, 0);
    }

    #[tokio::test]
    async fn test_adjusting_unknown_customer_fails() {
        let customers = CustomerService::new(db().await);

        let err = customers.adjust_points(42, 10).await.unwrap_err();
        assert!(matches!(
            err,
            CustomerError::Storage(StorageError::NotFound { .. })
        ));
    }
}
