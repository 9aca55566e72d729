//! # Repair Ticket Service
//!
//! Creates repair requests and resolves their customers.
//!
//! Customer resolution is a single find-or-create: exact case-sensitive
//! name match, with implicit creation (0 points, no email) when the name is
//! new. Two identical-name submissions share one customer row.

use tracing::{debug, info};

use crate::error::RepairError;
use revive_core::{barcode, validation, RepairTicket};
use revive_db::{Database, StorageError};

/// Barcode re-draws before a collision is surfaced; see the catalog
/// service for the same bound.
const MAX_BARCODE_ATTEMPTS: u32 = 5;

/// Repair ticket service.
#[derive(Debug, Clone)]
pub struct RepairService {
    db: Database,
}

impl RepairService {
    /// Creates a new RepairService.
    pub fn new(db: Database) -> Self {
        RepairService { db }
    }

    /// Creates a repair request for a named customer.
    ///
    /// All three fields are required. The ticket starts `Pending` and
    /// carries a fresh barcode for the claim stub.
    pub async fn create_repair_request(
        &self,
        item: &str,
        issue: &str,
        customer_name: &str,
    ) -> Result<RepairTicket, RepairError> {
        validation::validate_required_text("item", item)?;
        validation::validate_required_text("issue", issue)?;
        validation::validate_required_text("customer name", customer_name)?;

        let customer = self
            .db
            .customers()
            .find_or_create_by_name(customer_name.trim())
            .await?;

        let repo = self.db.repairs();

        let mut attempt = 0;
        loop {
            let code = barcode::generate();
            match repo
                .insert(item.trim(), issue.trim(), customer.id, &code)
                .await
            {
                Ok(ticket) => {
                    info!(
                        id = ticket.id,
                        customer_id = customer.id,
                        barcode = %ticket.barcode,
                        "Repair request created"
                    );
                    return Ok(ticket);
                }
                Err(err) if err.is_unique_violation_on("barcode") && attempt + 1 < MAX_BARCODE_ATTEMPTS => {
                    debug!(barcode = %code, "Barcode collision, drawing again");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Returns all repair tickets for the repairs tab, oldest first.
    pub async fn list_repairs(&self) -> Result<Vec<RepairTicket>, StorageError> {
        self.db.repairs().list().await
    }
}
