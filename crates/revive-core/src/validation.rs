//! # Validation Module
//!
//! Input validation for Revive POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                          │
//! │                                                                 │
//! │  Layer 1: Presentation (dialogs)                                │
//! │  ├── Basic format checks, numeric spinners with ranges          │
//! │  └── Immediate operator feedback                                │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: Services (Rust)                                       │
//! │  └── THIS MODULE: rejected before any storage access            │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 3: Database (SQLite)                                     │
//! │  ├── NOT NULL constraints                                       │
//! │  ├── UNIQUE constraints (username, barcodes)                    │
//! │  └── Foreign key constraints                                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_PRICE_CENTS, MAX_STOCK, MAX_TEXT_LEN};

/// Validates a required free-text field (item name, repair issue,
/// customer name, email, ...).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_TEXT_LEN`] characters
///
/// ## Example
/// ```rust
/// use revive_core::validation::validate_required_text;
///
/// assert!(validate_required_text("name", "Toaster").is_ok());
/// assert!(validate_required_text("name", "   ").is_err());
/// ```
pub fn validate_required_text(field: &'static str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates an item price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: giveaway items exist)
/// - Must not exceed [`MAX_PRICE_CENTS`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price",
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates an item stock count.
///
/// ## Rules
/// - Must be non-negative
/// - Must not exceed [`MAX_STOCK`]
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if !(0..=MAX_STOCK).contains(&stock) {
        return Err(ValidationError::OutOfRange {
            field: "stock",
            min: 0,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

/// Validates a customer search term.
///
/// An empty term is allowed here; the customer service treats it as a
/// cancelled search rather than a list-all.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: "search term",
            max: MAX_TEXT_LEN,
        });
    }

    Ok(term.to_string())
}
