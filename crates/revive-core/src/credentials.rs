//! # Credential Digest
//!
//! One-way digest applied to passwords before they are stored or compared.
//!
//! The digest is plain hex SHA-256 with no per-account salt: a fixed
//! password always maps to the same stored value, which the seeded admin
//! fixture depends on, and which is an accepted trade-off for a
//! single-tenant local database file. A deployment that ever exposes this
//! core to more than one tenant should move to a salted scheme.

use sha2::{Digest, Sha256};

/// Computes the lowercase hex SHA-256 digest of a password.
///
/// ## Example
/// ```rust
/// use revive_core::credentials::password_digest;
///
/// let digest = password_digest("admin123");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn password_digest(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}
