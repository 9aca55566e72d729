//! # Barcode Generation
//!
//! Every scannable entity in the shop (inventory item, repair ticket,
//! completed sale) is identified by a 9-digit decimal barcode drawn
//! uniformly at random.
//!
//! ## Algorithm
//! Draw a uniform `u32` below 1,000,000,000 and render it as a decimal
//! string left-padded with zeros to exactly 9 characters. Generation itself
//! performs no collision check; callers that persist barcodes rely on the
//! UNIQUE indexes plus a bounded insert-retry loop. At ~10^9 possible codes
//! a small shop will not see a collision in practice, but the retry keeps
//! the guarantee honest.

use rand::Rng;

/// Length of every barcode, in characters.
pub const BARCODE_LEN: usize = 9;

/// Exclusive upper bound of the barcode number space (10^9).
const BARCODE_SPACE: u32 = 1_000_000_000;

/// Generates a fresh 9-digit barcode.
///
/// ## Example
/// ```rust
/// use revive_core::barcode;
///
/// let code = barcode::generate();
/// assert_eq!(code.len(), 9);
/// assert!(code.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate() -> String {
    let n = rand::thread_rng().gen_range(0..BARCODE_SPACE);
    format!("{:09}", n)
}

/// Checks whether a string has the shape of a barcode this system issues:
/// exactly 9 ASCII digits.
///
/// Scanners "type" very fast, so the presentation layer can use this to
/// distinguish a scan from ordinary text input before calling lookup.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == BARCODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}
