//! Promo code resolution.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The fixed promo code table: canonical code and discount fraction.
const PROMO_TABLE: &[(&str, f64)] = &[("save10", 0.10), ("save20", 0.20)];

/// A promo code that resolved against the lookup table.
///
/// At most one promo is active on a cart at a time; applying a new code
/// replaces the previous one, never stacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedPromo {
    /// Canonical (lower-cased) code.
    pub code: String,
    /// Fraction of the subtotal discounted (e.g., 0.10).
    pub fraction: f64,
}

impl AppliedPromo {
    /// Resolve a submitted code case-insensitively against the table.
    ///
    /// An unmatched code yields `CommerceError::InvalidPromoCode`; the caller
    /// surfaces the message and the cart stays usable with no discount.
    pub fn resolve(input: &str) -> Result<Self, CommerceError> {
        let normalized = input.trim().to_lowercase();
        match PROMO_TABLE.iter().find(|(code, _)| *code == normalized) {
            Some((code, fraction)) => {
                debug!(code, "promo code resolved");
                Ok(Self {
                    code: code.to_string(),
                    fraction: *fraction,
                })
            }
            None => Err(CommerceError::InvalidPromoCode(input.to_string())),
        }
    }

    /// Discount as a display percentage (e.g., 10 for save10).
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }
}
