//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront domain operations.
///
/// Every variant is deterministic and locally recoverable; nothing in this
/// crate treats an error as fatal. An invalid promo code, for example, leaves
/// the cart usable with no discount applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share the same id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Invalid quantity (zero or negative on add).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Submitted promo code does not match the lookup table.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),
}
