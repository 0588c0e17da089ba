//! Shopping cart module.
//!
//! Contains the cart, line items, promo codes, and order total computation.

mod cart;
mod pricing;
mod promo;

pub use cart::{Cart, CartLine};
pub use pricing::{compute_totals, CartTotals, PricingConfig};
pub use promo::AppliedPromo;
