//! Order total computation.

use crate::cart::{AppliedPromo, CartLine};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing configuration: the tunable constants of total computation.
///
/// Kept out of the algorithm so rates can change without touching it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Flat shipping fee charged below the free-shipping threshold.
    pub shipping_fee: Money,
    /// Subtotal must be strictly greater than this for free shipping.
    pub free_shipping_threshold: Money,
    /// Tax rate applied to the subtotal.
    pub tax_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_fee: Money::from_cents(999),
            free_shipping_threshold: Money::from_cents(10000),
            tax_rate: 0.08,
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line subtotals before fees and discounts.
    pub subtotal: Money,
    /// Shipping cost (zero above the free-shipping threshold).
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Promo discount amount.
    pub discount: Money,
    /// Final total (subtotal + shipping + tax - discount), never negative.
    pub total: Money,
}

impl CartTotals {
    /// Check if shipping is free.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Check if a discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

/// Compute order totals for a set of cart lines and an optional promo.
///
/// Pure: same lines, promo, and configuration always produce the same
/// breakdown. Each line contributes its captured unit price times quantity;
/// the discount fraction applies to the subtotal only, not to fees. The
/// final total is clamped at zero in case a future discount model could
/// exceed subtotal plus fees.
pub fn compute_totals(
    lines: &[CartLine],
    promo: Option<&AppliedPromo>,
    config: &PricingConfig,
) -> CartTotals {
    let subtotal: Money = lines.iter().map(|l| l.subtotal()).sum();

    let shipping = if subtotal > config.free_shipping_threshold {
        Money::ZERO
    } else {
        config.shipping_fee
    };

    let tax = subtotal.multiply_fraction(config.tax_rate);

    let discount = match promo {
        Some(promo) => subtotal.multiply_fraction(promo.fraction),
        None => Money::ZERO,
    };

    let total = (subtotal + shipping + tax - discount).clamp_non_negative();

    CartTotals {
        subtotal,
        shipping,
        tax,
        discount,
        total,
    }
}
