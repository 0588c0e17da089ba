//! Cart and line item types.

use crate::cart::{compute_totals, AppliedPromo, CartTotals, PricingConfig};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart for a single session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in the cart.
    pub lines: Vec<CartLine>,
    /// The active promo, if any. At most one at a time.
    pub promo: Option<AppliedPromo>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart with the chosen size and color.
    ///
    /// A line for the same product, size, and color already in the cart has
    /// its quantity increased instead of a second line appearing. Quantity
    /// must be positive.
    pub fn add_line(
        &mut self,
        product: &Product,
        quantity: i64,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let size = size.into();
        let color = color.into();

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id && l.size == size && l.color == color)
        {
            existing.quantity += quantity;
            return Ok(existing.id.clone());
        }

        let line = CartLine {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            unit_price: product.price,
            quantity,
            size,
            color,
        };
        let id = line.id.clone();
        self.lines.push(line);
        Ok(id)
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line entirely — deletion
    /// disguised as a quantity update; a zero-quantity line is never stored.
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, line_id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_line(line_id);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == line_id) {
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Remove a line from the cart.
    pub fn remove_line(&mut self, line_id: &LineItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        self.lines.len() < len_before
    }

    /// Clear all lines and the active promo.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.promo = None;
    }

    /// Apply a promo code, replacing any active one. Never stacks.
    ///
    /// An invalid code leaves the cart (and any previously applied promo)
    /// untouched.
    pub fn apply_promo(&mut self, code: &str) -> Result<AppliedPromo, CommerceError> {
        let promo = AppliedPromo::resolve(code)?;
        debug!(code = %promo.code, "promo applied to cart");
        self.promo = Some(promo.clone());
        Ok(promo)
    }

    /// Remove the active promo.
    pub fn remove_promo(&mut self) -> bool {
        self.promo.take().is_some()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by id.
    pub fn get_line(&self, line_id: &LineItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Compute order totals for this cart under a pricing configuration.
    pub fn totals(&self, config: &PricingConfig) -> CartTotals {
        compute_totals(&self.lines, self.promo.as_ref(), config)
    }
}

/// A line in the cart.
///
/// Size and color are recorded at add-to-cart time and are not re-validated
/// against the product's current facets. Name, brand, and unit price are
/// denormalized for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: LineItemId,
    /// The product this line references.
    pub product_id: ProductId,
    /// Product name (denormalized).
    pub name: String,
    /// Brand name (denormalized).
    pub brand: String,
    /// Unit price captured at add time.
    pub unit_price: Money,
    /// Quantity; always positive while the line exists.
    pub quantity: i64,
    /// Size selected at add time.
    pub size: String,
    /// Color selected at add time.
    pub color: String,
}

impl CartLine {
    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}
