//! Product record type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are static reference data: loaded once at startup and read-only
/// thereafter. `is_on_sale` is taken as given and is never derived from
/// `original_price` — the two fields are trusted independently, matching the
/// source data's permissive behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name as displayed (e.g., "New Balance").
    pub brand: String,
    /// Current price.
    pub price: Money,
    /// Pre-sale price, present when the product is discounted.
    pub original_price: Option<Money>,
    /// Average review rating in [0, 5].
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Category tag (e.g., "running", "lifestyle").
    pub category: String,
    /// Gender tag (e.g., "men").
    pub gender: String,
    /// Available size labels.
    pub sizes: Vec<String>,
    /// Color swatches as hex strings, in display order.
    pub colors: Vec<String>,
    /// New arrival flag.
    pub is_new: bool,
    /// On-sale flag.
    pub is_on_sale: bool,
}

impl Product {
    /// Create a product with the required fields; facets start empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            price,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            category: String::new(),
            gender: String::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            is_new: false,
            is_on_sale: false,
        }
    }

    /// Set the pre-sale price and mark the product on sale.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self.is_on_sale = true;
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Set category and gender tags.
    pub fn with_tags(mut self, category: impl Into<String>, gender: impl Into<String>) -> Self {
        self.category = category.into();
        self.gender = gender.into();
        self
    }

    /// Set available sizes.
    pub fn with_sizes(mut self, sizes: &[&str]) -> Self {
        self.sizes = sizes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set color swatches (display order preserved).
    pub fn with_colors(mut self, colors: &[&str]) -> Self {
        self.colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Mark as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Check if the product carries a size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if the product has a real markdown (original price above current).
    pub fn is_discounted(&self) -> bool {
        self.original_price.map(|op| op > self.price).unwrap_or(false)
    }

    /// Markdown percentage, when discounted.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op > self.price {
                let savings = (op - self.price).cents();
                Some(savings as f64 / op.cents() as f64 * 100.0)
            } else {
                None
            }
        })
    }
}
