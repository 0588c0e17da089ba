//! Filter criteria and sort keys.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sort options for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// New arrivals first, catalog order within each group.
    #[default]
    Newest,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// Most reviewed first.
    Popular,
}

impl SortKey {
    /// Parse a sort key string; unrecognized keys fall back to `Newest`.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "popular" => SortKey::Popular,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Popular => "popular",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Popular => "Most Popular",
        }
    }
}

/// An inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a price range. Bounds arriving swapped (min > max) are kept as
    /// given here and normalized at query time.
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// A range admitting every price.
    pub fn unbounded() -> Self {
        Self {
            min: Money::ZERO,
            max: Money::from_cents(i64::MAX),
        }
    }

    /// Return the range with min/max swapped into order if needed.
    ///
    /// Adversarial UI input (sliders crossing) must never crash a query.
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            Self {
                min: self.max,
                max: self.min,
            }
        } else {
            self
        }
    }

    /// Check if a price is within the range, inclusive at both ends.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Transient filter state, rebuilt by the presentation layer on every
/// interaction and passed into the query engine.
///
/// Empty facet sets mean "no restriction". Brand identifiers are matched
/// lower-cased; size and category tags are matched exactly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively against name and brand.
    pub search_term: String,
    /// Selected brand identifiers, lower-cased.
    pub brands: BTreeSet<String>,
    /// Selected size labels (any-of semantics).
    pub sizes: BTreeSet<String>,
    /// Selected category tags.
    pub categories: BTreeSet<String>,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Criteria matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Add a brand restriction (stored lower-cased).
    pub fn with_brand(mut self, brand: impl AsRef<str>) -> Self {
        self.brands.insert(brand.as_ref().to_lowercase());
        self
    }

    /// Add a size restriction.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.insert(size.into());
        self
    }

    /// Add a category restriction.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Check if no restriction is active (identity transform under filtering).
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty()
            && self.brands.is_empty()
            && self.sizes.is_empty()
            && self.categories.is_empty()
            && self.price_range == PriceRange::unbounded()
    }
}
