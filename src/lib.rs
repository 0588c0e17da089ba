//! E-commerce domain types and logic for the SneakPeak storefront.
//!
//! This crate holds everything with business meaning in SneakPeak, kept free
//! of framework and rendering concerns:
//!
//! - **Catalog**: immutable product records and the read-only catalog store
//! - **Search**: faceted filtering, stable sorting, facet count aggregation
//! - **Cart**: line items, promo codes, and order total computation
//!
//! Every entry point is a pure function of its inputs. The presentation layer
//! owns all UI state (search text, selected facets, sort key, cart contents)
//! and calls back into this crate on every interaction.
//!
//! # Example
//!
//! ```rust
//! use sneakpeak_commerce::prelude::*;
//!
//! let catalog = sample_catalog();
//!
//! // Filter to Nike shoes under $100, cheapest first.
//! let criteria = FilterCriteria::new()
//!     .with_brand("nike")
//!     .with_price_range(PriceRange::new(Money::ZERO, Money::from_dollars(100.0)));
//! let results = query_products(&catalog, &criteria, SortKey::PriceLow);
//! assert!(results.iter().all(|p| p.brand == "Nike"));
//!
//! // Price a cart with a promo code.
//! let mut cart = Cart::new();
//! cart.add_line(&catalog.products()[0], 1, "10", "White/Black").unwrap();
//! cart.apply_promo("SAVE10").unwrap();
//! let totals = cart.totals(&PricingConfig::default());
//! assert!(totals.discount.is_positive());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{sample_catalog, Catalog, Product};

    // Search
    pub use crate::search::{
        count_by_facet, facet_values, query_products, FacetField, FacetValue, FilterCriteria,
        PriceRange, SortKey,
    };

    // Cart
    pub use crate::cart::{
        compute_totals, AppliedPromo, Cart, CartLine, CartTotals, PricingConfig,
    };
}
