//! Search module.
//!
//! Contains the filter criteria, the query engine (filter + stable sort),
//! and facet count aggregation.

mod criteria;
mod engine;
mod facets;

pub use criteria::{FilterCriteria, PriceRange, SortKey};
pub use engine::query_products;
pub use facets::{count_by_facet, facet_values, FacetField, FacetValue};
