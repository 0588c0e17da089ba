//! Catalog module.
//!
//! Contains the immutable product record and the read-only catalog store.

mod fixture;
mod product;
mod store;

pub use fixture::sample_catalog;
pub use product::Product;
pub use store::Catalog;
