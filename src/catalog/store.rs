//! The read-only catalog store.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The static, read-only collection of product records.
///
/// Insertion order is catalog order and feeds the query engine as the input
/// order before sorting. The store is never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, erroring when absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.clone()))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id), "Nike", Money::from_dollars(100.0))
    }

    #[test]
    fn test_catalog_construction() {
        let catalog = Catalog::from_products(vec![product("1"), product("2")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_products(vec![product("1"), product("1")]);
        assert_eq!(
            result.unwrap_err(),
            CommerceError::DuplicateProduct(ProductId::new("1"))
        );
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_products(vec![product("1"), product("2")]).unwrap();
        assert!(catalog.get(&ProductId::new("2")).is_some());
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_require_missing_product() {
        let catalog = Catalog::from_products(vec![product("1")]).unwrap();
        let err = catalog.require(&ProductId::new("99")).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound(ProductId::new("99")));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_products(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog =
            Catalog::from_products(vec![product("3"), product("1"), product("2")]).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
