//! Facet count aggregation.
//!
//! Counts always come from the full catalog, never from the currently
//! filtered subset — a filter option label like "Nike (5)" reports total
//! catalog availability.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A categorical dimension of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetField {
    Brand,
    Category,
    Size,
    Gender,
}

impl FacetField {
    /// Parse a facet name; unknown names yield None.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "brand" => Some(FacetField::Brand),
            "category" => Some(FacetField::Category),
            "size" => Some(FacetField::Size),
            "gender" => Some(FacetField::Gender),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetField::Brand => "brand",
            FacetField::Category => "category",
            FacetField::Size => "size",
            FacetField::Gender => "gender",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetField::Brand => "Brand",
            FacetField::Category => "Category",
            FacetField::Size => "Size",
            FacetField::Gender => "Gender",
        }
    }
}

/// A single facet value with its catalog count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value (brand identifiers are lower-cased).
    pub value: String,
    /// Number of catalog products exhibiting this value.
    pub count: u32,
    /// Whether currently selected in the UI.
    pub selected: bool,
}

/// Count catalog products by facet name.
///
/// Brand keys are lower-cased to match `FilterCriteria::brands`. Products
/// with an absent (empty) value for the facet are skipped, and an unknown
/// facet name returns an empty map rather than erroring.
pub fn count_by_facet(catalog: &Catalog, facet: &str) -> BTreeMap<String, u32> {
    match FacetField::from_name(facet) {
        Some(field) => count_field(catalog, field),
        None => BTreeMap::new(),
    }
}

/// Count catalog products by a typed facet field.
pub fn count_field(catalog: &Catalog, field: FacetField) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for product in catalog {
        match field {
            FacetField::Brand => bump(&mut counts, &product.brand.to_lowercase()),
            FacetField::Category => bump(&mut counts, &product.category),
            FacetField::Gender => bump(&mut counts, &product.gender),
            // A product counts once per size it carries.
            FacetField::Size => {
                for size in &product.sizes {
                    bump(&mut counts, size);
                }
            }
        }
    }
    counts
}

fn bump(counts: &mut BTreeMap<String, u32>, value: &str) {
    if value.is_empty() {
        return;
    }
    *counts.entry(value.to_string()).or_insert(0) += 1;
}

/// Assemble labeled facet values for rendering filter options, marking the
/// values currently selected.
pub fn facet_values(
    catalog: &Catalog,
    field: FacetField,
    selected: &BTreeSet<String>,
) -> Vec<FacetValue> {
    count_field(catalog, field)
        .into_iter()
        .map(|(value, count)| FacetValue {
            selected: selected.contains(&value),
            value,
            count,
        })
        .collect()
}
