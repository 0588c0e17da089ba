//! Sample catalog fixture.
//!
//! The storefront ships with an in-memory catalog of eight sneakers; there is
//! no persistence layer behind it. Demos and tests use this fixture, and a
//! future network-backed catalog would replace it at the call site.

use crate::catalog::{Catalog, Product};
use crate::money::Money;

/// Build the sample sneaker catalog.
pub fn sample_catalog() -> Catalog {
    let products = vec![
        Product::new("1", "Air Force 1 Low", "Nike", Money::from_dollars(110.0))
            .with_original_price(Money::from_dollars(130.0))
            .with_rating(4.8, 1247)
            .with_tags("lifestyle", "men")
            .with_sizes(&["8", "9", "10", "11", "12"])
            .with_colors(&["#ffffff", "#000000", "#ff0000"]),
        Product::new("2", "Air Max LTD 3", "Nike", Money::from_dollars(85.0))
            .with_original_price(Money::from_dollars(100.0))
            .with_rating(4.6, 892)
            .with_tags("running", "men")
            .with_sizes(&["7", "8", "9", "10", "11"])
            .with_colors(&["#000000", "#0066ff", "#808080"]),
        Product::new("3", "Samba OG", "Adidas", Money::from_dollars(100.0))
            .with_rating(4.7, 634)
            .with_tags("lifestyle", "men")
            .with_sizes(&["8", "9", "10", "11", "12"])
            .with_colors(&["#000000", "#ffffff", "#00ff00"])
            .new_arrival(),
        Product::new("4", "2002R", "New Balance", Money::from_dollars(140.0))
            .with_rating(4.9, 456)
            .with_tags("lifestyle", "men")
            .with_sizes(&["7", "8", "9", "10", "11"])
            .with_colors(&["#808080", "#ffffff", "#000000"])
            .new_arrival(),
        Product::new("5", "Air Max Portal", "Nike", Money::from_dollars(75.0))
            .with_original_price(Money::from_dollars(90.0))
            .with_rating(4.5, 323)
            .with_tags("running", "men")
            .with_sizes(&["8", "9", "10", "11"])
            .with_colors(&["#ffffff", "#000000", "#ff6600"]),
        Product::new("6", "Air Force 1 Mid", "Nike", Money::from_dollars(120.0))
            .with_rating(4.7, 789)
            .with_tags("lifestyle", "men")
            .with_sizes(&["8", "9", "10", "11", "12"])
            .with_colors(&["#000000", "#ffffff"]),
        Product::new("7", "Samba Classic", "Adidas", Money::from_dollars(80.0))
            .with_original_price(Money::from_dollars(95.0))
            .with_rating(4.6, 512)
            .with_tags("lifestyle", "men")
            .with_sizes(&["7", "8", "9", "10", "11"])
            .with_colors(&["#ffffff", "#000000"]),
        Product::new("8", "2002R Protection Pack", "New Balance", Money::from_dollars(160.0))
            .with_rating(4.8, 234)
            .with_tags("lifestyle", "men")
            .with_sizes(&["8", "9", "10", "11"])
            .with_colors(&["#000000", "#808080"])
            .new_arrival(),
    ];

    // The fixture is hand-checked for unique ids.
    Catalog::from_products(products).expect("sample catalog has unique ids")
}
