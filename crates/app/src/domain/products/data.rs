//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::models::{NewProduct, ProductId};

const SEED_PRODUCTS: [(i64, &str, i64); 5] = [
    (1, "Top", 1000),
    (2, "Jeans", 2000),
    (3, "Jewelery", 500),
    (4, "Shoes", 3000),
    (5, "Bags", 5000),
];

/// Products inserted into an empty catalog on startup.
#[must_use]
pub fn seed_products() -> Vec<NewProduct> {
    SEED_PRODUCTS
        .iter()
        .map(|&(id, name, price)| NewProduct {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
        })
        .collect()
}
