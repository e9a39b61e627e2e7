use std::fmt;

use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

/// The authoritative list of products offered for sale.
///
/// Entries keep insertion order and ids are not required to be unique.
/// Lookups scan from the front, so the earliest entry with a given id wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product. Duplicate ids are accepted.
    pub fn add(&mut self, product: Product) {
        tracing::debug!(product_id = product.id, name = %product.name, "Product added to inventory");
        self.products.push(product);
    }

    /// Remove every entry with this id; nothing happens if there is none.
    pub fn remove(&mut self, product_id: ProductId) {
        let before = self.products.len();
        self.products.retain(|product| product.id != product_id);
        tracing::debug!(
            product_id,
            removed = before - self.products.len(),
            "Product removed from inventory"
        );
    }

    /// First product with the given id, in insertion order
    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Products with stock on hand
    pub fn available(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.is_available())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Products in inventory:")?;
        for product in &self.products {
            writeln!(f, "{}", product)?;
        }
        Ok(())
    }
}
