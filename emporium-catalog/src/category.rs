use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

pub type CategoryId = u32;

/// Named grouping of products.
///
/// A category keeps its own copies of the products added to it. It is not a
/// view over the inventory: removing a product from one leaves the other as is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    products: Vec<Product>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            products: Vec::new(),
        }
    }

    /// Store a copy of the product
    pub fn add_product(&mut self, product: &Product) {
        self.products.push(product.clone());
    }

    /// Drop every listed product with this id. Unknown ids are ignored.
    pub fn remove_product(&mut self, product_id: ProductId) {
        self.products.retain(|product| product.id != product_id);
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
