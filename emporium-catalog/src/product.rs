use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-assigned product identifier. Uniqueness is not enforced anywhere.
pub type ProductId = u32;

/// A sellable item as stocked in the inventory.
///
/// Products are stored by value: every collection that holds one (inventory,
/// category, order) owns its own copy, so later changes to one never show up
/// in another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub category: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }

    /// In stock if at least one unit is on hand
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Unit price times the full stocked quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: {}, Quantity: {}, Category: {}",
            self.id, self.name, self.price, self.quantity, self.category
        )
    }
}
