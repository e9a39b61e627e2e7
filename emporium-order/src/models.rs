use chrono::{DateTime, Utc};
use emporium_catalog::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::customer::CustomerId;

pub type OrderId = u64;

/// A completed purchase.
///
/// Holds snapshots of the products as they were in the inventory when the
/// order was placed. The total is computed once here and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    products: Vec<Product>,
    total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(order_id: OrderId, customer_id: CustomerId, products: Vec<Product>) -> Self {
        let total_price = products.iter().map(Product::line_total).sum();
        Self {
            order_id,
            customer_id,
            products,
            total_price,
            created_at: Utc::now(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sum of price × quantity over the snapshots
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.order_id,
            total_price: self.total_price,
        }
    }
}

/// What the caller gets back from a successful order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_is_price_times_quantity() {
        let order = Order::new(
            1,
            1,
            vec![
                Product::new(1, "Smartphone", dec!(799.99), 10, "Electronics"),
                Product::new(2, "Laptop", dec!(1199.99), 5, "Electronics"),
            ],
        );

        assert_eq!(order.total_price(), dec!(13999.85));
        assert_eq!(order.summary(), OrderSummary { order_id: 1, total_price: dec!(13999.85) });
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new(7, 1, Vec::new());
        assert_eq!(order.total_price(), Decimal::ZERO);
    }
}
