use serde::{Deserialize, Serialize};

use crate::models::OrderId;

pub type CustomerId = u32;

/// A registered shopper and the ids of the orders placed for them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    purchase_history: Vec<OrderId>,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            purchase_history: Vec::new(),
        }
    }

    /// Append-only
    pub fn record_purchase(&mut self, order_id: OrderId) {
        self.purchase_history.push(order_id);
    }

    /// Order ids in the order they were created
    pub fn history(&self) -> &[OrderId] {
        &self.purchase_history
    }

    /// Printable purchase history, one line per order.
    pub fn purchase_history_report(&self) -> String {
        let mut report = format!("Purchase history for {}:\n", self.name);
        for order_id in &self.purchase_history {
            report.push_str(&format!("Order ID: {}\n", order_id));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_append_only() {
        let mut customer = Customer::new(1, "John Doe");
        assert!(customer.history().is_empty());

        customer.record_purchase(1);
        customer.record_purchase(4);
        assert_eq!(customer.history(), &[1, 4]);
    }

    #[test]
    fn test_history_report() {
        let mut customer = Customer::new(1, "John Doe");
        customer.record_purchase(1);
        customer.record_purchase(2);

        assert_eq!(
            customer.purchase_history_report(),
            "Purchase history for John Doe:\nOrder ID: 1\nOrder ID: 2\n"
        );
    }
}
