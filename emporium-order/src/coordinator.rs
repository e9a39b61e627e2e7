use emporium_catalog::{Category, CategoryId, Inventory, Product, ProductId};

use crate::customer::{Customer, CustomerId};
use crate::models::{Order, OrderId, OrderSummary};

/// Owns the inventory, categories, customers and orders of one store.
///
/// `next_order_id` starts at 1 and only moves forward when an order is
/// actually created. All mutation goes through `&mut self`, so the counter and
/// every customer's history have a single writer.
#[derive(Debug)]
pub struct StoreCoordinator {
    inventory: Inventory,
    categories: Vec<Category>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
    next_order_id: OrderId,
}

impl StoreCoordinator {
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(),
            categories: Vec::new(),
            customers: Vec::new(),
            orders: Vec::new(),
            next_order_id: 1,
        }
    }

    pub fn add_category(&mut self, category: Category) {
        tracing::debug!(category_id = category.id, name = %category.name, "Category added");
        self.categories.push(category);
    }

    pub fn register_customer(&mut self, customer: Customer) {
        tracing::debug!(customer_id = customer.id, "Customer registered");
        self.customers.push(customer);
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// First registered category with this id
    pub fn category_mut(&mut self, category_id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    /// First registered customer with this id
    pub fn customer(&self, customer_id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.order_id == order_id)
    }

    /// Id the next successful order will receive
    pub fn next_order_id(&self) -> OrderId {
        self.next_order_id
    }

    /// Place an order for `customer_id` covering the listed products.
    ///
    /// Unknown product ids are skipped and the rest are snapshotted in request
    /// order. The total counts each product's full stocked quantity. Stock is
    /// not decremented. If the customer is unknown or none of the products
    /// exist, nothing is written and no order id is consumed.
    pub fn create_order(
        &mut self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
    ) -> Result<OrderSummary, OrderError> {
        let Some(customer_idx) = self.customers.iter().position(|c| c.id == customer_id) else {
            tracing::warn!(customer_id, "Order rejected: customer not found");
            return Err(OrderError::CustomerNotFound(customer_id));
        };

        let products: Vec<Product> = product_ids
            .iter()
            .filter_map(|&product_id| {
                let found = self.inventory.find(product_id).cloned();
                if found.is_none() {
                    tracing::debug!(customer_id, product_id, "Skipping unknown product");
                }
                found
            })
            .collect();

        if products.is_empty() {
            tracing::warn!(customer_id, ?product_ids, "Order rejected: no matching products");
            return Err(OrderError::NoMatchingProducts);
        }

        let order_id = self.next_order_id;
        self.next_order_id += 1;

        let order = Order::new(order_id, customer_id, products);
        let summary = order.summary();
        self.orders.push(order);
        self.customers[customer_idx].record_purchase(order_id);

        tracing::info!(order_id, customer_id, total = %summary.total_price, "Order created");
        Ok(summary)
    }
}

impl Default for StoreCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("No products found for the order")]
    NoMatchingProducts,
}
