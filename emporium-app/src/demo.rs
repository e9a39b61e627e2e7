use emporium_catalog::{Category, Inventory, Product};
use emporium_order::{Customer, OrderSummary, StoreCoordinator};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::app_config::OutputFormat;

/// Outcome of the scripted run, kept separate from printing so it can be checked.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub store: String,
    pub order: Result<OrderSummary, String>,
    pub inventory: Inventory,
    pub customer: Customer,
}

/// Register a category, stock two products, register a customer and order both products.
pub fn run(store_name: &str) -> anyhow::Result<DemoReport> {
    let mut store = StoreCoordinator::new();

    store.add_category(Category::new(1, "Electronics"));

    let phone = Product::new(1, "Smartphone", Decimal::new(79999, 2), 10, "Electronics");
    let laptop = Product::new(2, "Laptop", Decimal::new(119999, 2), 5, "Electronics");
    let electronics = store
        .category_mut(1)
        .ok_or_else(|| anyhow::anyhow!("category 1 was not registered"))?;
    electronics.add_product(&phone);
    electronics.add_product(&laptop);
    store.inventory_mut().add(phone);
    store.inventory_mut().add(laptop);

    store.register_customer(Customer::new(1, "John Doe"));

    let order = store.create_order(1, &[1, 2]).map_err(|e| e.to_string());

    let customer = store
        .customer(1)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("customer 1 was not registered"))?;

    Ok(DemoReport {
        store: store_name.to_string(),
        order,
        inventory: store.inventory().clone(),
        customer,
    })
}

impl DemoReport {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = format!("== {} ==\n", self.store);
        match &self.order {
            Ok(summary) => out.push_str(&format!(
                "Order created! Total price: {}\n",
                summary.total_price
            )),
            Err(message) => out.push_str(&format!("{}!\n", message)),
        }
        out.push_str(&self.inventory.to_string());
        out.push_str(&self.customer.purchase_history_report());
        out
    }
}
