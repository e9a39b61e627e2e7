pub mod customer;
pub mod models;
pub mod coordinator;

pub use customer::{Customer, CustomerId};
pub use models::{Order, OrderId, OrderSummary};
pub use coordinator::{OrderError, StoreCoordinator};
