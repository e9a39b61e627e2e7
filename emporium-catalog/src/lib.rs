pub mod product;
pub mod category;
pub mod inventory;

pub use product::{Product, ProductId};
pub use category::{Category, CategoryId};
pub use inventory::Inventory;
