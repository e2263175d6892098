// Core models
pub mod order;
pub mod product;
pub mod sales;

pub use order::{Customer, Order, OrderStatus};
pub use product::{Product, ProductDraft, ProductForm, ProductStatus};
pub use sales::DailySales;
