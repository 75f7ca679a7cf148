//! Product catalog module.
//!
//! Contains the product and category types and the read-only catalog view.

mod catalog;
mod category;
mod product;
mod reference;

pub use catalog::Catalog;
pub use category::{Category, CategoryFilter, ALL_LABEL};
pub use product::Product;
