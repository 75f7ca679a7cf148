//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A product in the catalog.
///
/// Products are defined once at startup and never change, so every text
/// field borrows from static data.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name, as used in checkout messages.
    pub name: &'static str,
    /// Manufacturer or brand.
    pub brand: &'static str,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: &'static str,
    /// Product image URI.
    pub image_url: &'static str,
    /// Category the product is listed under.
    pub category: Category,
}

impl Product {
    /// Price label shown on product cards (e.g., "R$ 1199.00").
    pub fn price_label(&self) -> String {
        self.price.display()
    }

    /// Check if this product belongs to a category.
    pub fn is_in(&self, category: Category) -> bool {
        self.category == category
    }
}
