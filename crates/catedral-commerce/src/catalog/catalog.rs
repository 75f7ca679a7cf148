//! Read-only catalog view and category filtering.

use crate::catalog::{Category, CategoryFilter, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use tracing::debug;

/// A read-only view over a table of products.
///
/// The catalog never changes for the lifetime of the process; filtering
/// produces borrowed subsequences in the original order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    products: &'a [Product],
}

impl Catalog<'static> {
    /// The reference catalog published by the store.
    pub fn reference() -> Self {
        Self::new(&super::reference::PRODUCTS)
    }
}

impl<'a> Catalog<'a> {
    /// Create a catalog over a product table.
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    /// Products matching a category filter, in catalog order.
    ///
    /// `CategoryFilter::All` returns the whole catalog. A category with no
    /// products yields an empty list.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&'a Product> {
        let products: Vec<&'a Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect();
        debug!(filter = %filter, matched = products.len(), "filtered catalog");
        products
    }

    /// Products matching a category label, in catalog order.
    ///
    /// "Todos" (or "all") returns the whole catalog. A label that names no
    /// known category yields an empty list rather than an error.
    pub fn filter_by_label(&self, label: &str) -> Vec<&'a Product> {
        match label.parse::<CategoryFilter>() {
            Ok(filter) => self.filter_by_category(filter),
            Err(err) => {
                debug!(%err, "category label matches nothing");
                Vec::new()
            }
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&'a Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if it is not listed.
    pub fn require(&self, id: ProductId) -> Result<&'a Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Categories present in the catalog, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// All products, in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'a, Product> {
        self.products.iter()
    }

    /// The underlying product table.
    pub fn products(&self) -> &'a [Product] {
        self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for Catalog<'a> {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
