//! Cart and cart entry types.

use crate::catalog::Product;
use crate::checkout::MessageTemplates;
use crate::error::CommerceError;
use crate::ids::CartEntryId;
use crate::money::{Currency, Money};
use serde::Serialize;
use tracing::{debug, warn};

/// One entry in the cart.
///
/// Adding the same product twice produces two entries; there is no
/// quantity field.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CartEntry<'a> {
    /// Identifier allocated by the cart.
    pub id: CartEntryId,
    /// The catalog product this entry refers to.
    pub product: &'a Product,
}

/// A shopping cart.
///
/// Entries borrow their products from the catalog, so a cart can only ever
/// hold catalog products. Order is insertion order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Cart<'a> {
    entries: Vec<CartEntry<'a>>,
    #[serde(skip)]
    next_id: CartEntryId,
    currency: Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::with_currency(Currency::default())
    }

    /// Create an empty cart that totals in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            next_id: CartEntryId::new(1),
            currency,
        }
    }

    /// Append a product to the end of the cart.
    pub fn add(&mut self, product: &'a Product) -> CartEntryId {
        let id = self.next_id;
        self.next_id = id.next();
        self.entries.push(CartEntry { id, product });
        debug!(entry = %id, product = %product.id, len = self.entries.len(), "added to cart");
        id
    }

    /// Remove the entry with the given id.
    ///
    /// Returns the removed entry, or None if no entry has that id.
    pub fn remove(&mut self, id: CartEntryId) -> Option<CartEntry<'a>> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(index);
        debug!(entry = %id, len = self.entries.len(), "removed from cart");
        Some(entry)
    }

    /// Remove the entry at a position.
    ///
    /// An out-of-range index leaves the cart untouched and returns None.
    pub fn remove_at(&mut self, index: usize) -> Option<CartEntry<'a>> {
        if index >= self.entries.len() {
            warn!(index, len = self.entries.len(), "cart removal index out of range");
            return None;
        }
        let entry = self.entries.remove(index);
        debug!(entry = %entry.id, index, len = self.entries.len(), "removed from cart");
        Some(entry)
    }

    /// Remove every entry.
    ///
    /// Entry ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry<'a>] {
        &self.entries
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry<'a>> {
        self.entries.iter()
    }

    /// Get an entry by id.
    pub fn get(&self, id: CartEntryId) -> Option<&CartEntry<'a>> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Product names in cart order.
    pub fn product_names(&self) -> Vec<&'a str> {
        self.entries.iter().map(|e| e.product.name).collect()
    }

    /// Currency the cart totals in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of the entry prices.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.entries.iter().map(|e| &e.product.price), self.currency).ok_or_else(
            || {
                if self.entries.iter().any(|e| e.product.price.currency != self.currency) {
                    CommerceError::CurrencyMismatch {
                        expected: self.currency.code().to_string(),
                        got: "mixed".to_string(),
                    }
                } else {
                    CommerceError::Overflow
                }
            },
        )
    }

    /// Build the message sent to the store on checkout.
    ///
    /// A single entry uses the singular phrasing; several entries list every
    /// product name in cart order, separated by ", ".
    pub fn build_checkout_message(
        &self,
        templates: &MessageTemplates,
    ) -> Result<String, CommerceError> {
        match self.entries.as_slice() {
            [] => Err(CommerceError::EmptyCart),
            [only] => Ok(templates.single_item(only.product.name)),
            entries => Ok(templates.multiple_items(entries.iter().map(|e| e.product.name))),
        }
    }
}

impl Default for Cart<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c, 'a> IntoIterator for &'c Cart<'a> {
    type Item = &'c CartEntry<'a>;
    type IntoIter = std::slice::Iter<'c, CartEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    fn product(id: u32) -> &'static Product {
        Catalog::reference().get(ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let mut cart = Cart::new();
        for id in [3, 1, 2] {
            cart.add(product(id));
        }
        let ids: Vec<u32> = cart.iter().map(|e| e.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_add_same_product_twice_keeps_two_entries() {
        let mut cart = Cart::new();
        let first = cart.add(product(5));
        let second = cart.add(product(5));
        assert_ne!(first, second);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut cart = Cart::new();
        let a = cart.add(product(1));
        let b = cart.add(product(2));
        let c = cart.add(product(3));

        let removed = cart.remove(b).unwrap();
        assert_eq!(removed.product.id, ProductId::new(2));
        let remaining: Vec<_> = cart.iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![a, c]);
        assert!(cart.remove(b).is_none());
    }

    #[test]
    fn test_remove_removes_only_the_named_duplicate() {
        let mut cart = Cart::new();
        let first = cart.add(product(11));
        let second = cart.add(product(11));
        cart.remove(first);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].id, second);
    }

    #[test]
    fn test_remove_at() {
        let mut cart = Cart::new();
        for id in [1, 2, 3, 4] {
            cart.add(product(id));
        }
        let removed = cart.remove_at(1).unwrap();
        assert_eq!(removed.product.id, ProductId::new(2));
        let ids: Vec<u32> = cart.iter().map(|e| e.product.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1));
        assert!(cart.remove_at(1).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut cart = Cart::new();
        let before = cart.add(product(1));
        cart.clear();
        assert!(cart.is_empty());
        let after = cart.add(product(1));
        assert!(after > before);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add(product(11));
        cart.add(product(12));
        cart.add(product(11));
        assert_eq!(cart.subtotal().unwrap().display(), "R$ 525.00");
        assert!(Cart::new().subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_subtotal_currency_mismatch() {
        let mut cart = Cart::with_currency(Currency::USD);
        cart.add(product(1));
        assert!(matches!(
            cart.subtotal(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_subtotal_for_catalog_in_another_currency() {
        let table = [Product {
            id: ProductId::new(1),
            name: "Gás Green",
            brand: "TEST",
            price: Money::new(1_250, Currency::USD),
            description: "",
            image_url: "",
            category: crate::catalog::Category::Suprimentos,
        }];
        let catalog = Catalog::new(&table);
        let mut cart = Cart::with_currency(Currency::USD);
        cart.add(catalog.get(ProductId::new(1)).unwrap());
        cart.add(catalog.get(ProductId::new(1)).unwrap());
        assert_eq!(cart.subtotal().unwrap().display(), "US$ 25.00");
    }

    #[test]
    fn test_single_item_message() {
        let mut cart = Cart::new();
        cart.add(product(1));
        let message = cart
            .build_checkout_message(&MessageTemplates::default())
            .unwrap();
        assert_eq!(
            message,
            "Olá, La Catedral! Gostaria de comprar o seguinte item: Pistola Silver Black"
        );
    }

    #[test]
    fn test_multi_item_message() {
        let mut cart = Cart::new();
        cart.add(product(1));
        cart.add(product(3));
        let message = cart
            .build_checkout_message(&MessageTemplates::default())
            .unwrap();
        assert_eq!(
            message,
            "Olá, La Catedral! Gostaria de comprar os seguintes itens: Pistola Silver Black, Rifle 416L ROSSI"
        );
    }

    #[test]
    fn test_message_lists_duplicates() {
        let mut cart = Cart::new();
        cart.add(product(15));
        cart.add(product(15));
        cart.add(product(16));
        let message = cart
            .build_checkout_message(&MessageTemplates::default())
            .unwrap();
        assert!(message.ends_with(": Gás Red, Gás Red, Gás Taikoon"));
    }

    #[test]
    fn test_empty_cart_message_is_error() {
        let cart = Cart::new();
        assert_eq!(
            cart.build_checkout_message(&MessageTemplates::default()),
            Err(CommerceError::EmptyCart)
        );
    }
}
