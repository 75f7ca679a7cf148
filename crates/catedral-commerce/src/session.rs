//! Storefront session state.
//!
//! One [`Session`] holds everything the storefront screens read and change:
//! the selected screen, the menu and cart overlays, the category filter, the
//! product being viewed in detail, and the cart itself. It is owned by a
//! single controller and handed by reference to whatever renders it.

use crate::cart::{Cart, CartEntry};
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::checkout::{Checkout, CheckoutOutcome, ExternalOpener};
use crate::error::CommerceError;
use crate::fields;
use crate::ids::{CartEntryId, FieldId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Top-level storefront screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Product listing.
    #[default]
    Catalog,
    /// Playing fields.
    Fields,
    /// Contact details.
    Contact,
}

impl Screen {
    /// Every screen, in menu order.
    pub const ALL: [Screen; 3] = [Screen::Catalog, Screen::Fields, Screen::Contact];

    /// Menu title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Catalog => "LOJA",
            Screen::Fields => "CAMPOS",
            Screen::Contact => "CONTATO",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Screen {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loja" | "catalog" | "shop" => Ok(Screen::Catalog),
            "campos" | "fields" => Ok(Screen::Fields),
            "contato" | "contact" => Ok(Screen::Contact),
            _ => Err(CommerceError::UnknownScreen(s.to_string())),
        }
    }
}

/// State of one storefront session.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    catalog: Catalog<'a>,
    cart: Cart<'a>,
    screen: Screen,
    menu_open: bool,
    cart_visible: bool,
    category: CategoryFilter,
    expanded: Option<&'a Product>,
}

impl<'a> Session<'a> {
    /// Start a session on the catalog screen with an empty cart.
    pub fn new(catalog: Catalog<'a>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            screen: Screen::default(),
            menu_open: false,
            cart_visible: false,
            category: CategoryFilter::All,
            expanded: None,
        }
    }

    /// Catalog the session browses.
    pub fn catalog(&self) -> Catalog<'a> {
        self.catalog
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Screen being shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the navigation menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the cart view is open.
    pub fn is_cart_visible(&self) -> bool {
        self.cart_visible
    }

    /// Selected category filter.
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Product shown in detail, if any.
    pub fn expanded(&self) -> Option<&'a Product> {
        self.expanded
    }

    /// Open the menu if closed, close it if open.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Switch screens. Always closes the menu.
    pub fn navigate_to(&mut self, screen: Screen) {
        debug!(from = %self.screen, to = %screen, "navigate");
        self.menu_open = false;
        self.screen = screen;
    }

    /// Change the category filter.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.category = filter;
    }

    /// Products shown under the current category filter.
    pub fn visible_products(&self) -> Vec<&'a Product> {
        self.catalog.filter_by_category(self.category)
    }

    /// Expand a product to show its details.
    pub fn view_details(&mut self, id: ProductId) -> Result<&'a Product, CommerceError> {
        let product = self.catalog.require(id)?;
        self.expanded = Some(product);
        Ok(product)
    }

    /// Collapse the detail view.
    pub fn close_details(&mut self) {
        self.expanded = None;
    }

    /// Add a catalog product to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<CartEntryId, CommerceError> {
        let product = self.catalog.require(id)?;
        Ok(self.cart.add(product))
    }

    /// Add the expanded product to the cart and close the detail view.
    ///
    /// Returns None when no product is expanded.
    pub fn add_expanded_to_cart(&mut self) -> Option<CartEntryId> {
        let product = self.expanded.take()?;
        Some(self.cart.add(product))
    }

    /// Remove one cart entry by id.
    pub fn remove_from_cart(&mut self, id: CartEntryId) -> Option<CartEntry<'a>> {
        self.cart.remove(id)
    }

    /// Show the cart view.
    pub fn open_cart(&mut self) {
        self.cart_visible = true;
    }

    /// Hide the cart view.
    pub fn close_cart(&mut self) {
        self.cart_visible = false;
    }

    /// Count shown on the cart icon; None when the cart is empty.
    pub fn cart_badge(&self) -> Option<usize> {
        (!self.cart.is_empty()).then_some(self.cart.len())
    }

    /// Check out the cart and close the cart view.
    ///
    /// An empty cart is rejected and leaves the session unchanged.
    pub fn complete_purchase(
        &mut self,
        checkout: &Checkout,
        opener: &dyn ExternalOpener,
    ) -> Result<CheckoutOutcome, CommerceError> {
        let outcome = checkout.checkout(&mut self.cart, opener)?;
        self.cart_visible = false;
        Ok(outcome)
    }

    /// Buy one product directly, bypassing the cart.
    pub fn quick_buy(
        &self,
        id: ProductId,
        checkout: &Checkout,
        opener: &dyn ExternalOpener,
    ) -> Result<CheckoutOutcome, CommerceError> {
        let product = self.catalog.require(id)?;
        Ok(checkout.quick_buy(product, opener))
    }

    /// Ask the store about playing at a field.
    pub fn inquire_field(
        &self,
        id: FieldId,
        checkout: &Checkout,
        opener: &dyn ExternalOpener,
    ) -> Result<CheckoutOutcome, CommerceError> {
        let field = fields::find(id)?;
        Ok(checkout.inquire_field(field, opener))
    }
}
