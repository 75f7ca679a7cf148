//! Storefront domain types and logic for La Catedral Airsoft.
//!
//! This crate provides the logic behind the store's mobile storefront:
//!
//! - **Catalog**: the fixed product table and category filtering
//! - **Cart**: an ordered list of catalog products
//! - **Checkout**: messages and deep links handed to the messaging app
//! - **Fields / Contact**: the store's playing fields and contact links
//! - **Session**: screen, filter, detail and cart state of one storefront
//!
//! # Example
//!
//! ```rust
//! use catedral_commerce::prelude::*;
//!
//! let catalog = Catalog::reference();
//! let mut cart = Cart::new();
//! for product in catalog.filter_by_label("Pistolas") {
//!     cart.add(product);
//! }
//!
//! let checkout = Checkout::default();
//! let opener = |uri: &str| -> Result<(), OpenError> {
//!     println!("opening {uri}");
//!     Ok(())
//! };
//! let outcome = checkout.checkout(&mut cart, &opener)?;
//! assert_eq!(outcome.item_count, 2);
//! assert!(cart.is_empty());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod fields;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartEntry};

    // Checkout
    pub use crate::checkout::{
        Checkout, CheckoutOutcome, ClearPolicy, DeepLink, ExternalOpener, MessageTemplates,
        OpenError, PhoneNumber,
    };

    // Store
    pub use crate::config::StoreConfig;
    pub use crate::contact::{ContactChannel, StoreContact};
    pub use crate::fields::Field;
    pub use crate::session::{Screen, Session};
}
