//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Checkout was requested on a cart with no entries.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Category label that names no known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Name that matches no storefront screen.
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    /// Name that matches no contact channel.
    #[error("Unknown contact channel: {0}")]
    UnknownChannel(String),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart entry not found.
    #[error("Cart entry not found: {0}")]
    EntryNotFound(String),

    /// Playing field not found.
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Destination phone number is not usable in a deep link.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
