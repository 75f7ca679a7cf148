//! Checkout module.
//!
//! Contains message templates, deep links, the external-open boundary and
//! the checkout service that ties them to a cart.

mod flow;
mod link;
mod message;
mod opener;

pub use flow::{Checkout, CheckoutOutcome, ClearPolicy, DEFAULT_MESSAGING_BASE_URL};
pub use link::{DeepLink, PhoneNumber};
pub use message::MessageTemplates;
pub use opener::{ExternalOpener, OpenError, FAILURE_NOTICE};
