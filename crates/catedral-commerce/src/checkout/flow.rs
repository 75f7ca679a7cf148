//! Checkout service: turns a cart into a message and hands it off.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::checkout::{DeepLink, ExternalOpener, MessageTemplates, OpenError, PhoneNumber};
use crate::contact::STORE_WHATSAPP;
use crate::error::CommerceError;
use crate::fields::Field;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Base URL of the messaging service's send endpoint.
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://api.whatsapp.com/send";

/// When a checkout empties the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    /// Clear once the handoff was attempted, whatever its result.
    #[default]
    Always,
    /// Clear only when the external application accepted the link.
    OnSuccess,
}

impl ClearPolicy {
    fn should_clear(&self, opened: &Result<(), OpenError>) -> bool {
        match self {
            ClearPolicy::Always => true,
            ClearPolicy::OnSuccess => opened.is_ok(),
        }
    }
}

/// Result of handing a message to the external application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOutcome {
    /// The link that was opened.
    pub link: DeepLink,
    /// The unencoded message.
    pub message: String,
    /// Number of products named in the message.
    pub item_count: usize,
    /// What the external opener reported.
    pub opened: Result<(), OpenError>,
    /// Whether the cart was emptied.
    pub cart_cleared: bool,
}

impl CheckoutOutcome {
    /// Check if the external application accepted the link.
    pub fn is_delivered(&self) -> bool {
        self.opened.is_ok()
    }

    /// Notice to show the user when the handoff failed.
    pub fn failure_notice(&self) -> Option<&'static str> {
        self.opened.as_ref().err().map(|_| super::FAILURE_NOTICE)
    }
}

/// Builds store messages and delivers them through an [`ExternalOpener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    phone: PhoneNumber,
    base_url: String,
    templates: MessageTemplates,
    policy: ClearPolicy,
}

impl Checkout {
    /// Create a checkout that sends to `phone` with default templates.
    pub fn new(phone: PhoneNumber) -> Self {
        Self {
            phone,
            base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
            templates: MessageTemplates::default(),
            policy: ClearPolicy::default(),
        }
    }

    /// Set the messaging endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the message templates.
    pub fn with_templates(mut self, templates: MessageTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// Set the clear policy.
    pub fn with_policy(mut self, policy: ClearPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Destination phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Message templates in use.
    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    /// Clear policy in use.
    pub fn policy(&self) -> ClearPolicy {
        self.policy
    }

    /// Link opening a conversation prefilled with `text`.
    pub fn message_link(&self, text: &str) -> DeepLink {
        DeepLink::message(&self.base_url, &self.phone, text)
    }

    /// Send the cart contents to the store.
    ///
    /// Fails with [`CommerceError::EmptyCart`] before contacting the opener if
    /// the cart is empty. Otherwise the opener is called exactly once and
    /// the cart is cleared according to the clear policy; an opener failure
    /// is reported in the outcome, not as an error.
    pub fn checkout(
        &self,
        cart: &mut Cart<'_>,
        opener: &dyn ExternalOpener,
    ) -> Result<CheckoutOutcome, CommerceError> {
        let message = cart.build_checkout_message(&self.templates)?;
        let item_count = cart.len();
        let (link, opened) = self.deliver(&message, opener);

        let cart_cleared = self.policy.should_clear(&opened);
        if cart_cleared {
            cart.clear();
        }
        info!(
            items = item_count,
            delivered = opened.is_ok(),
            cleared = cart_cleared,
            "checkout handed off"
        );

        Ok(CheckoutOutcome {
            link,
            message,
            item_count,
            opened,
            cart_cleared,
        })
    }

    /// Ask to buy one product directly, leaving any cart untouched.
    pub fn quick_buy(&self, product: &Product, opener: &dyn ExternalOpener) -> CheckoutOutcome {
        let message = self.templates.quick_buy(product.name);
        let (link, opened) = self.deliver(&message, opener);
        info!(product = %product.id, delivered = opened.is_ok(), "quick buy handed off");
        CheckoutOutcome {
            link,
            message,
            item_count: 1,
            opened,
            cart_cleared: false,
        }
    }

    /// Ask how to play at a field.
    pub fn inquire_field(&self, field: &Field, opener: &dyn ExternalOpener) -> CheckoutOutcome {
        let message = self.templates.field_inquiry(field.name);
        let (link, opened) = self.deliver(&message, opener);
        info!(field = %field.id, delivered = opened.is_ok(), "field inquiry handed off");
        CheckoutOutcome {
            link,
            message,
            item_count: 0,
            opened,
            cart_cleared: false,
        }
    }

    fn deliver(
        &self,
        message: &str,
        opener: &dyn ExternalOpener,
    ) -> (DeepLink, Result<(), OpenError>) {
        let link = self.message_link(message);
        let opened = opener.open(link.as_str());
        if let Err(err) = &opened {
            warn!(%err, "external application unavailable");
        }
        (link, opened)
    }
}

impl Default for Checkout {
    /// Checkout sending to the store's own number.
    fn default() -> Self {
        Self::new(PhoneNumber(STORE_WHATSAPP.to_string()))
    }
}
