//! Store configuration.

use crate::checkout::{
    Checkout, ClearPolicy, MessageTemplates, PhoneNumber, DEFAULT_MESSAGING_BASE_URL,
};
use crate::contact::{StoreContact, STORE_WHATSAPP};
use crate::error::CommerceError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Everything that identifies the store a storefront sells for.
///
/// Every field has a default, so an empty document yields the reference
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name shown in headers.
    pub store_name: String,
    /// Messaging destination; parsed into a [`PhoneNumber`] when used.
    pub phone: String,
    /// Send endpoint of the messaging service.
    pub messaging_base_url: String,
    /// When checkout empties the cart.
    pub clear_policy: ClearPolicy,
    /// Currency prices are shown in.
    pub currency: Currency,
    /// Message phrasing.
    pub templates: MessageTemplates,
    /// Contact screen details.
    pub contact: StoreContact,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "La Catedral Airsoft".to_string(),
            phone: STORE_WHATSAPP.to_string(),
            messaging_base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
            clear_policy: ClearPolicy::default(),
            currency: Currency::default(),
            templates: MessageTemplates::default(),
            contact: StoreContact::default(),
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        toml::to_string_pretty(self).map_err(|e| CommerceError::Serialization(e.to_string()))
    }

    /// Build the checkout service for this store.
    pub fn checkout(&self) -> Result<Checkout, CommerceError> {
        let phone = PhoneNumber::parse(&self.phone)?;
        if !self.messaging_base_url.starts_with("https://") {
            return Err(CommerceError::Config(format!(
                "messaging_base_url must be an https URL: {}",
                self.messaging_base_url
            )));
        }
        Ok(Checkout::new(phone)
            .with_base_url(self.messaging_base_url.as_str())
            .with_templates(self.templates.clone())
            .with_policy(self.clear_policy))
    }
}
