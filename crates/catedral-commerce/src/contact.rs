//! Store contact details and the links behind them.

use crate::checkout::{Checkout, DeepLink, ExternalOpener, OpenError};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The store's messaging number, E.164 without the plus.
pub const STORE_WHATSAPP: &str = "5531998331464";

/// A way of reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Phone,
    Email,
    Website,
    Instagram,
    WhatsApp,
}

impl ContactChannel {
    /// Every channel, in the order the contact screen lists them.
    pub const ALL: [ContactChannel; 5] = [
        ContactChannel::Phone,
        ContactChannel::Email,
        ContactChannel::Website,
        ContactChannel::Instagram,
        ContactChannel::WhatsApp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactChannel::Phone => "Telefone",
            ContactChannel::Email => "E-mail",
            ContactChannel::Website => "Site",
            ContactChannel::Instagram => "Instagram",
            ContactChannel::WhatsApp => "WhatsApp",
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactChannel {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phone" | "telefone" | "tel" => Ok(ContactChannel::Phone),
            "email" | "e-mail" | "mail" => Ok(ContactChannel::Email),
            "website" | "site" | "web" => Ok(ContactChannel::Website),
            "instagram" => Ok(ContactChannel::Instagram),
            "whatsapp" => Ok(ContactChannel::WhatsApp),
            _ => Err(CommerceError::UnknownChannel(s.to_string())),
        }
    }
}

/// Published contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreContact {
    /// Phone number as printed (e.g., "31 99833-1464").
    pub phone_display: String,
    /// Phone number as dialed.
    pub phone_dial: String,
    pub email: String,
    pub website: String,
    pub instagram: String,
    /// Street address, one line per entry.
    pub address: Vec<String>,
    /// Opening hours, one line per entry.
    pub hours: Vec<String>,
}

impl Default for StoreContact {
    fn default() -> Self {
        Self {
            phone_display: "31 99833-1464".to_string(),
            phone_dial: "31998331464".to_string(),
            email: "contato@lacatedralairsoft.com".to_string(),
            website: "https://www.lacatedralairsoft.com".to_string(),
            instagram: "https://www.instagram.com/lacatedralairsoft".to_string(),
            address: vec![
                "Rua Francisco Augusto Rocha, 150 - Planalto".to_string(),
                "Belo Horizonte - MG, 31744-002".to_string(),
            ],
            hours: vec![
                "Segunda a Sexta: 8h às 20h".to_string(),
                "Sábado e Domingo: 8h às 14h".to_string(),
            ],
        }
    }
}

impl StoreContact {
    /// Link for a channel. WhatsApp opens a conversation with the checkout's
    /// destination, prefilled with the contact greeting.
    pub fn link(&self, channel: ContactChannel, checkout: &Checkout) -> DeepLink {
        match channel {
            ContactChannel::Phone => DeepLink::tel(&self.phone_dial),
            ContactChannel::Email => DeepLink::mailto(&self.email),
            ContactChannel::Website => DeepLink::web(self.website.as_str()),
            ContactChannel::Instagram => DeepLink::web(self.instagram.as_str()),
            ContactChannel::WhatsApp => checkout.message_link(&checkout.templates().contact()),
        }
    }

    /// Every channel with its link, in display order.
    pub fn links(&self, checkout: &Checkout) -> Vec<(ContactChannel, DeepLink)> {
        ContactChannel::ALL
            .into_iter()
            .map(|channel| (channel, self.link(channel, checkout)))
            .collect()
    }

    /// Open a channel's link.
    pub fn open(
        &self,
        channel: ContactChannel,
        checkout: &Checkout,
        opener: &dyn ExternalOpener,
    ) -> Result<(), OpenError> {
        let link = self.link(channel, checkout);
        debug!(%channel, %link, "opening contact link");
        opener.open(link.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let contact = StoreContact::default();
        let checkout = Checkout::default();
        let links = contact.links(&checkout);
        let uris: Vec<_> = links.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(
            uris,
            vec![
                "tel:31998331464",
                "mailto:contato@lacatedralairsoft.com",
                "https://www.lacatedralairsoft.com",
                "https://www.instagram.com/lacatedralairsoft",
                "https://api.whatsapp.com/send?phone=5531998331464&text=Ol%C3%A1%2C%20L%C3%A1%20Catedral%20Airsoft.",
            ]
        );
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!("WhatsApp".parse::<ContactChannel>(), Ok(ContactChannel::WhatsApp));
        assert_eq!("site".parse::<ContactChannel>(), Ok(ContactChannel::Website));
        assert_eq!(
            "fax".parse::<ContactChannel>(),
            Err(CommerceError::UnknownChannel("fax".to_string()))
        );
    }

    #[test]
    fn test_open_reports_failure() {
        let contact = StoreContact::default();
        let checkout = Checkout::default();
        let opener = |_: &str| -> Result<(), OpenError> { Err(OpenError::Failed("boom".into())) };
        assert_eq!(
            contact.open(ContactChannel::Email, &checkout, &opener),
            Err(OpenError::Failed("boom".to_string()))
        );
    }
}
