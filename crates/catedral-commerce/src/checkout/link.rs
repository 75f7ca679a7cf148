//! Deep links handed to external applications.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MIN_PHONE_DIGITS: usize = 8;
const MAX_PHONE_DIGITS: usize = 15;

/// A destination phone number in E.164 form, digits only, without the plus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(pub(crate) String);

impl PhoneNumber {
    /// Parse a phone number.
    ///
    /// A leading `+` and the usual separators (spaces, dashes, dots and
    /// parentheses) are stripped; what remains must be 8 to 15 ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, CommerceError> {
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits: String = body
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::InvalidPhone(raw.to_string()));
        }
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
            return Err(CommerceError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(digits))
    }

    /// The digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

/// A URI to be opened by an external application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeepLink(String);

impl DeepLink {
    /// Link that opens a conversation with `phone`, prefilled with `text`.
    ///
    /// Produces `<base_url>?phone=<digits>&text=<percent-encoded text>`.
    pub fn message(base_url: &str, phone: &PhoneNumber, text: &str) -> Self {
        Self(format!(
            "{}?phone={}&text={}",
            base_url.trim_end_matches(['?', '/']),
            phone,
            urlencoding::encode(text)
        ))
    }

    /// Link that dials a number.
    pub fn tel(number: &str) -> Self {
        Self(format!("tel:{}", number))
    }

    /// Link that starts an email.
    pub fn mailto(address: &str) -> Self {
        Self(format!("mailto:{}", address))
    }

    /// Plain web link.
    pub fn web(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the URI text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeepLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.whatsapp.com/send";

    #[test]
    fn test_phone_parse() {
        assert_eq!(PhoneNumber::parse("5531998331464").unwrap().as_str(), "5531998331464");
        assert_eq!(
            PhoneNumber::parse("+55 (31) 99833-1464").unwrap().as_str(),
            "5531998331464"
        );
    }

    #[test]
    fn test_phone_rejects_garbage() {
        assert!(PhoneNumber::parse("").is_err());
        assert!(PhoneNumber::parse("+").is_err());
        assert!(PhoneNumber::parse("55 31 abc").is_err());
        assert!(PhoneNumber::parse("1234567").is_err());
        assert!(PhoneNumber::parse("1234567890123456").is_err());
    }

    #[test]
    fn test_phone_deserialize_validates() {
        let ok: PhoneNumber = serde_json::from_str("\"+5531998331464\"").unwrap();
        assert_eq!(ok.as_str(), "5531998331464");
        assert!(serde_json::from_str::<PhoneNumber>("\"not a phone\"").is_err());
    }

    #[test]
    fn test_message_link_format() {
        let phone = PhoneNumber::parse("5531998331464").unwrap();
        let link = DeepLink::message(BASE, &phone, "Olá, La Catedral! Gás Red");
        assert_eq!(
            link.as_str(),
            "https://api.whatsapp.com/send?phone=5531998331464&text=Ol%C3%A1%2C%20La%20Catedral%21%20G%C3%A1s%20Red"
        );
    }

    #[test]
    fn test_message_link_decodes_to_original_text() {
        let phone = PhoneNumber::parse("5531998331464").unwrap();
        let text = "Olá! BB'S 0.25g 5.800Un & Red Dot 558 + G33";
        let link = DeepLink::message(BASE, &phone, text);
        let encoded = link.as_str().split("&text=").nth(1).unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
    }

    #[test]
    fn test_message_link_tolerates_trailing_separator() {
        let phone = PhoneNumber::parse("5531998331464").unwrap();
        let link = DeepLink::message("https://api.whatsapp.com/send/", &phone, "x");
        assert_eq!(
            link.as_str(),
            "https://api.whatsapp.com/send?phone=5531998331464&text=x"
        );
    }

    #[test]
    fn test_other_links() {
        assert_eq!(DeepLink::tel("31998331464").as_str(), "tel:31998331464");
        assert_eq!(
            DeepLink::mailto("contato@lacatedralairsoft.com").as_str(),
            "mailto:contato@lacatedralairsoft.com"
        );
    }
}
