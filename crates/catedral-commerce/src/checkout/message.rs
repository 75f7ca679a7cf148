//! Message templates for store conversations.

use serde::{Deserialize, Serialize};

/// Phrases used to build the messages sent to the store.
///
/// Product messages have the shape `"<greeting> <intent>: <names>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    /// Opening greeting, e.g. "Olá, La Catedral!".
    pub greeting: String,
    /// Intent phrase for a cart holding one entry.
    pub single_item_intent: String,
    /// Intent phrase for a cart holding several entries.
    pub multi_item_intent: String,
    /// Intent phrase for buying one product directly.
    pub quick_buy_intent: String,
    /// Question asked about a playing field.
    pub field_inquiry: String,
    /// Text of the plain contact message.
    pub contact_greeting: String,
    /// Separator between product names.
    pub separator: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            greeting: "Olá, La Catedral!".to_string(),
            single_item_intent: "Gostaria de comprar o seguinte item".to_string(),
            multi_item_intent: "Gostaria de comprar os seguintes itens".to_string(),
            quick_buy_intent: "Eu gostaria de comprar o item".to_string(),
            field_inquiry: "Gostaria de mais informações sobre como jogar no campo".to_string(),
            contact_greeting: "Olá, Lá Catedral Airsoft.".to_string(),
            separator: ", ".to_string(),
        }
    }
}

impl MessageTemplates {
    /// Checkout message for a single product.
    pub fn single_item(&self, name: &str) -> String {
        format!("{} {}: {}", self.greeting, self.single_item_intent, name)
    }

    /// Checkout message listing several products in order.
    pub fn multiple_items<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> String {
        let list = names.into_iter().collect::<Vec<_>>().join(&self.separator);
        format!("{} {}: {}", self.greeting, self.multi_item_intent, list)
    }

    /// Message for buying one product without the cart.
    pub fn quick_buy(&self, name: &str) -> String {
        format!("{} {}: {}", self.greeting, self.quick_buy_intent, name)
    }

    /// Question about playing at a field.
    pub fn field_inquiry(&self, field_name: &str) -> String {
        format!("{} {} {}.", self.greeting, self.field_inquiry, field_name)
    }

    /// Plain greeting used by the contact screen.
    pub fn contact(&self) -> String {
        self.contact_greeting.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item() {
        let t = MessageTemplates::default();
        assert_eq!(
            t.single_item("Pistola Silver Black"),
            "Olá, La Catedral! Gostaria de comprar o seguinte item: Pistola Silver Black"
        );
    }

    #[test]
    fn test_multiple_items_no_trailing_separator() {
        let t = MessageTemplates::default();
        let message = t.multiple_items(["Sniper M40", "Sniper M24", "Red Dot T1"]);
        assert_eq!(
            message,
            "Olá, La Catedral! Gostaria de comprar os seguintes itens: Sniper M40, Sniper M24, Red Dot T1"
        );
        assert!(!message.ends_with(", "));
    }

    #[test]
    fn test_quick_buy() {
        let t = MessageTemplates::default();
        assert_eq!(
            t.quick_buy("Gás Red"),
            "Olá, La Catedral! Eu gostaria de comprar o item: Gás Red"
        );
    }

    #[test]
    fn test_field_inquiry() {
        let t = MessageTemplates::default();
        assert_eq!(
            t.field_inquiry("LA VILLA"),
            "Olá, La Catedral! Gostaria de mais informações sobre como jogar no campo LA VILLA."
        );
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t: MessageTemplates = toml::from_str(r#"greeting = "Oi!""#).unwrap();
        assert_eq!(t.single_item("X"), "Oi! Gostaria de comprar o seguinte item: X");
    }
}
