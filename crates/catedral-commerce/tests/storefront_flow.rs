//! End-to-end storefront flows against the reference catalog.

use catedral_commerce::prelude::*;
use std::cell::RefCell;

/// Opener that records every URI and answers with a fixed result.
struct RecordingOpener {
    available: bool,
    uris: RefCell<Vec<String>>,
}

impl RecordingOpener {
    fn available() -> Self {
        Self {
            available: true,
            uris: RefCell::new(Vec::new()),
        }
    }

    fn unavailable() -> Self {
        Self {
            available: false,
            uris: RefCell::new(Vec::new()),
        }
    }

    fn decoded_texts(&self) -> Vec<String> {
        self.uris
            .borrow()
            .iter()
            .map(|uri| {
                let text = uri.split("&text=").nth(1).unwrap_or_default();
                urlencoding::decode(text).unwrap().into_owned()
            })
            .collect()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, uri: &str) -> Result<(), OpenError> {
        self.uris.borrow_mut().push(uri.to_string());
        if self.available {
            Ok(())
        } else {
            Err(OpenError::Unavailable(uri.to_string()))
        }
    }
}

fn product(catalog: &Catalog<'static>, id: u32) -> &'static Product {
    catalog.get(ProductId::new(id)).unwrap()
}

#[test]
fn two_item_checkout_message() {
    let catalog = Catalog::reference();
    let mut cart = Cart::new();
    cart.add(product(&catalog, 1));
    cart.add(product(&catalog, 3));

    let message = cart
        .build_checkout_message(&MessageTemplates::default())
        .unwrap();
    assert_eq!(
        message,
        "Olá, La Catedral! Gostaria de comprar os seguintes itens: Pistola Silver Black, Rifle 416L ROSSI"
    );
}

#[test]
fn one_item_checkout_message() {
    let catalog = Catalog::reference();
    let mut cart = Cart::new();
    cart.add(product(&catalog, 1));

    let message = cart
        .build_checkout_message(&MessageTemplates::default())
        .unwrap();
    assert_eq!(
        message,
        "Olá, La Catedral! Gostaria de comprar o seguinte item: Pistola Silver Black"
    );
    assert_eq!(message.matches("Pistola Silver Black").count(), 1);
}

#[test]
fn pistolas_filter_on_reference_catalog() {
    let catalog = Catalog::reference();
    let pistols = catalog.filter_by_label("Pistolas");
    let ids: Vec<u32> = pistols.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(pistols.iter().all(|p| p.category == Category::Pistolas));
}

#[test]
fn checkout_always_empties_the_cart() {
    let catalog = Catalog::reference();
    let checkout = Checkout::default();

    for opener in [RecordingOpener::available(), RecordingOpener::unavailable()] {
        let mut cart = Cart::new();
        cart.add(product(&catalog, 4));
        cart.add(product(&catalog, 9));
        let outcome = checkout.checkout(&mut cart, &opener).unwrap();
        assert!(cart.is_empty());
        assert!(outcome.cart_cleared);
        assert_eq!(opener.uris.borrow().len(), 1);
    }
}

#[test]
fn remove_by_position_and_by_id_agree() {
    let catalog = Catalog::reference();
    let mut by_index = Cart::new();
    let mut by_id = Cart::new();
    let mut ids = Vec::new();
    for id in [1, 5, 5, 12, 7] {
        by_index.add(product(&catalog, id));
        ids.push(by_id.add(product(&catalog, id)));
    }

    by_index.remove_at(2);
    by_id.remove(ids[2]);

    assert_eq!(by_index.product_names(), by_id.product_names());
    assert_eq!(
        by_id.product_names(),
        vec![
            "Pistola Silver Black",
            "Sniper M40",
            "BB'S 0.28g 5.800Un",
            "Red Dot 558 + G33"
        ]
    );
}

#[test]
fn shopping_session_end_to_end() {
    let config = StoreConfig::default();
    let checkout = config.checkout().unwrap();
    let opener = RecordingOpener::available();
    let mut session = Session::new(Catalog::reference());

    session.toggle_menu();
    session.navigate_to(Screen::Catalog);
    session.select_category("Bolinhas".parse().unwrap());
    let visible: Vec<ProductId> = session.visible_products().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![ProductId::new(11), ProductId::new(12)]);

    session.view_details(visible[1]).unwrap();
    session.add_expanded_to_cart().unwrap();
    let extra = session.add_to_cart(visible[0]).unwrap();
    session.add_to_cart(ProductId::new(15)).unwrap();
    session.remove_from_cart(extra).unwrap();
    assert_eq!(session.cart_badge(), Some(2));
    assert_eq!(session.cart().subtotal().unwrap().display(), "R$ 305.00");

    session.open_cart();
    let outcome = session.complete_purchase(&checkout, &opener).unwrap();
    assert!(outcome.is_delivered());
    assert!(!session.is_cart_visible());
    assert!(session.cart_badge().is_none());

    assert_eq!(
        opener.decoded_texts(),
        vec!["Olá, La Catedral! Gostaria de comprar os seguintes itens: BB'S 0.28g 5.800Un, Gás Red"]
    );
}

#[test]
fn failed_handoff_shows_notice() {
    let opener = RecordingOpener::unavailable();
    let mut session = Session::new(Catalog::reference());
    session.add_to_cart(ProductId::new(6)).unwrap();

    let outcome = session
        .complete_purchase(&Checkout::default(), &opener)
        .unwrap();
    assert_eq!(outcome.failure_notice(), Some("Não foi possível abrir o WhatsApp"));
    assert!(session.cart().is_empty());
}

#[test]
fn contact_whatsapp_link_uses_configured_destination() {
    let config = StoreConfig::from_toml_str(r#"phone = "5511912345678""#).unwrap();
    let checkout = config.checkout().unwrap();
    let link = config.contact.link(ContactChannel::WhatsApp, &checkout);
    assert!(link
        .as_str()
        .starts_with("https://api.whatsapp.com/send?phone=5511912345678&text="));
}
