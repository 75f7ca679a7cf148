//! Interactive storefront.

use anyhow::{bail, Result};
use catedral_commerce::checkout::{Checkout, ExternalOpener, FAILURE_NOTICE};
use catedral_commerce::catalog::CategoryFilter;
use catedral_commerce::contact::ContactChannel;
use catedral_commerce::fields;
use catedral_commerce::session::{Screen, Session};
use catedral_commerce::CartEntryId;
use dialoguer::{Confirm, Select};

use super::catalog::print_product;
use super::checkout::report;
use crate::context::Context;

const BACK: &str = "Voltar";

/// Run the interactive shell.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shell is interactive and does not support --json");
    }

    let checkout = ctx.checkout()?;
    let opener = ctx.opener();
    let mut session = Session::new(ctx.catalog());

    ctx.output.header(&ctx.config.store.store_name);

    loop {
        session.toggle_menu();
        let cart_label = match session.cart_badge() {
            Some(count) => format!("Carrinho ({})", count),
            None => "Carrinho".to_string(),
        };
        let items = [
            Screen::Catalog.title().to_string(),
            Screen::Fields.title().to_string(),
            Screen::Contact.title().to_string(),
            cart_label,
            "Sair".to_string(),
        ];

        let selection = Select::new()
            .with_prompt(session.screen().title())
            .items(&items[..])
            .default(0)
            .interact()?;

        match selection {
            0 => {
                session.navigate_to(Screen::Catalog);
                browse(&mut session, &checkout, opener.as_ref(), ctx)?;
            }
            1 => {
                session.navigate_to(Screen::Fields);
                playing_fields(&session, &checkout, opener.as_ref(), ctx)?;
            }
            2 => {
                session.navigate_to(Screen::Contact);
                contact(&checkout, opener.as_ref(), ctx)?;
            }
            3 => {
                session.close_menu();
                cart(&mut session, &checkout, opener.as_ref(), ctx)?;
            }
            _ => break,
        }
    }

    if let Some(count) = session.cart_badge() {
        ctx.output.warn(&format!("{} item(s) left in the cart", count));
    }

    Ok(())
}

fn browse(
    session: &mut Session<'_>,
    checkout: &Checkout,
    opener: &dyn ExternalOpener,
    ctx: &Context,
) -> Result<()> {
    let filters: Vec<CategoryFilter> = CategoryFilter::options().collect();
    let labels: Vec<&str> = filters.iter().map(|f| f.label()).collect();
    let current = filters
        .iter()
        .position(|f| *f == session.category())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Categoria")
        .items(&labels)
        .default(current)
        .interact()?;
    session.select_category(filters[selection]);

    loop {
        let products = session.visible_products();
        if products.is_empty() {
            ctx.output.info("Nenhum produto nesta categoria.");
            return Ok(());
        }

        let mut items: Vec<String> = products
            .iter()
            .map(|p| format!("{}  {}", p.name, p.price_label()))
            .collect();
        items.push(BACK.to_string());

        let selection = Select::new()
            .with_prompt(session.category().label())
            .items(&items[..])
            .default(0)
            .interact()?;

        let Some(product) = products.get(selection) else {
            return Ok(());
        };
        session.view_details(product.id)?;
        details(session, checkout, opener, ctx)?;
    }
}

fn details(
    session: &mut Session<'_>,
    checkout: &Checkout,
    opener: &dyn ExternalOpener,
    ctx: &Context,
) -> Result<()> {
    let Some(product) = session.expanded() else {
        return Ok(());
    };
    print_product(product, ctx);

    let actions = ["Adicionar ao carrinho", "Comprar agora", BACK];
    let selection = Select::new().items(&actions[..]).default(0).interact()?;

    match selection {
        0 => {
            if let Some(id) = session.add_expanded_to_cart() {
                ctx.output
                    .success(&format!("{} adicionado ao carrinho ({})", product.name, id));
            }
        }
        1 => {
            let outcome = session.quick_buy(product.id, checkout, opener)?;
            report(&outcome, ctx);
        }
        _ => {}
    }

    session.close_details();
    Ok(())
}

fn cart(
    session: &mut Session<'_>,
    checkout: &Checkout,
    opener: &dyn ExternalOpener,
    ctx: &Context,
) -> Result<()> {
    session.open_cart();

    while session.is_cart_visible() {
        if session.cart().is_empty() {
            ctx.output.info("Carrinho vazio.");
            session.close_cart();
            break;
        }

        ctx.output.header("CARRINHO");
        if let Ok(total) = session.cart().subtotal() {
            ctx.output.kv("subtotal", &total.display());
        }

        let entries: Vec<(CartEntryId, String)> = session
            .cart()
            .iter()
            .map(|e| {
                let label = format!("Remover {}  {}", e.product.name, e.product.price_label());
                (e.id, label)
            })
            .collect();

        let mut items = vec!["Finalizar compra".to_string()];
        items.extend(entries.iter().map(|(_, label)| label.clone()));
        items.push(BACK.to_string());

        let selection = Select::new().items(&items[..]).default(0).interact()?;

        match selection {
            0 => {
                let outcome = session.complete_purchase(checkout, opener)?;
                report(&outcome, ctx);
            }
            n if n <= entries.len() => {
                let (id, _) = &entries[n - 1];
                if let Some(entry) = session.remove_from_cart(*id) {
                    ctx.output.info(&format!("{} removido", entry.product.name));
                }
            }
            _ => session.close_cart(),
        }
    }

    Ok(())
}

fn playing_fields(
    session: &Session<'_>,
    checkout: &Checkout,
    opener: &dyn ExternalOpener,
    ctx: &Context,
) -> Result<()> {
    let fields = fields::reference();
    let mut items: Vec<String> = fields
        .iter()
        .map(|f| format!("{} · {}", f.name, f.location))
        .collect();
    items.push(BACK.to_string());

    let selection = Select::new()
        .with_prompt(Screen::Fields.title())
        .items(&items[..])
        .default(0)
        .interact()?;

    if let Some(field) = fields.get(selection) {
        ctx.output.text(field.description);
        ctx.output.kv("vídeo", field.video);

        let ask = Confirm::new()
            .with_prompt(format!("Falar com a loja sobre {}?", field.name))
            .default(true)
            .interact()?;
        if ask {
            let outcome = session.inquire_field(field.id, checkout, opener)?;
            report(&outcome, ctx);
        }
    }

    Ok(())
}

fn contact(checkout: &Checkout, opener: &dyn ExternalOpener, ctx: &Context) -> Result<()> {
    let contact = &ctx.config.store.contact;
    let mut items: Vec<String> = ContactChannel::ALL
        .iter()
        .map(|channel| format!("{}  {}", channel.label(), contact.link(*channel, checkout)))
        .collect();
    items.push(BACK.to_string());

    let selection = Select::new()
        .with_prompt(Screen::Contact.title())
        .items(&items[..])
        .default(0)
        .interact()?;

    if let Some(&channel) = ContactChannel::ALL.get(selection) {
        match contact.open(channel, checkout, opener) {
            Ok(()) => ctx.output.success(&format!("{} aberto", channel)),
            Err(_) if channel == ContactChannel::WhatsApp => ctx.output.warn(FAILURE_NOTICE),
            Err(e) => ctx.output.warn(&format!("Não foi possível abrir {}: {}", channel, e)),
        }
    }

    Ok(())
}
