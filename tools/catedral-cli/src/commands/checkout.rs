//! Purchase commands.

use anyhow::Result;
use catedral_commerce::cart::Cart;
use catedral_commerce::checkout::{CheckoutOutcome, ClearPolicy};
use catedral_commerce::ProductId;

use super::{BuyArgs, CheckoutArgs};
use crate::context::Context;
use crate::output::delivery_badge;

/// Ask to buy one product right away.
pub fn buy(args: BuyArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let product = catalog.require(ProductId::new(args.id))?;
    let checkout = ctx.checkout()?;
    let opener = ctx.opener();

    let outcome = checkout.quick_buy(product, opener.as_ref());
    report(&outcome, ctx);
    Ok(())
}

/// Fill a cart with the given products and send it.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let mut checkout = ctx.checkout()?;
    if args.keep_on_failure {
        checkout = checkout.with_policy(ClearPolicy::OnSuccess);
    }

    let mut cart = Cart::with_currency(ctx.config.store.currency);
    for id in args.ids {
        let product = catalog.require(ProductId::new(id))?;
        cart.add(product);
        ctx.output.debug(&format!("Added {}", product.name));
    }

    if !ctx.output.is_json() {
        ctx.output.header("CARRINHO");
        for entry in &cart {
            ctx.output.table_row(
                &[&entry.id.to_string(), entry.product.name, &entry.product.price_label()],
                &[6, 30, 12],
            );
        }
        ctx.output.rule();
        match cart.subtotal() {
            Ok(total) => ctx.output.kv("subtotal", &total.display()),
            Err(e) => ctx.output.warn(&format!("No subtotal: {}", e)),
        }
    }

    let opener = ctx.opener();
    let outcome = checkout.checkout(&mut cart, opener.as_ref())?;
    report(&outcome, ctx);

    if !outcome.cart_cleared {
        ctx.output.info(&format!("{} item(s) kept in the cart", cart.len()));
    }

    Ok(())
}

/// Print the result of a handoff to the messaging app.
pub fn report(outcome: &CheckoutOutcome, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(outcome);
        return;
    }

    ctx.output.kv("mensagem", &outcome.message);
    ctx.output.kv("status", &delivery_badge(outcome.is_delivered()));
    match outcome.failure_notice() {
        Some(notice) => ctx.output.warn(notice),
        None => ctx.output.success("Pedido enviado para a loja"),
    }
}
