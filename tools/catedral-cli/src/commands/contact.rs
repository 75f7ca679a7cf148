//! Contact commands.

use anyhow::Result;
use catedral_commerce::checkout::FAILURE_NOTICE;
use catedral_commerce::contact::ContactChannel;
use serde::Serialize;

use super::ContactArgs;
use crate::context::Context;
use crate::output::delivery_badge;

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let checkout = ctx.checkout()?;
    let contact = &ctx.config.store.contact;

    if let Some(channel) = args.open {
        let channel: ContactChannel = channel.parse()?;
        let opener = ctx.opener();
        let opened = contact.open(channel, &checkout, opener.as_ref());

        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({
                "channel": channel,
                "link": contact.link(channel, &checkout),
                "opened": &opened,
            }));
            return Ok(());
        }

        ctx.output.kv(channel.label(), &delivery_badge(opened.is_ok()));
        match opened {
            Ok(()) => {}
            Err(_) if channel == ContactChannel::WhatsApp => ctx.output.warn(FAILURE_NOTICE),
            Err(e) => ctx.output.warn(&format!("Não foi possível abrir {}: {}", channel, e)),
        }
        return Ok(());
    }

    let links: Vec<ContactLink> = contact
        .links(&checkout)
        .into_iter()
        .map(|(channel, link)| ContactLink {
            channel,
            link: link.into_string(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "store": ctx.config.store.store_name,
            "contact": contact,
            "links": links,
        }));
        return Ok(());
    }

    ctx.output.header("CONTATO");
    ctx.output.kv("loja", &ctx.config.store.store_name);
    ctx.output.kv("telefone", &contact.phone_display);
    ctx.output.kv("email", &contact.email);

    if !contact.address.is_empty() {
        ctx.output.text("");
        ctx.output.text("Endereço:");
        for line in &contact.address {
            ctx.output.list_item(line);
        }
    }

    if !contact.hours.is_empty() {
        ctx.output.text("");
        ctx.output.text("Horário:");
        for line in &contact.hours {
            ctx.output.list_item(line);
        }
    }

    ctx.output.text("");
    for entry in &links {
        ctx.output.kv(entry.channel.label(), &entry.link);
    }

    Ok(())
}

#[derive(Serialize)]
struct ContactLink {
    channel: ContactChannel,
    link: String,
}
