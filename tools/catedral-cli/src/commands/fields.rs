//! Playing field commands.

use anyhow::Result;
use catedral_commerce::fields;
use catedral_commerce::FieldId;

use super::FieldsArgs;
use crate::context::Context;
use crate::output::delivery_badge;

/// Run the fields command.
pub fn run(args: FieldsArgs, ctx: &Context) -> Result<()> {
    if let Some(id) = args.inquire {
        return inquire(FieldId::new(id), ctx);
    }

    let fields = fields::reference();

    if ctx.output.is_json() {
        ctx.output.json(&fields);
        return Ok(());
    }

    ctx.output.header("CAMPOS");
    for field in fields {
        ctx.output.text("");
        ctx.output.text(&format!("{} {}", field.id, field.name));
        ctx.output.kv("local", field.location);
        ctx.output.kv("vídeo", field.video);
        ctx.output.text(&format!("  {}", field.description));
    }

    Ok(())
}

fn inquire(id: FieldId, ctx: &Context) -> Result<()> {
    let field = fields::find(id)?;
    let checkout = ctx.checkout()?;
    let opener = ctx.opener();

    let outcome = checkout.inquire_field(field, opener.as_ref());

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    ctx.output.kv("campo", field.name);
    ctx.output.kv("mensagem", &outcome.message);
    ctx.output.kv("status", &delivery_badge(outcome.is_delivered()));
    if let Some(notice) = outcome.failure_notice() {
        ctx.output.warn(notice);
    }

    Ok(())
}
