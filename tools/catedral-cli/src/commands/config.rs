//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, OpenerMode};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("store_name", &store.store_name);
    ctx.output.kv("phone", &store.phone);
    ctx.output.kv("messaging_base_url", &store.messaging_base_url);
    ctx.output.kv("clear_policy", &format!("{:?}", store.clear_policy));
    ctx.output.kv("currency", store.currency.code());

    ctx.output.info("");
    ctx.output.info("[store.templates]");
    ctx.output.kv("greeting", &store.templates.greeting);
    ctx.output.kv("single_item_intent", &store.templates.single_item_intent);
    ctx.output.kv("multi_item_intent", &store.templates.multi_item_intent);
    ctx.output.kv("quick_buy_intent", &store.templates.quick_buy_intent);
    ctx.output.kv("field_inquiry", &store.templates.field_inquiry);
    ctx.output.kv("contact_greeting", &store.templates.contact_greeting);

    ctx.output.info("");
    ctx.output.info("[opener]");
    ctx.output.kv("mode", &format!("{:?}", ctx.config.opener.mode));
    ctx.output.kv("command", &ctx.config.opener.command);
    if !ctx.config.opener.args.is_empty() {
        ctx.output.kv("args", &ctx.config.opener.args.join(" "));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("catedral.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
            "warnings": warnings,
        }));
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect configuration errors and warnings.
fn check(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let store = &config.store;

    if let Err(e) = store.checkout() {
        errors.push(e.to_string());
    }

    if store.store_name.trim().is_empty() {
        warnings.push("store.store_name is empty".to_string());
    }

    if store.templates.greeting.trim().is_empty() {
        warnings.push("store.templates.greeting is empty".to_string());
    }

    let priced_elsewhere = catedral_commerce::catalog::Catalog::reference()
        .iter()
        .filter(|p| p.price.currency != store.currency)
        .count();
    if priced_elsewhere > 0 {
        warnings.push(format!(
            "store.currency is {} but {} product(s) are priced in another currency; subtotals will be unavailable",
            store.currency.code(),
            priced_elsewhere
        ));
    }

    if config.opener.mode == OpenerMode::System && config.opener.command.trim().is_empty() {
        errors.push("opener.command is required when opener.mode is \"system\"".to_string());
    }

    (errors, warnings)
}
