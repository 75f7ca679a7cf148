//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod fields;
pub mod shell;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category label or slug (e.g. "Pistolas", "protecao"); "Todos" lists everything.
    #[arg(short, long, default_value = "Todos")]
    pub category: String,

    /// List the categories instead of products.
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: u32,
}

/// Arguments for the fields command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Ask the store about playing at this field.
    #[arg(short, long, value_name = "FIELD_ID")]
    pub inquire: Option<u32>,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Open a channel (phone, email, website, instagram, whatsapp).
    #[arg(short, long, value_name = "CHANNEL")]
    pub open: Option<String>,
}

/// Arguments for the buy command.
#[derive(Args)]
pub struct BuyArgs {
    /// Product id.
    pub id: u32,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product ids, in cart order. Repeat an id to add it twice.
    #[arg(required = true)]
    pub ids: Vec<u32>,

    /// Keep the cart when the messaging app cannot be opened.
    #[arg(long)]
    pub keep_on_failure: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration.
    Validate,
}
