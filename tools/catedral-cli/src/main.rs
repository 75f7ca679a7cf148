//! Catedral CLI - Terminal storefront for La Catedral Airsoft.
//!
//! Commands:
//! - `catedral catalog` - List products, optionally by category
//! - `catedral show` - Show one product in detail
//! - `catedral fields` - List playing fields or ask about one
//! - `catedral contact` - Show contact details or open a channel
//! - `catedral buy` - Ask to buy one product right away
//! - `catedral checkout` - Fill a cart and send it to the store
//! - `catedral shell` - Browse the store interactively
//! - `catedral config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod opener;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BuyArgs, CatalogArgs, CheckoutArgs, ConfigArgs, ContactArgs, FieldsArgs, ShowArgs};

/// Catedral CLI - Browse and buy from La Catedral Airsoft
#[derive(Parser)]
#[command(name = "catedral")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print links instead of opening them
    #[arg(long, global = true)]
    print_links: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// Show product details
    Show(ShowArgs),

    /// List playing fields
    Fields(FieldsArgs),

    /// Show contact details
    Contact(ContactArgs),

    /// Buy a single product directly
    Buy(BuyArgs),

    /// Add products to a cart and check out
    Checkout(CheckoutArgs),

    /// Browse the store interactively
    Shell,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output, cli.print_links)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Show(args) => commands::catalog::show(args, &ctx),
        Commands::Fields(args) => commands::fields::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Buy(args) => commands::checkout::buy(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Shell => commands::shell::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
