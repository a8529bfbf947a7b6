//! Vitrine CLI - a storefront at the command line.
//!
//! Commands:
//! - `vitrine shop` - Browse the catalog with filter and sort
//! - `vitrine add` - Add a product to the cart
//! - `vitrine cart` - Show the cart with totals
//! - `vitrine qty` - Set a line item's quantity
//! - `vitrine remove` - Remove a line item
//! - `vitrine clear` - Empty the cart
//! - `vitrine promo` - Apply, remove, or list promo codes
//!
//! The cart persists between invocations under the user data directory
//! (override with `--cart-dir`).

mod commands;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, CartArgs, ClearArgs, PromoArgs, QtyArgs, RemoveArgs, ShopArgs};

/// Vitrine - browse the shop and manage your cart
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Directory the cart is persisted in
    #[arg(long, global = true)]
    cart_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Shop(ShopArgs),

    /// Add a product to the cart
    Add(AddArgs),

    /// Show the cart
    Cart(CartArgs),

    /// Set a line item's quantity
    Qty(QtyArgs),

    /// Remove a line item from the cart
    Remove(RemoveArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Manage promo codes
    Promo(PromoArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let mut ctx = context::Context::load(cli.cart_dir.as_deref(), output)?;

    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &mut ctx),
        Commands::Add(args) => commands::add::run(args, &mut ctx),
        Commands::Cart(args) => commands::cart::run(args, &mut ctx),
        Commands::Qty(args) => commands::qty::run(args, &mut ctx),
        Commands::Remove(args) => commands::remove::run(args, &mut ctx),
        Commands::Clear(args) => commands::clear::run(args, &mut ctx),
        Commands::Promo(args) => commands::promo::run(args, &mut ctx),
    };

    ctx.flush_notices();

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
