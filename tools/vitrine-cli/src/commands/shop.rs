//! `vitrine shop` - browse the catalog.

use anyhow::{anyhow, Result};
use clap::Args;
use vitrine_commerce::catalog::{browse, SortOrder};

use crate::context::Context;

#[derive(Args)]
pub struct ShopArgs {
    /// Filter by feature tag (case-insensitive substring)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Sort order: featured, price-asc, price-desc, newest
    #[arg(short, long, default_value = "featured")]
    pub sort: String,
}

pub fn run(args: ShopArgs, ctx: &mut Context) -> Result<()> {
    let sort = SortOrder::parse(&args.sort)
        .ok_or_else(|| anyhow!("unknown sort order: {}", args.sort))?;

    let listing = browse(ctx.catalog.products(), args.tag.as_deref(), sort);

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    match &args.tag {
        Some(tag) => ctx
            .output
            .header(&format!("Shop: \"{}\" ({})", tag, sort.display_name())),
        None => ctx.output.header(&format!("Shop ({})", sort.display_name())),
    }

    if listing.is_empty() {
        ctx.output.info("No products match that tag.");
        return Ok(());
    }

    for product in &listing {
        ctx.output.list_item(&format!(
            "[{}] {} - {}",
            product.id,
            product.name,
            product.price.display()
        ));
        ctx.output.kv("about", &product.blurb);
        ctx.output.kv("features", &product.features.join(", "));
    }

    Ok(())
}
