//! `vitrine add` - put a product in the cart.

use anyhow::{anyhow, Result};
use clap::Args;
use vitrine_commerce::cart::AddItem;
use vitrine_commerce::ids::ProductId;

use crate::context::Context;

#[derive(Args)]
pub struct AddArgs {
    /// Product id (see `vitrine shop`)
    pub product_id: String,

    /// Quantity to add
    #[arg(short, long, default_value_t = 1)]
    pub qty: u32,
}

pub fn run(args: AddArgs, ctx: &mut Context) -> Result<()> {
    let id = ProductId::new(&args.product_id);
    let product = ctx
        .catalog
        .find(&id)
        .ok_or_else(|| anyhow!("no such product: {}", args.product_id))?;

    let request = AddItem::from_product(product, args.qty);
    ctx.cart.add_item(request);

    ctx.output.kv("items in cart", &ctx.cart.total_item_count().to_string());
    Ok(())
}
