//! `vitrine remove` - take a line item out of the cart.

use anyhow::Result;
use clap::Args;
use vitrine_commerce::ids::ProductId;

use crate::context::Context;

#[derive(Args)]
pub struct RemoveArgs {
    /// Product id of the line item
    pub product_id: String,
}

pub fn run(args: RemoveArgs, ctx: &mut Context) -> Result<()> {
    let id = ProductId::new(&args.product_id);
    if !ctx.cart.remove_item(&id) {
        ctx.output
            .info(&format!("{} was not in the cart", args.product_id));
    }
    Ok(())
}
