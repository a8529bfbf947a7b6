//! `vitrine qty` - set a line item's quantity.

use anyhow::{anyhow, Result};
use clap::Args;
use vitrine_commerce::cart::{MAX_QUANTITY, MIN_QUANTITY};
use vitrine_commerce::ids::ProductId;

use crate::context::Context;

#[derive(Args)]
pub struct QtyArgs {
    /// Product id of the line item
    pub product_id: String,

    /// New quantity (1-99)
    pub quantity: u32,
}

pub fn run(args: QtyArgs, ctx: &mut Context) -> Result<()> {
    let id = ProductId::new(&args.product_id);
    if ctx.cart.update_quantity(&id, args.quantity) {
        ctx.output.success(&format!(
            "Set {} to quantity {}",
            args.product_id, args.quantity
        ));
        Ok(())
    } else {
        Err(anyhow!(
            "could not update {}: quantity must be {}-{} and the item must be in the cart",
            args.product_id,
            MIN_QUANTITY,
            MAX_QUANTITY
        ))
    }
}
