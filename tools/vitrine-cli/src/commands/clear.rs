//! `vitrine clear` - empty the cart.

use anyhow::Result;
use clap::Args;

use crate::context::Context;

#[derive(Args)]
pub struct ClearArgs {}

pub fn run(_args: ClearArgs, ctx: &mut Context) -> Result<()> {
    ctx.cart.clear();
    Ok(())
}
