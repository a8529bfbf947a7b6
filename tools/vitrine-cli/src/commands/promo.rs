//! `vitrine promo` - apply, remove, or list promo codes.

use anyhow::Result;
use clap::{Args, Subcommand};
use vitrine_commerce::cart::published_promos;

use crate::context::Context;

#[derive(Args)]
pub struct PromoArgs {
    #[command(subcommand)]
    pub action: PromoAction,
}

#[derive(Subcommand)]
pub enum PromoAction {
    /// Apply a promo code to the cart
    Apply {
        /// The code, case-insensitive
        code: String,
    },

    /// Remove the active promo code
    Remove,

    /// List the published promo codes
    List,
}

pub fn run(args: PromoArgs, ctx: &mut Context) -> Result<()> {
    match args.action {
        PromoAction::Apply { code } => {
            ctx.cart.apply_promo_code(&code);
            if ctx.cart.active_promo().is_some() {
                ctx.output.kv("total", &ctx.cart.total().display());
            }
        }
        PromoAction::Remove => {
            ctx.cart.remove_promo_code();
            ctx.output.success("Promo code removed");
        }
        PromoAction::List => {
            if ctx.output.is_json() {
                ctx.output.json(&published_promos());
                return Ok(());
            }
            ctx.output.header("Published codes");
            for promo in published_promos() {
                ctx.output
                    .list_item(&format!("{} ({}% off)", promo.code, promo.percent));
            }
        }
    }
    Ok(())
}
