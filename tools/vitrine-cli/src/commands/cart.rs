//! `vitrine cart` - show the cart and its totals.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use vitrine_commerce::cart::{LineItem, PromoCode};
use vitrine_commerce::money::Money;

use crate::context::Context;

#[derive(Args)]
pub struct CartArgs {}

/// JSON projection of the cart for `--json` output.
#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [LineItem],
    promo: Option<&'a PromoCode>,
    subtotal: Money,
    total: Money,
    total_items: u32,
}

pub fn run(_args: CartArgs, ctx: &mut Context) -> Result<()> {
    let cart = &ctx.cart;

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            items: cart.items(),
            promo: cart.active_promo(),
            subtotal: cart.subtotal(),
            total: cart.total(),
            total_items: cart.total_item_count(),
        });
        return Ok(());
    }

    ctx.output.header("Your cart");

    if cart.is_empty() {
        ctx.output.info("The cart is empty.");
        return Ok(());
    }

    for item in cart.items() {
        ctx.output.list_item(&format!(
            "{} x {} @ {} = {}",
            item.quantity,
            item.name,
            item.price.display(),
            item.line_total().display()
        ));
    }

    ctx.output.kv("subtotal", &cart.subtotal().display());
    if let Some(promo) = cart.active_promo() {
        ctx.output
            .kv("promo", &format!("{} ({}% off)", promo.code, promo.percent));
    }
    ctx.output.kv("total", &cart.total().display());
    ctx.output.kv("items", &cart.total_item_count().to_string());

    Ok(())
}
