use anyhow::{bail, Context, Result};
use fruitcart::presentation::Renderer;
use fruitcart::{Cart, Config, GoodKind, PriceBreakdown};

/// Build the configured catalog, fill a cart and price it
pub fn price_cart(
    config: &Config,
    items: &[(GoodKind, f64)],
    discounts: &[(GoodKind, f64)],
    promotion: Option<bool>,
) -> Result<PriceBreakdown> {
    let catalog = config
        .catalog()
        .context("failed to build catalog from config")?;
    for &(kind, factor) in discounts {
        if !catalog.set_discount(kind, factor) {
            bail!("cannot discount {kind}: not in the catalog");
        }
    }

    let mut cart = Cart::with_promotion_rule(&catalog, config.promotion_rule());
    cart.set_promotion(promotion.unwrap_or(config.promotion.enabled));
    for &(kind, quantity) in items {
        cart.add_item(kind, quantity)
            .with_context(|| format!("cannot add {kind} to the cart"))?;
    }

    let breakdown = cart.breakdown();
    tracing::info!(
        lines = breakdown.lines.len(),
        total = breakdown.total,
        "cart priced"
    );
    Ok(breakdown)
}

pub fn cmd_price(
    config: &Config,
    items: &[(GoodKind, f64)],
    discounts: &[(GoodKind, f64)],
    promotion: Option<bool>,
    renderer: &dyn Renderer,
) -> Result<()> {
    let breakdown = price_cart(config, items, discounts, promotion)?;
    println!("{}", renderer.render_breakdown(&breakdown));
    Ok(())
}
