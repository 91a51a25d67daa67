//! Itemized result of pricing a cart

use serde::Serialize;

use super::GoodKind;

/// One priced row of a cart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub kind: GoodKind,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount: f64,
    pub price: f64,
}

/// Everything `Cart::total_price` computes, kept for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub lines: Vec<LineItem>,
    /// Kinds in the cart that the catalog does not price
    pub skipped: Vec<GoodKind>,
    pub subtotal: f64,
    pub promotion_applied: bool,
    pub deduction: f64,
    pub total: f64,
}

impl PriceBreakdown {
    /// Line for `kind`, if it was priced
    pub fn line(&self, kind: GoodKind) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.kind == kind)
    }
}
