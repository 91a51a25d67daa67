//! Cart entity
//!
//! Accumulates weighed quantities per good kind and prices them against a
//! borrowed catalog. Carts only grow: there is no removal operation.

use std::collections::BTreeMap;

use crate::domain::value_objects::{GoodKind, LineItem, PriceBreakdown, PromotionRule};
use crate::error::{PricingError, PricingResult};

use super::Catalog;

#[derive(Debug, Clone)]
pub struct Cart<'a> {
    catalog: &'a Catalog,
    quantities: BTreeMap<GoodKind, f64>,
    promotion_enabled: bool,
    promotion: PromotionRule,
}

impl<'a> Cart<'a> {
    /// Empty cart priced against `catalog` with the default promotion rule
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_promotion_rule(catalog, PromotionRule::default())
    }

    pub fn with_promotion_rule(catalog: &'a Catalog, promotion: PromotionRule) -> Self {
        Self {
            catalog,
            quantities: BTreeMap::new(),
            promotion_enabled: false,
            promotion,
        }
    }

    /// Add `quantity` of `kind` to the cart.
    ///
    /// Repeated adds of the same kind accumulate. A negative (or NaN)
    /// quantity is rejected and leaves the cart untouched.
    pub fn add_item(&mut self, kind: GoodKind, quantity: f64) -> PricingResult<()> {
        if quantity.is_nan() || quantity < 0.0 {
            tracing::warn!(%kind, quantity, "rejected invalid quantity");
            return Err(PricingError::InvalidQuantity { quantity });
        }

        let total = self.quantities.entry(kind).or_insert(0.0);
        *total += quantity;
        tracing::debug!(%kind, quantity, total = *total, "item added");
        Ok(())
    }

    pub fn set_promotion(&mut self, enabled: bool) {
        self.promotion_enabled = enabled;
    }

    pub fn promotion_enabled(&self) -> bool {
        self.promotion_enabled
    }

    pub fn promotion_rule(&self) -> PromotionRule {
        self.promotion
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Accumulated quantity of `kind` (zero if never added)
    pub fn quantity_of(&self, kind: GoodKind) -> f64 {
        self.quantities.get(&kind).copied().unwrap_or(0.0)
    }

    /// Accumulated quantities in kind order
    pub fn items(&self) -> impl Iterator<Item = (GoodKind, f64)> + '_ {
        self.quantities.iter().map(|(kind, quantity)| (*kind, *quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Sum of catalogued line prices, before any promotion
    pub fn subtotal(&self) -> f64 {
        self.breakdown().subtotal
    }

    /// Grand total after the promotion (if enabled and reached)
    pub fn total_price(&self) -> f64 {
        self.breakdown().total
    }

    /// Price every line and apply the promotion.
    ///
    /// Kinds without a catalog entry contribute nothing and are listed in
    /// `skipped`.
    pub fn breakdown(&self) -> PriceBreakdown {
        let mut lines = Vec::with_capacity(self.quantities.len());
        let mut skipped = Vec::new();
        let mut subtotal = 0.0;

        for (kind, quantity) in self.items() {
            let Some(good) = self.catalog.get(kind) else {
                tracing::debug!(%kind, quantity, "no catalog entry, skipping");
                skipped.push(kind);
                continue;
            };

            let price = good.price_for(quantity);
            subtotal += price;
            lines.push(LineItem {
                kind,
                quantity,
                unit_price: good.base_price(),
                discount: good.discount(),
                price,
            });
        }

        let deduction = if self.promotion_enabled {
            self.promotion.deduction_for(subtotal)
        } else {
            0.0
        };
        let promotion_applied = self.promotion_enabled && subtotal >= self.promotion.threshold;
        if promotion_applied {
            tracing::debug!(subtotal, deduction, "promotion applied");
        }

        PriceBreakdown {
            lines,
            skipped,
            subtotal,
            promotion_applied,
            deduction,
            total: subtotal - deduction,
        }
    }
}
