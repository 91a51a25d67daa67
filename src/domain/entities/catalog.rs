//! Catalog entity
//!
//! Maps each good kind to its price. A catalog is built once and then shared
//! by reference with every cart priced against it; changing a discount is the
//! only mutation and is seen by all of those carts.

use std::collections::BTreeMap;

use crate::domain::value_objects::GoodKind;
use crate::error::{PricingError, PricingResult};

use super::PricedGood;

/// Base price per unit of the standard goods
pub const STANDARD_PRICES: [(GoodKind, f64); 3] = [
    (GoodKind::Apple, 8.0),
    (GoodKind::Strawberry, 13.0),
    (GoodKind::Mango, 20.0),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    goods: BTreeMap<GoodKind, PricedGood>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with apple, strawberry and mango at their standard prices
    pub fn standard() -> Self {
        let goods = STANDARD_PRICES
            .iter()
            .map(|&(kind, price)| (kind, PricedGood::new(price)))
            .collect();
        Self { goods }
    }

    /// Add or replace the entry for `kind`.
    ///
    /// Replacing an entry resets its discount.
    pub fn insert(&mut self, kind: GoodKind, base_price: f64) -> PricingResult<()> {
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(PricingError::InvalidBasePrice {
                kind,
                price: base_price,
            });
        }
        self.goods.insert(kind, PricedGood::new(base_price));
        Ok(())
    }

    pub fn get(&self, kind: GoodKind) -> Option<&PricedGood> {
        self.goods.get(&kind)
    }

    pub fn contains(&self, kind: GoodKind) -> bool {
        self.goods.contains_key(&kind)
    }

    /// Set the discount of `kind`. Returns false if the kind is not catalogued.
    pub fn set_discount(&self, kind: GoodKind, factor: f64) -> bool {
        match self.goods.get(&kind) {
            Some(good) => {
                tracing::debug!(%kind, factor, "discount changed");
                good.set_discount(factor);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GoodKind, &PricedGood)> {
        self.goods.iter().map(|(kind, good)| (*kind, good))
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }
}
