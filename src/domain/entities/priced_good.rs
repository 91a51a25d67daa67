//! PricedGood entity
//!
//! A good sold by weight: a fixed base price per unit and a discount factor
//! that can change while carts are priced against it.

use std::cell::Cell;

/// Base unit price plus a mutable discount multiplier.
///
/// The discount lives in a `Cell` so it can be changed through the shared
/// reference every cart holds. This also makes the type `!Sync`: sharing a
/// catalog across threads needs external locking.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedGood {
    base_price: f64,
    discount: Cell<f64>,
}

impl PricedGood {
    /// Create a good with a positive base price and no discount.
    ///
    /// Use `Catalog::insert` for a validated construction path.
    pub fn new(base_price: f64) -> Self {
        Self {
            base_price,
            discount: Cell::new(1.0),
        }
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn discount(&self) -> f64 {
        self.discount.get()
    }

    /// Replace the discount factor. Any value is accepted, including factors
    /// above 1.0 (markup) or below zero.
    pub fn set_discount(&self, factor: f64) {
        self.discount.set(factor);
    }

    /// Price of `quantity` units at the current discount
    pub fn price_for(&self, quantity: f64) -> f64 {
        self.base_price * quantity * self.discount.get()
    }
}
