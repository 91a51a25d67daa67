//! Threshold promotion - a flat deduction once the cart reaches a threshold

use serde::{Deserialize, Serialize};

/// Subtotal at which the promotion starts to apply (inclusive)
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Flat amount deducted from the grand total
pub const DEFAULT_AMOUNT: f64 = 10.0;

/// Cart-wide "spend X, save Y" rule.
///
/// The deduction is applied at most once, to the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PromotionRule {
    pub threshold: f64,
    pub amount: f64,
}

impl PromotionRule {
    pub fn new(threshold: f64, amount: f64) -> Self {
        Self { threshold, amount }
    }

    /// Amount to deduct from `subtotal` (zero below the threshold)
    pub fn deduction_for(&self, subtotal: f64) -> f64 {
        if subtotal >= self.threshold {
            self.amount
        } else {
            0.0
        }
    }
}

impl Default for PromotionRule {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_AMOUNT)
    }
}
