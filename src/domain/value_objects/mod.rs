//! Domain Value Objects
//!
//! Immutable value types that represent pricing concepts.

mod good_kind;
mod price_breakdown;
mod promotion;

pub use good_kind::GoodKind;
pub use price_breakdown::{LineItem, PriceBreakdown};
pub use promotion::{PromotionRule, DEFAULT_AMOUNT, DEFAULT_THRESHOLD};
