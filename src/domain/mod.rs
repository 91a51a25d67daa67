//! Domain Layer
//!
//! Pure pricing logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - PricedGood, Catalog, Cart
//! - `value_objects/` - GoodKind, PromotionRule, PriceBreakdown
//!
//! ## Sharing
//!
//! A `Catalog` is passed to carts by reference. Discounts are changed
//! through that shared reference, so every cart borrowing the catalog prices
//! with the new factor. Nothing here is synchronized.

pub mod entities;
pub mod value_objects;
