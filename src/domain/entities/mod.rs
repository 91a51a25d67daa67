//! Domain Entities
//!
//! Core pricing entities: the goods, the catalog that holds them, and the
//! cart priced against a catalog.

mod cart;
mod catalog;
mod priced_good;

pub use cart::Cart;
pub use catalog::{Catalog, STANDARD_PRICES};
pub use priced_good::PricedGood;
