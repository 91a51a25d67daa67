//! fruitcart - weighted-goods cart pricing
//!
//! Prices carts of goods sold by weight against a shared catalog. Each good
//! has a base price per unit and a discount factor; a cart can additionally
//! apply a flat "spend X, save Y" promotion to its grand total.
//!
//! ```
//! use fruitcart::{Cart, Catalog, GoodKind};
//!
//! let catalog = Catalog::standard();
//! catalog.set_discount(GoodKind::Strawberry, 0.8);
//!
//! let mut cart = Cart::new(&catalog);
//! cart.add_item(GoodKind::Apple, 5.0)?;
//! cart.add_item(GoodKind::Strawberry, 3.0)?;
//! cart.add_item(GoodKind::Mango, 2.0)?;
//! cart.set_promotion(true);
//!
//! assert!((cart.total_price() - 101.2).abs() < 0.001);
//! # Ok::<(), fruitcart::PricingError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use config::{Config, Verbosity};
pub use domain::entities::{Cart, Catalog, PricedGood};
pub use domain::value_objects::{GoodKind, LineItem, PriceBreakdown, PromotionRule};
pub use error::{PricingError, PricingResult};
