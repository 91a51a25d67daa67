//! Error types for fruitcart
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::GoodKind;

/// Result type alias for fruitcart operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Main error type for fruitcart operations
#[derive(Error, Debug)]
pub enum PricingError {
    /// Quantity added to a cart was negative (or not a number)
    #[error("invalid quantity {quantity}: must be a non-negative number")]
    InvalidQuantity { quantity: f64 },

    /// Catalog entry with a non-positive or non-finite base price
    #[error("invalid base price {price} for {kind}: must be a positive number")]
    InvalidBasePrice { kind: GoodKind, price: f64 },

    /// Name that does not match any good kind
    #[error("unknown good '{name}' (expected one of: apple, strawberry, mango)")]
    UnknownGoodKind { name: String },

    /// Config file that could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_quantity() {
        let err = PricingError::InvalidQuantity { quantity: -1.0 };
        assert_eq!(
            err.to_string(),
            "invalid quantity -1: must be a non-negative number"
        );
    }

    #[test]
    fn test_error_display_invalid_base_price() {
        let err = PricingError::InvalidBasePrice {
            kind: GoodKind::Mango,
            price: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid base price 0 for mango: must be a positive number"
        );
    }

    #[test]
    fn test_error_display_unknown_good() {
        let err = PricingError::UnknownGoodKind {
            name: "kiwi".to_string(),
        };
        assert!(err.to_string().starts_with("unknown good 'kiwi'"));
    }
}
