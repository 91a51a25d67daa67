//! Property tests for per-good pricing.

use proptest::prelude::*;

use fruitcart::PricedGood;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `price_for(q) == base * q * discount`.
    #[test]
    fn property_price_is_base_times_quantity_times_discount(
        base in 0.01f64..1_000.0,
        quantity in 0.0f64..1_000.0,
        discount in 0.0f64..2.0,
    ) {
        let good = PricedGood::new(base);
        good.set_discount(discount);
        prop_assert!((good.price_for(quantity) - base * quantity * discount).abs() < 0.001);
    }

    /// PROPERTY: Pricing leaves the good unchanged.
    #[test]
    fn property_price_for_has_no_side_effects(
        base in 0.01f64..1_000.0,
        quantity in 0.0f64..1_000.0,
    ) {
        let good = PricedGood::new(base);
        let first = good.price_for(quantity);
        let second = good.price_for(quantity);
        prop_assert_eq!(first, second);
        prop_assert_eq!(good.discount(), 1.0);
        prop_assert_eq!(good.base_price(), base);
    }
}
