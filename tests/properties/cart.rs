//! Property tests for cart accumulation and promotion.

use proptest::prelude::*;

use fruitcart::{Cart, Catalog, GoodKind};

fn good_kind() -> impl Strategy<Value = GoodKind> {
    prop_oneof![
        Just(GoodKind::Apple),
        Just(GoodKind::Strawberry),
        Just(GoodKind::Mango),
    ]
}

fn quantity() -> impl Strategy<Value = f64> {
    0.0f64..500.0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Adding q1 then q2 of a kind accumulates q1 + q2, in any order.
    #[test]
    fn property_accumulation_is_additive(
        kind in good_kind(),
        q1 in quantity(),
        q2 in quantity(),
    ) {
        let catalog = Catalog::standard();

        let mut forward = Cart::new(&catalog);
        forward.add_item(kind, q1).unwrap();
        forward.add_item(kind, q2).unwrap();

        let mut backward = Cart::new(&catalog);
        backward.add_item(kind, q2).unwrap();
        backward.add_item(kind, q1).unwrap();

        prop_assert!((forward.quantity_of(kind) - (q1 + q2)).abs() < 1e-9);
        prop_assert!((forward.total_price() - backward.total_price()).abs() < 0.001);
    }

    /// PROPERTY: A negative add fails and leaves the total unchanged.
    #[test]
    fn property_negative_add_leaves_cart_unchanged(
        items in proptest::collection::vec((good_kind(), quantity()), 0..6),
        kind in good_kind(),
        x in 0.0001f64..1_000.0,
    ) {
        let catalog = Catalog::standard();
        let mut cart = Cart::new(&catalog);
        for (k, q) in items {
            cart.add_item(k, q).unwrap();
        }
        let before = cart.total_price();
        let quantity_before = cart.quantity_of(kind);

        prop_assert!(cart.add_item(kind, -x).is_err());
        prop_assert_eq!(cart.total_price(), before);
        prop_assert_eq!(cart.quantity_of(kind), quantity_before);
    }

    /// PROPERTY: The promotion deducts exactly 10.0 iff enabled and subtotal >= 100.0.
    #[test]
    fn property_promotion_is_single_flat_deduction(
        items in proptest::collection::vec((good_kind(), quantity()), 0..6),
        enabled in any::<bool>(),
    ) {
        let catalog = Catalog::standard();
        let mut cart = Cart::new(&catalog);
        for (k, q) in items {
            cart.add_item(k, q).unwrap();
        }
        cart.set_promotion(enabled);

        let subtotal = cart.subtotal();
        let expected = if enabled && subtotal >= 100.0 {
            subtotal - 10.0
        } else {
            subtotal
        };
        prop_assert_eq!(cart.total_price(), expected);
        prop_assert!(cart.total_price() >= 0.0);
    }

    /// PROPERTY: `total_price` always agrees with the breakdown.
    #[test]
    fn property_total_matches_breakdown(
        items in proptest::collection::vec((good_kind(), quantity()), 0..6),
        enabled in any::<bool>(),
    ) {
        let catalog = Catalog::standard();
        let mut cart = Cart::new(&catalog);
        for (k, q) in items {
            cart.add_item(k, q).unwrap();
        }
        cart.set_promotion(enabled);

        let breakdown = cart.breakdown();
        prop_assert_eq!(cart.total_price(), breakdown.total);
        let line_sum: f64 = breakdown.lines.iter().map(|l| l.price).sum();
        prop_assert!((line_sum - breakdown.subtotal).abs() < 1e-6);
    }
}
