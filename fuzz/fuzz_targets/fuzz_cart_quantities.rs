#![no_main]

use fruitcart::{Cart, Catalog, GoodKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let catalog = Catalog::standard();
    let mut cart = Cart::new(&catalog);
    cart.set_promotion(data.first().is_some_and(|b| b & 1 == 1));

    for chunk in data.chunks_exact(9) {
        let kind = GoodKind::ALL[chunk[0] as usize % GoodKind::ALL.len()];
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&chunk[1..]);
        let quantity = f64::from_le_bytes(bytes);

        let before = cart.quantity_of(kind);
        if cart.add_item(kind, quantity).is_err() {
            // Rejected adds must not touch the cart
            assert_eq!(cart.quantity_of(kind).to_bits(), before.to_bits());
        }
    }

    let _ = cart.breakdown();
});
