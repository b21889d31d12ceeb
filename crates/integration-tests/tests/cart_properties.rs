//! Property tests over arbitrary cart operation sequences.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashSet;

use proptest::prelude::*;
use restaurantly_core::{Cart, Price};
use restaurantly_integration_tests::idr;

fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Nasi Goreng", "Mie Ayam", "Sate Ayam", "Burger", "Es Teh"])
        .prop_map(str::to_string)
}

#[derive(Debug, Clone)]
enum Op {
    Add { name: String, price: i64 },
    Update { index: usize, delta: i64 },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_name(), 0_i64..100_000).prop_map(|(name, price)| Op::Add { name, price }),
        (0_usize..6, -3_i64..4).prop_map(|(index, delta)| Op::Update { index, delta }),
    ]
}

proptest! {
    #[test]
    fn distinct_adds_count_every_call(prices in prop::collection::vec(0_i64..1_000_000, 0..20)) {
        let mut cart = Cart::new();
        for (i, price) in prices.iter().enumerate() {
            cart.add_item(format!("item-{i}"), idr(*price), "");
        }
        prop_assert_eq!(cart.count(), u64::try_from(prices.len()).unwrap());
        prop_assert_eq!(cart.len(), prices.len());
    }

    #[test]
    fn repeated_adds_aggregate_quantity(times in 1_u32..50, price in 0_i64..100_000) {
        let mut cart = Cart::new();
        for _ in 0..times {
            cart.add_item("Burger", idr(price), "burger.jpg");
        }
        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(cart.find("Burger").unwrap().quantity(), times);
        prop_assert_eq!(cart.total(), idr(price).times(times));
    }

    #[test]
    fn invariants_hold_after_any_sequence(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut cart = Cart::new();
        for op in ops {
            match op {
                Op::Add { name, price } => {
                    cart.add_item(name, idr(price), "");
                }
                Op::Update { index, delta } => {
                    let _ = cart.update_quantity(index, delta);
                }
            }

            let mut seen = HashSet::new();
            for item in cart.items() {
                prop_assert!(item.quantity() >= 1);
                prop_assert!(seen.insert(item.name().to_string()));
            }

            let total: Price = cart
                .items()
                .iter()
                .map(|item| item.unit_price().times(item.quantity()))
                .sum();
            prop_assert_eq!(cart.total(), total);

            let count: u64 = cart.items().iter().map(|item| u64::from(item.quantity())).sum();
            prop_assert_eq!(cart.count(), count);
        }
    }

    #[test]
    fn out_of_range_updates_never_change_the_cart(
        adds in prop::collection::vec(arb_name(), 0..5),
        extra in 0_usize..10,
        delta in -5_i64..5,
    ) {
        let mut cart = Cart::new();
        for name in adds {
            cart.add_item(name, idr(1_000), "");
        }
        let before = cart.clone();
        let index = cart.len() + extra;
        prop_assert!(cart.update_quantity(index, delta).is_err());
        prop_assert_eq!(cart, before);
    }

    #[test]
    fn update_by_name_matches_update_by_index(
        adds in prop::collection::vec(arb_name(), 1..12),
        pick in any::<prop::sample::Index>(),
        delta in -4_i64..4,
    ) {
        let mut by_index = Cart::new();
        for name in adds {
            by_index.add_item(name, idr(1_000), "");
        }
        let mut by_name = by_index.clone();

        let index = pick.index(by_index.len());
        let name = by_index.items()[index].name().to_string();

        let indexed = by_index.update_quantity(index, delta).unwrap();
        let named = by_name.update_quantity_by_name(&name, delta).unwrap();
        prop_assert_eq!(indexed, named);
        prop_assert_eq!(by_index, by_name);
    }
}
