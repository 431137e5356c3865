//! Property tests for the ingredient store.
//!
//! Arbitrary add/remove sequences are checked against a naive model:
//! a Vec that appends trimmed, non-blank, unseen names and drops exact
//! matches on remove.

use greenpantry_core::IngredientStore;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(String),
}

fn name() -> impl Strategy<Value = String> {
    // Small alphabet with case and padding so duplicates and near-duplicates are common.
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[ ]{0,2}[aAbB]{1,2}[ ]{0,2}",
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => name().prop_map(Op::Add),
        1 => name().prop_map(Op::Remove),
    ]
}

fn apply_model(model: &mut Vec<String>, op: &Op) {
    match op {
        Op::Add(n) => {
            let n = n.trim();
            if !n.is_empty() && !model.iter().any(|m| m == n) {
                model.push(n.to_string());
            }
        }
        Op::Remove(n) => model.retain(|m| m != n),
    }
}

proptest! {
    #[test]
    fn store_never_holds_duplicates(ops in prop::collection::vec(op(), 0..64)) {
        let mut store = IngredientStore::new();
        for op in &ops {
            match op {
                Op::Add(n) => { store.add(n); }
                Op::Remove(n) => { store.remove(n); }
            }
        }
        let items = store.items();
        for (i, a) in items.iter().enumerate() {
            prop_assert!(!a.is_empty());
            prop_assert_eq!(a.trim(), a.as_str());
            prop_assert!(items[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn store_matches_insertion_order_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut store = IngredientStore::new();
        let mut model = Vec::new();
        for op in &ops {
            match op {
                Op::Add(n) => { store.add(n); }
                Op::Remove(n) => { store.remove(n); }
            }
            apply_model(&mut model, op);
        }
        prop_assert_eq!(store.items(), model.as_slice());
    }

    #[test]
    fn add_reports_change_accurately(names in prop::collection::vec(name(), 0..32)) {
        let mut store = IngredientStore::new();
        for n in &names {
            let before = store.len();
            let changed = store.add(n);
            prop_assert_eq!(changed, store.len() == before + 1);
        }
    }
}

#[test]
fn egg_and_egg_are_distinct() {
    let mut store = IngredientStore::new();
    store.add("Egg");
    store.add("egg");
    assert_eq!(store.len(), 2);
}
