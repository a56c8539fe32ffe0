//! Property-based fidelity checks

mod common;

use common::{arr, obj, reachable_ids, structurally_equal};
use proptest::prelude::*;
use replica_core::{Value, copy};

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::undefined()),
        Just(Value::null()),
        any::<bool>().prop_map(Value::boolean),
        any::<f64>().prop_map(Value::number),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    primitive().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(arr),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..6).prop_map(|entries| {
                obj(entries
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.clone()))
                    .collect())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn primitives_are_returned_unchanged(value in primitive()) {
        prop_assert_eq!(copy(&value, None, None).unwrap(), value);
    }

    #[test]
    fn trees_copy_to_equal_detached_graphs(source in tree()) {
        let copied = copy(&source, None, None).unwrap();
        prop_assert!(structurally_equal(&source, &copied));
        prop_assert!(reachable_ids(&copied).is_disjoint(&reachable_ids(&source)));
    }

    #[test]
    fn copying_into_destination_matches_fresh_copy(
        source in prop::collection::vec(primitive(), 0..8),
        stale in prop::collection::vec(primitive(), 0..8),
    ) {
        let source = arr(source);
        let destination = arr(stale);
        let result = copy(&source, Some(&destination), None).unwrap();
        prop_assert!(result.same_reference(&destination));
        prop_assert!(structurally_equal(&source, &destination));
    }
}
