use proptest::prelude::*;
use std::collections::BTreeSet;
use twothree::TwoThreeTree;

fn arb_keys() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500i32..500, 0..300)
}

proptest! {
    /// Balance, ordering and arity hold after every single insert.
    #[test]
    fn prop_invariants_hold_after_each_insert(keys in arb_keys()) {
        let mut tree = TwoThreeTree::new();
        for key in keys {
            tree.insert(key);
            prop_assert!(tree.check_invariants_detailed().is_ok());
        }
    }

    /// Inserted keys are found; keys never inserted are not.
    #[test]
    fn prop_search_is_correct(keys in arb_keys(), probes in prop::collection::vec(-600i32..600, 0..50)) {
        let tree: TwoThreeTree<i32> = keys.iter().copied().collect();
        let reference: BTreeSet<i32> = keys.iter().copied().collect();

        for key in &keys {
            prop_assert!(tree.search(key).contains(key));
        }
        for probe in &probes {
            prop_assert_eq!(tree.search(probe).contains(probe), reference.contains(probe));
        }
    }

    /// Key count equals the number of successful inserts, and the insert
    /// result reports exactly whether the key was new.
    #[test]
    fn prop_len_counts_successful_inserts(keys in arb_keys()) {
        let mut tree = TwoThreeTree::new();
        let mut reference = BTreeSet::new();
        let mut successes = 0;

        for key in keys {
            let inserted = tree.insert(key);
            prop_assert_eq!(inserted, reference.insert(key));
            if inserted {
                successes += 1;
            }
        }
        prop_assert_eq!(tree.len(), successes);
        prop_assert!(tree.keys().eq(reference.iter()));
    }

    /// Height changes by at most one level per insert, and only upward.
    #[test]
    fn prop_height_grows_by_root_split_only(keys in arb_keys()) {
        let mut tree = TwoThreeTree::new();
        let mut height = tree.height();
        for key in keys {
            let root_was_full = tree.root_keys().len() == twothree::MAX_KEYS;
            tree.insert(key);
            let new_height = tree.height();
            prop_assert!(new_height == height || (new_height == height + 1 && root_was_full));
            height = new_height;
        }
    }
}
