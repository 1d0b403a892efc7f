use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use twothree::TwoThreeTree;

const SEED: u64 = 0x0023_0017;

#[test]
fn test_random_inserts_match_btreeset() {
    const TEST_SIZE: usize = 5_000;
    let mut rng = StdRng::seed_from_u64(SEED);

    let mut reference = BTreeSet::new();
    let mut tree = TwoThreeTree::new();

    for _ in 0..TEST_SIZE {
        let key: i64 = rng.gen_range(-2_000..2_000);
        assert_eq!(tree.insert(key), reference.insert(key), "insert({})", key);
    }

    assert_eq!(tree.len(), reference.len());
    assert!(tree.keys().eq(reference.iter()));
    assert_eq!(tree.first(), reference.first());
    assert_eq!(tree.last(), reference.last());
    tree.check_invariants_detailed().unwrap();
}

#[test]
fn test_search_agrees_with_membership() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);

    let mut reference = BTreeSet::new();
    let mut tree = TwoThreeTree::new();
    for _ in 0..1_000 {
        let key: i64 = rng.gen_range(0..4_000);
        tree.insert(key);
        reference.insert(key);
    }

    for probe in -10..4_010 {
        let found = tree.search(&probe);
        assert!(!found.is_empty());
        assert!(found.len() <= twothree::MAX_KEYS);
        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(
            found.contains(&probe),
            reference.contains(&probe),
            "search({}) returned {:?}",
            probe,
            found
        );
        assert_eq!(tree.contains(&probe), reference.contains(&probe));
    }
}

#[test]
fn test_invariants_hold_after_every_insert() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    let mut tree = TwoThreeTree::new();
    let mut inserted = 0;

    for _ in 0..600 {
        let key: u32 = rng.gen_range(0..1_000);
        if tree.insert(key) {
            inserted += 1;
        }
        assert_eq!(tree.len(), inserted);
        if let Err(e) = tree.check_invariants_detailed() {
            panic!("invariants broken after inserting {}: {}", key, e);
        }
    }
}

#[test]
fn test_height_stays_logarithmic() {
    const TEST_SIZE: usize = 10_000;
    let mut tree = TwoThreeTree::new();
    for key in 0..TEST_SIZE as i64 {
        tree.insert(key);
    }

    // A 2-3 tree of height h holds at least 2^h - 1 keys.
    let height = tree.height() as u32;
    assert!(2usize.pow(height) - 1 <= TEST_SIZE);
    // ...and at most 3^h - 1.
    assert!(3usize.pow(height) - 1 >= TEST_SIZE);
    assert_eq!(tree.arena_stats().allocated_count, {
        let (leaves, internals) = tree.count_nodes_in_tree();
        leaves + internals
    });
}
