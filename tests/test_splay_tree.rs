extern crate rand;
extern crate splay_collections;

use rand::{Rng, SeedableRng, XorShiftRng};
use splay_collections::splay_tree::SplayTree;
use std::collections::BTreeMap;

fn build(pairs: &[(i32, &'static str)]) -> SplayTree<i32, &'static str> {
    let mut tree = SplayTree::new();
    for &(key, value) in pairs {
        tree.insert(key, value);
    }
    tree
}

#[test]
fn test_inorder_is_sorted() {
    let tree = build(&[(10, "ten"), (5, "five"), (15, "fifteen")]);
    assert_eq!(
        tree.inorder(),
        vec![(&5, &"five"), (&10, &"ten"), (&15, &"fifteen")],
    );
}

#[test]
fn test_delete_with_two_children() {
    let mut tree = build(&[(10, "ten"), (5, "five"), (15, "fifteen")]);
    assert!(tree.delete(&10));
    assert_eq!(tree.find(&10), None);
    assert_eq!(tree.inorder(), vec![(&5, &"five"), (&15, &"fifteen")]);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn test_delete_with_one_child() {
    let mut tree = build(&[(10, "ten"), (5, "five"), (7, "seven")]);
    assert!(tree.delete(&5));
    assert_eq!(tree.find(&5), None);
    assert_eq!(tree.inorder(), vec![(&7, &"seven"), (&10, &"ten")]);
}

#[test]
fn test_delete_missing_key() {
    let mut tree = build(&[(10, "ten"), (20, "twenty"), (30, "thirty")]);
    let before: Vec<(i32, &str)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    assert!(!tree.delete(&100));
    let after: Vec<(i32, &str)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(before, after);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_sequential_keys() {
    let mut tree = SplayTree::new();
    for key in 1..8 {
        tree.insert(key, format!("value_{}", key));
    }
    assert_eq!(tree.find(&7), Some(&String::from("value_7")));
    assert_eq!(tree.find(&1), Some(&String::from("value_1")));
    assert_eq!(tree.root(), Some((&1, &String::from("value_1"))));
}

#[test]
fn test_update_existing_key() {
    let mut tree = build(&[(10, "ten")]);
    assert_eq!(tree.insert(10, "new_ten"), Some("ten"));
    assert_eq!(tree.find(&10), Some(&"new_ten"));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_minimum_and_maximum() {
    let mut tree = build(&[
        (10, "ten"),
        (5, "five"),
        (15, "fifteen"),
        (3, "three"),
        (17, "seventeen"),
    ]);
    assert_eq!(tree.minimum(), Some((&3, &"three")));
    assert_eq!(tree.maximum(), Some((&17, &"seventeen")));
}

#[test]
fn test_empty_tree() {
    let mut tree: SplayTree<i32, &str> = SplayTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.find(&1), None);
    assert_eq!(tree.minimum(), None);
    assert_eq!(tree.maximum(), None);
    assert!(!tree.delete(&1));
    assert!(tree.inorder().is_empty());
    assert!(tree.is_empty());
}

#[test]
fn test_negative_keys() {
    let mut tree = build(&[(-5, "negative_five"), (0, "zero")]);
    assert_eq!(tree.find(&-5), Some(&"negative_five"));
    assert_eq!(tree.minimum(), Some((&-5, &"negative_five")));
}

#[test]
fn test_delete_all() {
    let keys = [10, 5, 15, 3, 7, 12, 17];
    let mut tree = SplayTree::new();
    for &key in &keys {
        tree.insert(key, key);
    }
    for (i, key) in keys.iter().enumerate() {
        assert!(tree.delete(key));
        assert_eq!(tree.find(key), None);
        assert_eq!(tree.len(), keys.len() - i - 1);
        assert_eq!(tree.check_invariants(), Ok(()));
    }
    assert!(tree.is_empty());
    assert!(tree.inorder().is_empty());
}

#[test]
fn test_large_sequence() {
    let mut tree = SplayTree::new();
    for key in 1..101 {
        tree.insert(key, format!("value_{}", key));
    }
    assert_eq!(tree.find(&1).map(String::as_str), Some("value_1"));
    assert_eq!(tree.find(&50).map(String::as_str), Some("value_50"));
    assert_eq!(tree.find(&100).map(String::as_str), Some("value_100"));
    assert_eq!(tree.find(&101), None);

    for key in 1..51 {
        assert!(tree.delete(&key));
    }
    let expected: Vec<(i32, String)> = (51..101).map(|key| (key, format!("value_{}", key))).collect();
    assert_eq!(tree.into_iter().collect::<Vec<(i32, String)>>(), expected);
}

#[test]
fn test_degenerate_tree_is_iterable() {
    let mut tree = SplayTree::new();
    for key in 0..100_000u32 {
        tree.insert(key, ());
    }
    assert_eq!(tree.height(), 100_000);
    assert_eq!(tree.iter().count(), 100_000);
    assert_eq!(tree.check_invariants(), Ok(()));

    // one access at the bottom of the spine roughly halves its depth
    tree.find(&0);
    assert!(tree.height() <= 50_002);
}

#[test]
fn test_random_workload() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
    let mut tree = SplayTree::new();
    let mut expected = BTreeMap::new();

    for i in 0..20_000 {
        let key = rng.gen_range(0u32, 1000);
        match rng.gen_range(0, 5) {
            0 | 1 => {
                let value = rng.next_u32();
                assert_eq!(tree.insert(key, value), expected.insert(key, value));
                assert_eq!(tree.root(), Some((&key, &value)));
            },
            2 => {
                assert_eq!(tree.find(&key), expected.get(&key));
                if expected.contains_key(&key) {
                    assert_eq!(tree.root().map(|(k, _)| *k), Some(key));
                }
            },
            3 => assert_eq!(tree.remove(&key), expected.remove(&key).map(|value| (key, value))),
            _ => {
                assert_eq!(tree.minimum().map(|(k, v)| (*k, *v)), expected.iter().next().map(|(k, v)| (*k, *v)));
                assert_eq!(tree.maximum().map(|(k, v)| (*k, *v)), expected.iter().next_back().map(|(k, v)| (*k, *v)));
            },
        }
        assert_eq!(tree.len(), expected.len());
        if i % 1000 == 0 {
            assert_eq!(tree.check_invariants(), Ok(()));
        }
    }

    assert_eq!(tree.check_invariants(), Ok(()));
    assert!(tree.iter().eq(expected.iter()));
}
