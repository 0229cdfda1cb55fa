use proptest::prelude::*;
use rbtree_collections::red_black_tree::{Color, RedBlackMap, RedBlackSet};
use rbtree_collections::Error;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
enum Operation {
    Insert(u16, u32),
    Remove(u16),
    Update(u16, u32),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..256u16, any::<u32>()).prop_map(|(key, value)| Operation::Insert(key, value)),
        (0..256u16).prop_map(Operation::Remove),
        (0..256u16, any::<u32>()).prop_map(|(key, value)| Operation::Update(key, value)),
    ]
}

proptest! {
    #[test]
    fn prop_map_agrees_with_btreemap(operations in prop::collection::vec(operation(), 0..400)) {
        let mut map = RedBlackMap::new();
        let mut expected = BTreeMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(key, value) => {
                    let actual = map.insert(key, value);
                    if expected.contains_key(&key) {
                        prop_assert_eq!(actual, Err(Error::DuplicateKey));
                    } else {
                        prop_assert_eq!(actual, Ok(()));
                        expected.insert(key, value);
                    }
                },
                Operation::Remove(key) => {
                    let actual = map.remove(&key).ok();
                    prop_assert_eq!(actual, expected.remove(&key).map(|value| (key, value)));
                },
                Operation::Update(key, value) => {
                    let actual = map.update(&key, value).ok();
                    let old = expected.get_mut(&key).map(|old| std::mem::replace(old, value));
                    prop_assert_eq!(actual, old);
                },
            }
            prop_assert!(map.validate().is_ok());
            prop_assert_eq!(map.len(), expected.len());
        }

        prop_assert_eq!(
            map.into_iter().collect::<Vec<(u16, u32)>>(),
            expected.into_iter().collect::<Vec<(u16, u32)>>(),
        );
    }

    #[test]
    fn prop_in_order_is_sorted_and_unique(keys in prop::collection::vec(any::<i32>(), 0..300)) {
        let set: RedBlackSet<i32> = keys.iter().cloned().collect();
        let expected: Vec<i32> = keys.into_iter().collect::<BTreeSet<i32>>().into_iter().collect();

        prop_assert_eq!(set.len(), expected.len());
        prop_assert_eq!(set.iter().cloned().collect::<Vec<i32>>(), expected);
    }

    #[test]
    fn prop_height_is_logarithmic(keys in prop::collection::vec(any::<u32>(), 1..500)) {
        let set: RedBlackSet<u32> = keys.into_iter().collect();
        let bound = 2.0 * ((set.len() + 1) as f64).log2();

        prop_assert!(set.height() as f64 <= bound);
        prop_assert_eq!(set.pre_order().count(), set.len());
    }

    #[test]
    fn prop_remove_everything_empties_tree(keys in prop::collection::btree_set(any::<u16>(), 0..300)) {
        let mut set: RedBlackSet<u16> = keys.iter().cloned().collect();

        for key in keys.iter().rev() {
            prop_assert_eq!(set.remove(key), Ok(*key));
            prop_assert!(set.validate().is_ok());
        }
        prop_assert!(set.is_empty());
        prop_assert_eq!(set.height(), 0);
        prop_assert_eq!(set.min(), Err(Error::EmptyTree));
    }

    #[test]
    fn prop_duplicate_insert_is_rejected(keys in prop::collection::btree_set(any::<u16>(), 1..200)) {
        let mut set: RedBlackSet<u16> = keys.iter().cloned().collect();

        for key in &keys {
            prop_assert_eq!(set.insert(*key), Err(Error::DuplicateKey));
        }
        prop_assert_eq!(set.len(), keys.len());
        prop_assert_eq!(set.root_color(), Some(Color::Black));
    }

    #[test]
    fn prop_multiset_matches_sorted_vec(keys in prop::collection::vec(0..20u8, 0..300)) {
        let mut set = RedBlackSet::with_duplicates();
        for key in &keys {
            prop_assert_eq!(set.insert(*key), Ok(()));
        }

        let mut expected = keys;
        expected.sort();
        prop_assert!(set.validate().is_ok());
        prop_assert_eq!(set.to_sorted_vec(), expected);
    }
}
