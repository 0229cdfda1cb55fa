use rand::Rng;
use rbtree_collections::red_black_tree::{Color, RedBlackMap, RedBlackSet, TreeConfig};
use rbtree_collections::Error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 20_000;

fn init_logging() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn height_bound(len: usize) -> f64 {
    2.0 * ((len + 1) as f64).log2()
}

fn scenario_set() -> RedBlackSet<u32> {
    let mut set = RedBlackSet::new();
    for key in &[4, 5, 7, 2, 1, 3, 6, 0, 8, 10, 9] {
        set.insert(*key).unwrap();
        set.validate().unwrap();
    }
    set
}

#[test]
fn test_ascending_inserts_stay_shallow() {
    init_logging();
    let mut set = RedBlackSet::new();
    for key in 1..=10 {
        set.insert(key).unwrap();
    }
    assert_eq!(set.len(), 10);
    assert!(set.height() < set.len());
    assert!(set.height() as f64 <= height_bound(set.len()));
    set.validate().unwrap();
}

#[test]
fn test_scenario_insert_and_query() {
    let mut set = scenario_set();
    assert_eq!(set.len(), 11);
    assert!(set.contains(&5));
    assert_eq!(set.min(), Ok(&0));
    assert_eq!(set.max(), Ok(&10));
    assert_eq!(set.insert(2), Err(Error::DuplicateKey));
    assert_eq!(set.len(), 11);
    set.validate().unwrap();
}

#[test]
fn test_scenario_remove() {
    let mut set = scenario_set();
    for key in &[7, 1, 3] {
        assert_eq!(set.remove(key), Ok(*key));
        set.validate().unwrap();
    }
    assert_eq!(set.len(), 8);
    assert!(!set.contains(&1));
    assert!(!set.contains(&3));
    assert_eq!(set.to_sorted_vec(), vec![0, 2, 4, 5, 6, 8, 9, 10]);
}

#[test]
fn test_scenario_remove_root() {
    let mut set = scenario_set();
    for key in &[7, 1, 3] {
        set.remove(key).unwrap();
    }

    let root = *set.pre_order().next().unwrap();
    assert_eq!(set.remove(&root), Ok(root));
    assert_eq!(set.len(), 7);
    assert!(!set.contains(&root));
    set.validate().unwrap();
}

#[test]
fn test_scenario_map_update() {
    let mut map = RedBlackMap::new();
    for key in 1..=10 {
        map.insert(key, format!("label {}", key)).unwrap();
    }
    assert_eq!(map.find(&5).map(String::as_str), Ok("label 5"));

    assert_eq!(map.update(&5, String::from("new")), Ok(String::from("label 5")));
    assert_eq!(map.find(&5).map(String::as_str), Ok("new"));
    assert_eq!(map.len(), 10);
    map.validate().unwrap();
}

#[test]
fn test_round_trip_to_empty() {
    let mut set: RedBlackSet<u32> = (0..500).collect();
    let evens = (0..500).filter(|key| key % 2 == 0);
    let odds = (0..500).filter(|key| key % 2 == 1);
    for key in evens.chain(odds) {
        assert_eq!(set.remove(&key), Ok(key));
        set.validate().unwrap();
    }
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.height(), 0);
    assert_eq!(set.min(), Err(Error::EmptyTree));
    assert_eq!(set.iter().next(), None);
}

#[test]
fn test_root_stays_black() {
    let mut map = RedBlackMap::new();
    assert_eq!(map.root_color(), None);
    for key in 0..100 {
        map.insert(key, key).unwrap();
        assert_eq!(map.root_color(), Some(Color::Black));
    }
    for key in 0..99 {
        map.remove(&key).unwrap();
        assert_eq!(map.root_color(), Some(Color::Black));
    }
}

#[test]
fn test_get_or_set() {
    let mut map = RedBlackMap::new();
    assert_eq!(map.set("a", 1), None);
    assert_eq!(map.set("a", 2), Some(1));
    map[&"a"] += 1;
    assert_eq!(map[&"a"], 3);
    assert_eq!(map.find(&"b"), Err(Error::KeyNotFound));
}

#[test]
fn int_test_red_black_map() {
    init_logging();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::with_config(TreeConfig::default().chunk_size(16));
    let mut expected = BTreeMap::new();

    for i in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1000);
        let value = rng.gen::<u32>();

        match rng.gen_range(0, 4) {
            0 | 1 => {
                if expected.contains_key(&key) {
                    assert_eq!(map.insert(key, value), Err(Error::DuplicateKey));
                } else {
                    assert_eq!(map.insert(key, value), Ok(()));
                    expected.insert(key, value);
                }
            },
            2 => {
                let actual = map.remove(&key).ok();
                assert_eq!(actual, expected.remove(&key).map(|value| (key, value)));
            },
            _ => {
                let actual = map.update(&key, value).ok();
                let old = expected.get_mut(&key).map(|old| std::mem::replace(old, value));
                assert_eq!(actual, old);
            },
        }

        assert_eq!(map.len(), expected.len());
        if i % 64 == 0 {
            map.validate().unwrap();
            assert!(map.height() as f64 <= height_bound(map.len()));
        }
    }

    map.validate().unwrap();
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );

    for key in 0..1000 {
        let present = expected.contains_key(&key);
        let next = expected.range(key + 1..).next().map(|pair| pair.0);
        let prev = expected.range(..key).next_back().map(|pair| pair.0);

        assert_eq!(map.successor(&key).ok(), next.filter(|_| present));
        assert_eq!(map.predecessor(&key).ok(), prev.filter(|_| present));
        assert_eq!(map.floor(&key), expected.range(..=key).next_back().map(|pair| pair.0));
        assert_eq!(map.ceil(&key), expected.range(key..).next().map(|pair| pair.0));
    }
}

#[test]
fn int_test_red_black_multiset() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::with_duplicates();
    let mut expected: Vec<u32> = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS / 4 {
        let key = rng.gen_range(0, 50);
        if rng.gen::<bool>() {
            set.insert(key).unwrap();
            let index = expected.iter().position(|other| *other > key).unwrap_or(expected.len());
            expected.insert(index, key);
        } else {
            match expected.iter().position(|other| *other == key) {
                Some(index) => {
                    expected.remove(index);
                    assert_eq!(set.remove(&key), Ok(key));
                },
                None => assert_eq!(set.remove(&key), Err(Error::KeyNotFound)),
            }
        }
        set.validate().unwrap();
    }

    assert_eq!(set.to_sorted_vec(), expected);
    assert_eq!(set.into_iter().collect::<Vec<u32>>(), expected);
}

#[test]
fn int_test_traversals() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    for _ in 0..1000 {
        map.set(rng.next_u32(), ());
    }

    let pre: Vec<&u32> = map.pre_order().map(|pair| pair.0).collect();
    let post: Vec<&u32> = map.post_order().map(|pair| pair.0).collect();
    let mut in_order: Vec<&u32> = map.keys().collect();

    assert_eq!(pre.len(), map.len());
    assert_eq!(post.len(), map.len());
    assert_eq!(pre.first(), post.last());

    let mut sorted_pre = pre.clone();
    sorted_pre.sort();
    assert_eq!(sorted_pre, in_order);

    let mut sorted_post = post.clone();
    sorted_post.sort();
    assert_eq!(sorted_post, in_order);

    in_order.reverse();
    assert_eq!(map.keys().rev().collect::<Vec<&u32>>(), in_order);
}
