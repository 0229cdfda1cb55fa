use crate::error::Result;
use crate::red_black_tree::config::TreeConfig;
use crate::red_black_tree::iter::{Keys, RedBlackMapIntoIter};
use crate::red_black_tree::map::RedBlackMap;
use crate::red_black_tree::node::Color;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a red black tree.
///
/// The set shares its engine with `RedBlackMap` and stores no payload next to its keys. It
/// rejects keys that are already present unless it was built to allow duplicates, in which case
/// it behaves as a sorted multiset.
///
/// # Examples
///
/// ```
/// use rbtree_collections::error::Error;
/// use rbtree_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0).unwrap();
/// set.insert(3).unwrap();
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Ok(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
/// assert_eq!(set.successor(&0), Ok(&3));
///
/// assert_eq!(set.insert(3), Err(Error::DuplicateKey));
/// assert_eq!(set.remove(&0), Ok(0));
/// assert_eq!(set.remove(&1), Err(Error::KeyNotFound));
/// ```
pub struct RedBlackSet<T> {
    map: RedBlackMap<T, ()>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>` that rejects duplicate keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }

    /// Constructs a new, empty `RedBlackSet<T>` that keeps equal keys side by side.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_duplicates();
    /// set.insert(1).unwrap();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.to_sorted_vec(), vec![1, 1]);
    /// ```
    pub fn with_duplicates() -> Self {
        RedBlackSet {
            map: RedBlackMap::with_duplicates(),
        }
    }

    /// Constructs a new, empty `RedBlackSet<T>` with a specific configuration.
    pub fn with_config(config: TreeConfig) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_config(config),
        }
    }

    /// Returns the configuration the set was constructed with.
    pub fn config(&self) -> TreeConfig {
        self.map.config()
    }

    /// Inserts a key into the set. Fails with `Error::DuplicateKey` if the key already exists
    /// and duplicates are disallowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Err(Error::DuplicateKey));
    /// ```
    pub fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        self.map.insert(key, ())
    }

    /// Removes a key from the set and returns it. Fails with `Error::KeyNotFound` if the key does
    /// not exist. With duplicates allowed, one occurrence is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.remove(&1), Ok(1));
    /// assert_eq!(set.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Removes and returns the minimum key. Fails with `Error::EmptyTree` if the set is empty.
    pub fn remove_min(&mut self) -> Result<T> {
        self.map.remove_min().map(|pair| pair.0)
    }

    /// Removes and returns the maximum key. Fails with `Error::EmptyTree` if the set is empty.
    pub fn remove_max(&mut self) -> Result<T> {
        self.map.remove_max().map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Returns the color of the root, or `None` if the set is empty.
    pub fn root_color(&self) -> Option<Color> {
        self.map.root_color()
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the next larger key after `key`. Fails with `Error::KeyNotFound` if `key` is
    /// absent or is the largest key.
    pub fn successor<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.successor(key)
    }

    /// Returns the next smaller key before `key`. Fails with `Error::KeyNotFound` if `key` is
    /// absent or is the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    /// assert_eq!(set.predecessor(&3), Ok(&1));
    /// assert_eq!(set.predecessor(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn predecessor<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.predecessor(key)
    }

    /// Returns the minimum key of the set. Fails with `Error::EmptyTree` if the set is empty.
    pub fn min(&self) -> Result<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Fails with `Error::EmptyTree` if the set is empty.
    pub fn max(&self) -> Result<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            keys: self.map.keys(),
        }
    }

    /// Returns the keys of the set in pre-order.
    pub fn pre_order(&self) -> impl Iterator<Item = &T> + '_ {
        self.map.pre_order().map(|pair| pair.0)
    }

    /// Returns the keys of the set in post-order.
    pub fn post_order(&self) -> impl Iterator<Item = &T> + '_ {
        self.map.post_order().map(|pair| pair.0)
    }

    /// Returns the keys of the set in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Checks the red black invariants of the underlying tree.
    pub fn validate(&self) -> std::result::Result<(), String>
    where
        T: Ord,
    {
        self.map.validate()
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    map_iter: RedBlackMapIntoIter<T, ()>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    keys: Keys<'a, T, ()>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    /// Keys already present are skipped unless duplicates are allowed.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
