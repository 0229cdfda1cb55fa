use crate::error::Result;
use crate::red_black_tree::config::TreeConfig;
use crate::red_black_tree::iter::{
    Keys, PostOrderIter, PreOrderIter, RedBlackMapIntoIter, RedBlackMapIter, Values,
};
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::Tree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, no red node has a red child, and every path from the root to an empty
/// child passes through the same number of black nodes, so the height of the tree stays within
/// `2 * log2(n + 1)`.
///
/// # Examples
///
/// ```
/// use rbtree_collections::error::Error;
/// use rbtree_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1).unwrap();
/// map.insert(3, 4).unwrap();
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Ok(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.insert(0, 5), Err(Error::DuplicateKey));
/// assert_eq!(map.remove(&0), Ok((0, 2)));
/// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
/// ```
pub struct RedBlackMap<T, U> {
    tree: Tree<T, U>,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>` that rejects duplicate keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Constructs a new, empty `RedBlackMap<T, U>` that keeps one entry per insert, even when
    /// keys are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_duplicates();
    /// map.insert(1, "a").unwrap();
    /// map.insert(1, "b").unwrap();
    /// assert_eq!(map.values().collect::<Vec<_>>(), vec![&"a", &"b"]);
    /// ```
    pub fn with_duplicates() -> Self {
        Self::with_config(TreeConfig::default().allow_duplicates(true))
    }

    /// Constructs a new, empty `RedBlackMap<T, U>` with a specific configuration.
    pub fn with_config(config: TreeConfig) -> Self {
        RedBlackMap {
            tree: Tree::new(config),
        }
    }

    /// Returns the configuration the map was constructed with.
    pub fn config(&self) -> TreeConfig {
        self.tree.config()
    }

    /// Inserts a key-value pair into the map. Fails with `Error::DuplicateKey` if the key already
    /// exists and duplicates are disallowed, leaving the map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), Ok(()));
    /// assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Result<()>
    where
        T: Ord,
    {
        self.tree.insert(key, value).map(|_| ())
    }

    /// Associates a value with a key: an existing key has its value replaced and the old value is
    /// returned, a missing key is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.set(1, 1), None);
    /// assert_eq!(map.set(1, 2), Some(1));
    /// assert_eq!(map[&1], 2);
    /// ```
    pub fn set(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        match self.tree.search(&key) {
            Some(id) => Some(mem::replace(&mut self.tree.node_mut(id).value, value)),
            None => {
                self.tree
                    .insert(key, value)
                    .expect("Expected insert of a missing key to succeed.");
                None
            },
        }
    }

    /// Replaces the value associated with an existing key and returns the old value. The shape of
    /// the tree is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, "old").unwrap();
    /// assert_eq!(map.update(&1, "new"), Ok("old"));
    /// assert_eq!(map.update(&2, "new"), Err(Error::KeyNotFound));
    /// ```
    pub fn update<V>(&mut self, key: &V, value: U) -> Result<U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let id = self.tree.get(key)?;
        Ok(mem::replace(&mut self.tree.node_mut(id).value, value))
    }

    /// Removes a key-value pair from the map and returns it. Fails with `Error::KeyNotFound` if the
    /// key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.remove(&1), Ok((1, 1)));
    /// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(key)
    }

    /// Removes the entry with the minimum key. Fails with `Error::EmptyTree` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.remove_min(), Ok((1, 1)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_min(&mut self) -> Result<(T, U)> {
        let id = self.tree.min()?;
        Ok(self.tree.remove_entry(id))
    }

    /// Removes the entry with the maximum key. Fails with `Error::EmptyTree` if the map is empty.
    pub fn remove_max(&mut self) -> Result<(T, U)> {
        let id = self.tree.max()?;
        Ok(self.tree.remove_entry(id))
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.search(key).is_some()
    }

    /// Returns the value associated with a key. Fails with `Error::KeyNotFound` if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(5, "five").unwrap();
    /// assert_eq!(map.find(&5), Ok(&"five"));
    /// assert_eq!(map.find(&6), Err(Error::KeyNotFound));
    /// ```
    pub fn find<V>(&self, key: &V) -> Result<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.get(key).map(|id| &self.tree.node(id).value)
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.search(key).map(|id| &self.tree.node(id).value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let id = self.tree.search(key)?;
        Some(&mut self.tree.node_mut(id).value)
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. This walks the
    /// whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..7 {
    ///     map.insert(key, ()).unwrap();
    /// }
    /// assert!(map.height() <= 4);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the color of the root node, or `None` if the map is empty.
    pub fn root_color(&self) -> Option<Color> {
        self.tree.root_color()
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.floor(key).map(|id| &self.tree.node(id).key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.ceil(key).map(|id| &self.tree.node(id).key)
    }

    /// Returns the smallest key in the map greater than `key`. Fails with `Error::KeyNotFound` if
    /// `key` is not in the map or no greater key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::error::Error;
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(4, 4).unwrap();
    /// assert_eq!(map.successor(&1), Ok(&4));
    /// assert_eq!(map.successor(&4), Err(Error::KeyNotFound));
    /// assert_eq!(map.successor(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn successor<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.successor(key).map(|id| &self.tree.node(id).key)
    }

    /// Returns the largest key in the map less than `key`. Fails with `Error::KeyNotFound` if
    /// `key` is not in the map or no smaller key exists.
    pub fn predecessor<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.predecessor(key).map(|id| &self.tree.node(id).key)
    }

    /// Returns the minimum key of the map. Fails with `Error::EmptyTree` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.min_entry().map(|pair| pair.0)
    }

    /// Returns the maximum key of the map. Fails with `Error::EmptyTree` if the map is empty.
    pub fn max(&self) -> Result<&T> {
        self.max_entry().map(|pair| pair.0)
    }

    /// Returns the key-value pair with the minimum key.
    pub fn min_entry(&self) -> Result<(&T, &U)> {
        let node = self.tree.node(self.tree.min()?);
        Ok((&node.key, &node.value))
    }

    /// Returns the key-value pair with the maximum key.
    pub fn max_entry(&self) -> Result<(&T, &U)> {
        let node = self.tree.node(self.tree.max()?);
        Ok((&node.key, &node.value))
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter::new(&self.tree)
    }

    /// Returns an iterator over the keys of the map in ascending order.
    pub fn keys(&self) -> Keys<'_, T, U> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map, ordered by key.
    pub fn values(&self) -> Values<'_, T, U> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator that yields every node before its subtrees, starting at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 1..4 {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// let keys: Vec<&u32> = map.pre_order().map(|pair| pair.0).collect();
    /// assert_eq!(keys, vec![&2, &1, &3]);
    /// ```
    pub fn pre_order(&self) -> PreOrderIter<'_, T, U> {
        PreOrderIter::new(&self.tree)
    }

    /// Returns an iterator that yields every node after its subtrees, ending at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 1..4 {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// let keys: Vec<&u32> = map.post_order().map(|pair| pair.0).collect();
    /// assert_eq!(keys, vec![&1, &3, &2]);
    /// ```
    pub fn post_order(&self) -> PostOrderIter<'_, T, U> {
        PostOrderIter::new(&self.tree)
    }

    /// Checks the red black invariants, the parent links and the key order of the underlying
    /// tree, describing the first violation found.
    pub fn validate(&self) -> std::result::Result<(), String>
    where
        T: Ord,
    {
        self.tree.validate()
    }
}

impl<T, U> IntoIterator for RedBlackMap<T, U> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            entries: self.tree.into_sorted_entries().into_iter(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, U> Extend<(T, U)> for RedBlackMap<T, U>
where
    T: Ord,
{
    /// Entries whose key is already present replace the old value unless duplicates are allowed.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            if self.config().allow_duplicates {
                self.insert(key, value)
                    .expect("Expected insert with duplicates allowed to succeed.");
            } else {
                self.set(key, value);
            }
        }
    }
}

impl<T, U> FromIterator<(T, U)> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for RedBlackMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, T, U, V> Index<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
