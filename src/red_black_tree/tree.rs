use crate::arena::{Entry, TypedArena};
use crate::error::{Error, Result};
use crate::red_black_tree::config::TreeConfig;
use crate::red_black_tree::node::{Color, Node};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The red black tree engine shared by `RedBlackMap` and `RedBlackSet`.
///
/// Nodes live in a `TypedArena` and link to each other through arena handles, so the parent
/// back-reference of a node carries no ownership.
pub struct Tree<T, U> {
    arena: TypedArena<Node<T, U>>,
    root: Option<Entry>,
    len: usize,
    config: TreeConfig,
}

impl<T, U> Tree<T, U> {
    pub fn new(config: TreeConfig) -> Self {
        Tree {
            arena: TypedArena::new(config.chunk_size),
            root: None,
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn root(&self) -> Option<Entry> {
        self.root
    }

    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|root| self.arena[root].color)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn node(&self, id: Entry) -> &Node<T, U> {
        &self.arena[id]
    }

    pub fn node_mut(&mut self, id: Entry) -> &mut Node<T, U> {
        &mut self.arena[id]
    }

    pub fn parent(&self, id: Entry) -> Option<Entry> {
        self.arena[id].parent
    }

    fn child(&self, id: Entry, side: Side) -> Option<Entry> {
        match side {
            Side::Left => self.arena[id].left,
            Side::Right => self.arena[id].right,
        }
    }

    fn side_of(&self, id: Entry) -> Option<Side> {
        self.parent(id).map(|parent| {
            if self.arena[parent].left == Some(id) {
                Side::Left
            } else {
                Side::Right
            }
        })
    }

    pub fn is_left_child(&self, id: Entry) -> bool {
        self.side_of(id) == Some(Side::Left)
    }

    pub fn is_right_child(&self, id: Entry) -> bool {
        self.side_of(id) == Some(Side::Right)
    }

    /// Returns the other child of a node's parent.
    pub fn sibling(&self, id: Entry) -> Option<Entry> {
        let side = self.side_of(id)?;
        let parent = self.parent(id)?;
        self.child(parent, side.opposite())
    }

    pub fn grandparent(&self, id: Entry) -> Option<Entry> {
        self.parent(id).and_then(|parent| self.parent(parent))
    }

    /// Returns the node if it exists and is red. Absent nodes count as black.
    fn red(&self, id: Option<Entry>) -> Option<Entry> {
        id.filter(|&id| self.arena[id].is_red())
    }

    fn is_red(&self, id: Option<Entry>) -> bool {
        self.red(id).is_some()
    }

    fn set_color(&mut self, id: Entry, color: Color) {
        self.arena[id].color = color;
    }

    // Points the slot of `parent` that holds `old` (or the root) at `new`.
    fn replace_child(&mut self, parent: Option<Entry>, old: Entry, new: Option<Entry>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    /// Promotes the right child of `x` into the position of `x`.
    pub fn rotate_left(&mut self, x: Entry) {
        trace!("rotating left");
        let y = self.arena[x]
            .right
            .expect("Expected right child node to be `Some`.");
        let inner = self.arena[y].left;
        self.arena[x].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        self.arena[y].left = Some(x);
        self.arena[x].parent = Some(y);
    }

    /// Promotes the left child of `x` into the position of `x`.
    pub fn rotate_right(&mut self, x: Entry) {
        trace!("rotating right");
        let y = self.arena[x]
            .left
            .expect("Expected left child node to be `Some`.");
        let inner = self.arena[y].right;
        self.arena[x].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        self.arena[y].right = Some(x);
        self.arena[x].parent = Some(y);
    }

    // Moves `x` down towards `side`.
    fn rotate(&mut self, x: Entry, side: Side) {
        match side {
            Side::Left => self.rotate_left(x),
            Side::Right => self.rotate_right(x),
        }
    }

    pub fn leftmost(&self, mut id: Entry) -> Entry {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    pub fn rightmost(&self, mut id: Entry) -> Entry {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    pub fn first(&self) -> Option<Entry> {
        self.root.map(|root| self.leftmost(root))
    }

    pub fn last(&self) -> Option<Entry> {
        self.root.map(|root| self.rightmost(root))
    }

    pub fn min(&self) -> Result<Entry> {
        self.first().ok_or_else(|| {
            debug!("min of an empty tree");
            Error::EmptyTree
        })
    }

    pub fn max(&self) -> Result<Entry> {
        self.last().ok_or_else(|| {
            debug!("max of an empty tree");
            Error::EmptyTree
        })
    }

    /// Returns the node that follows `id` in in-order traversal.
    pub fn next(&self, id: Entry) -> Option<Entry> {
        if let Some(right) = self.arena[id].right {
            return Some(self.leftmost(right));
        }
        let mut curr = id;
        while self.is_right_child(curr) {
            curr = self.parent(curr)?;
        }
        self.parent(curr)
    }

    /// Returns the node that precedes `id` in in-order traversal.
    pub fn prev(&self, id: Entry) -> Option<Entry> {
        if let Some(left) = self.arena[id].left {
            return Some(self.rightmost(left));
        }
        let mut curr = id;
        while self.is_left_child(curr) {
            curr = self.parent(curr)?;
        }
        self.parent(curr)
    }

    /// Returns the node that follows `id` in pre-order traversal.
    pub fn pre_order_next(&self, id: Entry) -> Option<Entry> {
        let node = &self.arena[id];
        if let Some(child) = node.left.or(node.right) {
            return Some(child);
        }
        let mut curr = id;
        while let Some(parent) = self.parent(curr) {
            let parent_node = &self.arena[parent];
            if parent_node.left == Some(curr) && parent_node.has_right() {
                return parent_node.right;
            }
            curr = parent;
        }
        None
    }

    /// Returns the first node of the subtree rooted at `id` in post-order traversal.
    pub fn post_order_first(&self, mut id: Entry) -> Entry {
        loop {
            let node = &self.arena[id];
            match node.left.or(node.right) {
                Some(child) => id = child,
                None => return id,
            }
        }
    }

    /// Returns the node that follows `id` in post-order traversal.
    pub fn post_order_next(&self, id: Entry) -> Option<Entry> {
        let parent = self.parent(id)?;
        match self.arena[parent].right {
            Some(right) if self.arena[parent].left == Some(id) => {
                Some(self.post_order_first(right))
            },
            _ => Some(parent),
        }
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        fn height<T, U>(tree: &Tree<T, U>, id: Option<Entry>) -> usize {
            match id {
                None => 0,
                Some(id) => {
                    let node = tree.node(id);
                    1 + height(tree, node.left).max(height(tree, node.right))
                },
            }
        }
        height(self, self.root)
    }

    pub fn search<V>(&self, key: &V) -> Option<Entry>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn floor<V>(&self, key: &V) -> Option<Entry>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    ret = Some(id);
                    node.right
                },
                Ordering::Equal => return Some(id),
            };
        }
        ret
    }

    pub fn ceil<V>(&self, key: &V) -> Option<Entry>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    ret = Some(id);
                    node.left
                },
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        ret
    }

    pub fn get<V>(&self, key: &V) -> Result<Entry>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.search(key).ok_or_else(|| {
            debug!("lookup of a missing key");
            Error::KeyNotFound
        })
    }

    /// Returns the node holding the smallest key strictly greater than `key`. Fails if `key` is
    /// not in the tree or is the largest key.
    pub fn successor<V>(&self, key: &V) -> Result<Entry>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.get(key)?;
        loop {
            curr = self.next(curr).ok_or(Error::KeyNotFound)?;
            if key.cmp(self.arena[curr].key.borrow()) != Ordering::Equal {
                return Ok(curr);
            }
        }
    }

    /// Returns the node holding the largest key strictly less than `key`. Fails if `key` is not
    /// in the tree or is the smallest key.
    pub fn predecessor<V>(&self, key: &V) -> Result<Entry>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.get(key)?;
        loop {
            curr = self.prev(curr).ok_or(Error::KeyNotFound)?;
            if key.cmp(self.arena[curr].key.borrow()) != Ordering::Equal {
                return Ok(curr);
            }
        }
    }

    /// Inserts a new node and rebalances. Equal keys descend to the right when duplicates are
    /// allowed, otherwise the first equal key on the path rejects the insert.
    pub fn insert(&mut self, key: T, value: U) -> Result<Entry>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            let ordering = key.cmp(&node.key);
            if ordering == Ordering::Equal && !self.config.allow_duplicates {
                debug!("rejected insert of a duplicate key");
                return Err(Error::DuplicateKey);
            }
            parent = Some(id);
            side = if ordering == Ordering::Less {
                Side::Left
            } else {
                Side::Right
            };
            curr = self.child(id, side);
        }

        let mut new_node = Node::new(key, value);
        new_node.parent = parent;
        let id = self.arena.allocate(new_node);
        match (parent, side) {
            (None, _) => self.root = Some(id),
            (Some(parent), Side::Left) => self.arena[parent].left = Some(id),
            (Some(parent), Side::Right) => self.arena[parent].right = Some(id),
        }
        self.len += 1;

        self.insert_fixup(id);
        Ok(id)
    }

    fn insert_fixup(&mut self, mut n: Entry) {
        while let Some(mut parent) = self.red(self.parent(n)) {
            let grandparent = self
                .grandparent(n)
                .expect("Expected a red node to have a parent.");
            let side = self
                .side_of(parent)
                .expect("Expected a red node to have a parent.");

            if let Some(uncle) = self.red(self.child(grandparent, side.opposite())) {
                trace!("insert fixup: red uncle");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                n = grandparent;
                continue;
            }

            if self.child(parent, side.opposite()) == Some(n) {
                trace!("insert fixup: inner grandchild");
                self.rotate(parent, side);
                n = parent;
                parent = self.parent(n).expect("Expected rotated node to have a parent.");
            }

            trace!("insert fixup: outer grandchild");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    pub fn remove<V>(&mut self, key: &V) -> Result<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let id = self.search(key).ok_or_else(|| {
            debug!("remove of a missing key");
            Error::KeyNotFound
        })?;
        Ok(self.remove_entry(id))
    }

    /// Unlinks the node `x` and returns its key and value. A node with two children trades its
    /// payload with its in-order successor, which is the node that is physically spliced out.
    pub fn remove_entry(&mut self, x: Entry) -> (T, U) {
        let target = match self.arena[x].right {
            Some(right) if self.arena[x].children_count() == 2 => self.leftmost(right),
            _ => x,
        };

        match self.arena[target].single_child() {
            Some(child) => {
                trace!("splicing out a node with one child");
                let parent = self.parent(target);
                self.arena[child].parent = parent;
                self.replace_child(parent, target, Some(child));
                if self.arena[target].is_black() {
                    self.delete_fixup(child);
                }
            },
            None => {
                trace!("splicing out a leaf");
                // the leaf stands in for the empty position until the fixup is done
                if self.arena[target].is_black() {
                    self.delete_fixup(target);
                }
                let parent = self.parent(target);
                self.replace_child(parent, target, None);
            },
        }

        self.len -= 1;
        let mut removed = self.arena.free(&target);
        if target != x {
            let node = &mut self.arena[x];
            mem::swap(&mut node.key, &mut removed.key);
            mem::swap(&mut node.value, &mut removed.value);
        }
        (removed.key, removed.value)
    }

    fn delete_fixup(&mut self, mut n: Entry) {
        while Some(n) != self.root && self.arena[n].is_black() {
            let parent = self
                .parent(n)
                .expect("Expected a non-root node to have a parent.");
            let side = self
                .side_of(n)
                .expect("Expected a non-root node to have a parent.");
            let far = side.opposite();

            let mut sibling = self
                .sibling(n)
                .expect("Expected a doubly black node to have a sibling.");
            if self.arena[sibling].is_red() {
                trace!("delete fixup: red sibling");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self
                    .child(parent, far)
                    .expect("Expected a doubly black node to have a sibling.");
            }

            if !self.is_red(self.child(sibling, side)) && !self.is_red(self.child(sibling, far)) {
                trace!("delete fixup: black nephews");
                self.set_color(sibling, Color::Red);
                n = parent;
                continue;
            }

            if !self.is_red(self.child(sibling, far)) {
                trace!("delete fixup: red near nephew");
                let near = self
                    .child(sibling, side)
                    .expect("Expected a red near nephew.");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self
                    .child(parent, far)
                    .expect("Expected a doubly black node to have a sibling.");
            }

            trace!("delete fixup: red far nephew");
            let parent_color = self.arena[parent].color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far_nephew) = self.child(sibling, far) {
                self.set_color(far_nephew, Color::Black);
            }
            self.rotate(parent, side);
            n = self.root.expect("Expected a non-empty tree.");
        }

        self.set_color(n, Color::Black);
    }

    /// Removes and returns the entries of the tree in in-order sequence.
    pub fn into_sorted_entries(mut self) -> Vec<(T, U)> {
        let mut ids = Vec::with_capacity(self.len);
        let mut curr = self.first();
        while let Some(id) = curr {
            ids.push(id);
            curr = self.next(id);
        }
        ids.into_iter()
            .map(|id| {
                let Node { key, value, .. } = self.arena.free(&id);
                (key, value)
            })
            .collect()
    }

    /// Checks every red black invariant and the consistency of parent links.
    pub fn validate(&self) -> std::result::Result<(), String>
    where
        T: Ord,
    {
        fn black_height<T, U>(
            tree: &Tree<T, U>,
            id: Option<Entry>,
            count: &mut usize,
        ) -> std::result::Result<usize, String> {
            let id = match id {
                None => return Ok(1),
                Some(id) => id,
            };
            *count += 1;
            let node = tree.node(id);
            for child in node.left.iter().chain(node.right.iter()) {
                if tree.parent(*child) != Some(id) {
                    return Err("Broken parent link".to_string());
                }
                if node.is_red() && tree.node(*child).is_red() {
                    return Err("Red node has red child".to_string());
                }
            }
            let left_height = black_height(tree, node.left, count)?;
            let right_height = black_height(tree, node.right, count)?;
            if left_height != right_height {
                return Err("Black height mismatch".to_string());
            }
            Ok(left_height + if node.is_black() { 1 } else { 0 })
        }

        if let Some(root) = self.root {
            if self.parent(root).is_some() {
                return Err("Root has parent".to_string());
            }
            if self.arena[root].is_red() {
                return Err("Root is not black".to_string());
            }
        }

        let mut count = 0;
        black_height(self, self.root, &mut count)?;
        if count != self.len || count != self.arena.len() {
            return Err(format!(
                "Node count mismatch: {} reachable, {} recorded, {} allocated",
                count,
                self.len,
                self.arena.len(),
            ));
        }

        let mut curr = self.first();
        while let Some(id) = curr {
            curr = self.next(id);
            if let Some(next) = curr {
                if self.arena[id].key > self.arena[next].key {
                    return Err("Node order violated".to_string());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;
    use crate::error::Error;
    use crate::red_black_tree::config::TreeConfig;
    use crate::red_black_tree::node::Color;

    fn tree_of(keys: &[u32]) -> Tree<u32, ()> {
        let mut tree = Tree::new(TreeConfig::default());
        for key in keys {
            tree.insert(*key, ()).unwrap();
            tree.validate().unwrap();
        }
        tree
    }

    fn in_order(tree: &Tree<u32, ()>) -> Vec<u32> {
        let mut ret = Vec::new();
        let mut curr = tree.first();
        while let Some(id) = curr {
            ret.push(tree.node(id).key);
            curr = tree.next(id);
        }
        ret
    }

    #[test]
    fn test_insert_into_empty() {
        let tree = tree_of(&[1]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_color(), Some(Color::Black));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_rotate_left_preserves_order() {
        let mut tree = tree_of(&[2, 1, 4, 3, 5]);
        let root = tree.root().unwrap();
        tree.rotate_left(root);

        let new_root = tree.root().unwrap();
        assert_eq!(tree.node(new_root).key, 4);
        assert_eq!(tree.parent(root), Some(new_root));
        assert!(tree.is_left_child(root));
        assert_eq!(in_order(&tree), vec![1, 2, 3, 4, 5]);

        let three = tree.search(&3).unwrap();
        assert_eq!(tree.parent(three), Some(root));
        assert!(tree.is_right_child(three));
    }

    #[test]
    fn test_rotate_right_preserves_order() {
        let mut tree = tree_of(&[4, 2, 5, 1, 3]);
        let root = tree.root().unwrap();
        tree.rotate_right(root);

        assert_eq!(tree.node(tree.root().unwrap()).key, 2);
        assert!(tree.is_right_child(root));
        assert_eq!(in_order(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_family_queries() {
        let tree = tree_of(&[2, 1, 3, 4]);
        let root = tree.root().unwrap();
        let one = tree.search(&1).unwrap();
        let three = tree.search(&3).unwrap();
        let four = tree.search(&4).unwrap();

        assert_eq!(tree.sibling(one), Some(three));
        assert_eq!(tree.sibling(three), Some(one));
        assert_eq!(tree.sibling(root), None);
        assert_eq!(tree.grandparent(four), Some(root));
        assert_eq!(tree.grandparent(one), None);
        assert!(!tree.is_left_child(root));
        assert!(!tree.is_right_child(root));
    }

    #[test]
    fn test_insert_fixup_recolors() {
        // 3 has two red children, inserting 4 pushes the red up to the root
        let tree = tree_of(&[3, 2, 5, 4]);
        let two = tree.search(&2).unwrap();
        let five = tree.search(&5).unwrap();
        let four = tree.search(&4).unwrap();
        assert_eq!(tree.node(two).color, Color::Black);
        assert_eq!(tree.node(five).color, Color::Black);
        assert_eq!(tree.node(four).color, Color::Red);
    }

    #[test]
    fn test_insert_fixup_inner_grandchild() {
        let tree = tree_of(&[3, 1, 2]);
        assert_eq!(tree.node(tree.root().unwrap()).key, 2);
        assert_eq!(in_order(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_rejected_anywhere_on_path() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        for key in 1..8 {
            assert_eq!(tree.insert(key, ()), Err(Error::DuplicateKey));
        }
        assert_eq!(tree.len(), 7);
        tree.validate().unwrap();
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut tree = Tree::new(TreeConfig::default().allow_duplicates(true));
        for key in &[2, 1, 2, 2, 3, 1] {
            tree.insert(*key, ()).unwrap();
            tree.validate().unwrap();
        }
        assert_eq!(in_order(&tree), vec![1, 1, 2, 2, 2, 3]);
        assert_eq!(tree.node(tree.successor(&1).unwrap()).key, 2);
        assert_eq!(tree.node(tree.predecessor(&3).unwrap()).key, 2);
        assert_eq!(tree.remove(&2), Ok((2, ())));
        assert_eq!(in_order(&tree), vec![1, 1, 2, 2, 3]);
        tree.validate().unwrap();
    }

    #[test]
    fn test_remove_two_children_moves_successor_payload() {
        let mut tree: Tree<u32, &str> = Tree::new(TreeConfig::default());
        for (key, value) in &[(2, "b"), (1, "a"), (3, "c")] {
            tree.insert(*key, *value).unwrap();
        }
        let root = tree.root().unwrap();
        assert_eq!(tree.remove(&2), Ok((2, "b")));
        assert_eq!(tree.node(root).key, 3);
        assert_eq!(tree.node(root).value, "c");
        tree.validate().unwrap();
    }

    #[test]
    fn test_remove_all_cases() {
        let keys: Vec<u32> = (0..64).map(|i| (i * 37) % 64).collect();
        let mut tree = tree_of(&keys);
        for key in (0..64).rev().step_by(3) {
            assert_eq!(tree.remove(&key), Ok((key, ())));
            tree.validate().unwrap();
        }
        for key in 0..64 {
            let _ = tree.remove(&key);
            tree.validate().unwrap();
        }
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = tree_of(&[1, 2, 3]);
        assert_eq!(tree.remove(&4), Err(Error::KeyNotFound));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_neighbours() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(tree.node(tree.successor(&10).unwrap()).key, 20);
        assert_eq!(tree.successor(&30), Err(Error::KeyNotFound));
        assert_eq!(tree.successor(&15), Err(Error::KeyNotFound));
        assert_eq!(tree.node(tree.predecessor(&30).unwrap()).key, 20);
        assert_eq!(tree.predecessor(&10), Err(Error::KeyNotFound));

        assert_eq!(tree.floor(&5), None);
        assert_eq!(tree.node(tree.floor(&25).unwrap()).key, 20);
        assert_eq!(tree.node(tree.ceil(&25).unwrap()).key, 30);
        assert_eq!(tree.ceil(&35), None);
    }

    #[test]
    fn test_traversal_orders() {
        let tree = tree_of(&[2, 1, 4, 3, 5]);
        // shape: 2(1, 4(3, 5))
        let mut pre = Vec::new();
        let mut curr = tree.root();
        while let Some(id) = curr {
            pre.push(tree.node(id).key);
            curr = tree.pre_order_next(id);
        }
        assert_eq!(pre, vec![2, 1, 4, 3, 5]);

        let mut post = Vec::new();
        let mut curr = tree.root().map(|root| tree.post_order_first(root));
        while let Some(id) = curr {
            post.push(tree.node(id).key);
            curr = tree.post_order_next(id);
        }
        assert_eq!(post, vec![1, 3, 5, 4, 2]);
    }

    #[test]
    fn test_min_max_empty() {
        let tree: Tree<u32, ()> = Tree::new(TreeConfig::default());
        assert_eq!(tree.min(), Err(Error::EmptyTree));
        assert_eq!(tree.max(), Err(Error::EmptyTree));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root_color(), None);
    }

    #[test]
    fn test_into_sorted_entries() {
        let tree = tree_of(&[5, 3, 8, 1]);
        assert_eq!(
            tree.into_sorted_entries(),
            vec![(1, ()), (3, ()), (5, ()), (8, ())],
        );
    }
}
