use crate::arena::Entry;
use crate::red_black_tree::tree::Tree;
use std::iter::FusedIterator;
use std::vec;

/// An iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references. It
/// can also be driven from the back to visit the elements in descending order.
pub struct RedBlackMapIter<'a, T, U> {
    tree: &'a Tree<T, U>,
    front: Option<Entry>,
    back: Option<Entry>,
    remaining: usize,
}

impl<'a, T, U> RedBlackMapIter<'a, T, U> {
    pub(crate) fn new(tree: &'a Tree<T, U>) -> Self {
        RedBlackMapIter {
            tree,
            front: tree.first(),
            back: tree.last(),
            remaining: tree.len(),
        }
    }

    fn pair(&self, id: Entry) -> (&'a T, &'a U) {
        let node = self.tree.node(id);
        (&node.key, &node.value)
    }
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.next(id);
        Some(self.pair(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> DoubleEndedIterator for RedBlackMapIter<'a, T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.prev(id);
        Some(self.pair(id))
    }
}

impl<'a, T, U> ExactSizeIterator for RedBlackMapIter<'a, T, U> {}

impl<'a, T, U> FusedIterator for RedBlackMapIter<'a, T, U> {}

/// A pre-order iterator for `RedBlackMap<T, U>`.
///
/// Each node is yielded before the nodes of its left subtree, which come before the nodes of its
/// right subtree.
pub struct PreOrderIter<'a, T, U> {
    tree: &'a Tree<T, U>,
    current: Option<Entry>,
}

impl<'a, T, U> PreOrderIter<'a, T, U> {
    pub(crate) fn new(tree: &'a Tree<T, U>) -> Self {
        PreOrderIter {
            tree,
            current: tree.root(),
        }
    }
}

impl<'a, T, U> Iterator for PreOrderIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.pre_order_next(id);
        let node = self.tree.node(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, T, U> FusedIterator for PreOrderIter<'a, T, U> {}

/// A post-order iterator for `RedBlackMap<T, U>`.
///
/// Each node is yielded after both of its subtrees, so the root comes last.
pub struct PostOrderIter<'a, T, U> {
    tree: &'a Tree<T, U>,
    current: Option<Entry>,
}

impl<'a, T, U> PostOrderIter<'a, T, U> {
    pub(crate) fn new(tree: &'a Tree<T, U>) -> Self {
        PostOrderIter {
            tree,
            current: tree.root().map(|root| tree.post_order_first(root)),
        }
    }
}

impl<'a, T, U> Iterator for PostOrderIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.post_order_next(id);
        let node = self.tree.node(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, T, U> FusedIterator for PostOrderIter<'a, T, U> {}

/// An iterator over the keys of a `RedBlackMap<T, U>` in ascending order.
pub struct Keys<'a, T, U> {
    pub(crate) inner: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Iterator for Keys<'a, T, U> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, U> DoubleEndedIterator for Keys<'a, T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| pair.0)
    }
}

impl<'a, T, U> ExactSizeIterator for Keys<'a, T, U> {}

/// An iterator over the values of a `RedBlackMap<T, U>`, ordered by key.
pub struct Values<'a, T, U> {
    pub(crate) inner: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Iterator for Values<'a, T, U> {
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| pair.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, U> DoubleEndedIterator for Values<'a, T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| pair.1)
    }
}

impl<'a, T, U> ExactSizeIterator for Values<'a, T, U> {}

/// An owning iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    pub(crate) entries: vec::IntoIter<(T, U)>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T, U> DoubleEndedIterator for RedBlackMapIntoIter<T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<T, U> ExactSizeIterator for RedBlackMapIntoIter<T, U> {}
