use crate::arena::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// Links are arena handles. `left` and `right` name the children the node owns, `parent` is a
/// plain back-reference and is `None` only for the root.
pub struct Node<T, U> {
    pub key: T,
    pub value: U,
    pub color: Color,
    pub left: Option<Entry>,
    pub right: Option<Entry>,
    pub parent: Option<Entry>,
}

impl<T, U> Node<T, U> {
    /// New nodes are red and detached.
    pub fn new(key: T, value: U) -> Self {
        Node {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn children_count(&self) -> usize {
        self.has_left() as usize + self.has_right() as usize
    }

    /// Returns the only child of a node with at most one child.
    pub fn single_child(&self) -> Option<Entry> {
        self.left.or(self.right)
    }
}
