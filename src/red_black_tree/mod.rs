//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes are kept in a `TypedArena` and carry a parent link, so rebalancing after an insert or a
//! remove walks upwards from the touched node with local rotations and recolors.

mod config;
mod iter;
mod map;
mod node;
mod set;
mod tree;

pub use self::config::TreeConfig;
pub use self::iter::{
    Keys, PostOrderIter, PreOrderIter, RedBlackMapIntoIter, RedBlackMapIter, Values,
};
pub use self::map::RedBlackMap;
pub use self::node::Color;
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
