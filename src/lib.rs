//! Ordered sets and maps backed by an arena-allocated red black tree.

pub mod arena;
pub mod error;
pub mod red_black_tree;

pub use crate::error::{Error, Result};
