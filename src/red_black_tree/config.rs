/// Construction-time settings for a red black tree.
///
/// # Examples
///
/// ```
/// use rbtree_collections::red_black_tree::{RedBlackSet, TreeConfig};
///
/// let config = TreeConfig::default().allow_duplicates(true).chunk_size(256);
/// let mut set = RedBlackSet::with_config(config);
/// set.insert(1).unwrap();
/// set.insert(1).unwrap();
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreeConfig {
    /// Whether equal keys may be stored side by side. When `false`, inserting a key that is
    /// already present fails with `Error::DuplicateKey`.
    pub allow_duplicates: bool,
    /// Number of nodes allocated together in one arena chunk.
    pub chunk_size: usize,
}

impl TreeConfig {
    pub const DEFAULT_CHUNK_SIZE: usize = 64;

    pub fn allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = allow_duplicates;
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            allow_duplicates: false,
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }
}
