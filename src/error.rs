use std::result;
use thiserror::Error;

/// Failures reported by the collections in this crate.
///
/// Every failure leaves the collection unchanged.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// An insert found an equal key while duplicate keys are disallowed.
    #[error("key already exists")]
    DuplicateKey,
    /// The requested key, or the neighbour of a key, does not exist.
    #[error("key does not exist")]
    KeyNotFound,
    /// The operation needs at least one element.
    #[error("tree is empty")]
    EmptyTree,
}

pub type Result<T> = result::Result<T, Error>;
