//! Error types for collection operations.
//!
//! Every fallible operation on [`Collection`](crate::Collection) fails
//! synchronously at the call that violates its precondition. There are no
//! retries and no partial results; callers that want to avoid a failure
//! validate the precondition (non-empty, matching lengths, ...) up front.

use thiserror::Error;

/// A specialized `Result` type for collection operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The ways a collection operation can fail.
///
/// # Examples
///
/// ```
/// use flowmap::{Collection, Error};
///
/// let mut empty: Collection<usize, i32> = Collection::new();
/// assert_eq!(empty.pop(), Err(Error::EmptyCollection));
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation requires at least one element.
    ///
    /// Returned by [`pop`](crate::Collection::pop), [`first`](crate::Collection::first),
    /// [`last`](crate::Collection::last), and [`random`](crate::Collection::random)
    /// when the collection is empty.
    #[error("collection is empty")]
    EmptyCollection,

    /// No element satisfied the predicate.
    ///
    /// Returned by [`first_where`](crate::Collection::first_where) and
    /// [`last_where`](crate::Collection::last_where).
    #[error("no element satisfied the predicate")]
    NotFound,

    /// The two collections passed to [`combine`](crate::Collection::combine)
    /// have different lengths.
    #[error("length mismatch: {keys} keys cannot be combined with {values} values")]
    LengthMismatch {
        /// Number of elements in the receiver (the future keys).
        keys: usize,
        /// Number of elements in the values collection.
        values: usize,
    },

    /// [`chunk`](crate::Collection::chunk) was called with a size of zero.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    /// A [`map_spread`](crate::Collection::map_spread) element does not have
    /// exactly the arity the callback expects.
    #[error("arity mismatch: callback takes {expected} arguments but element has {actual}")]
    ArityMismatch {
        /// Arity of the callback.
        expected: usize,
        /// Length of the offending element.
        actual: usize,
    },
}

impl Error {
    /// Check if this error indicates an empty-collection precondition failure.
    #[must_use]
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Error::EmptyCollection)
    }

    /// Check if this error indicates that no element matched a predicate.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
