use thiserror::Error;

use crate::generation::Generation;

/// Errors raised by the container primitives.
///
/// Graph queries never produce these for a missing or unreachable vertex;
/// those come back as empty walks, `false` or `None`. Only direct misuse of
/// a container (popping an empty stack, indexing past the end, advancing a
/// cursor over a collection that changed underneath it) is an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Pop / dequeue / peek (or first/last) on an empty structure.
    ///
    /// Always recoverable: check `is_empty()` first.
    #[error("{operation} on an empty collection")]
    EmptyCollection {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// Index access past the current length. Indicates a caller bug.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A cursor was advanced after its collection was structurally mutated.
    #[error("cursor invalidated: taken at generation {expected}, collection now at {found}")]
    IteratorInvalidated {
        expected: Generation,
        found: Generation,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn empty(operation: &'static str) -> Self {
        Error::EmptyCollection { operation }
    }
}
