//! Errors raised by the storage, capacity and sequence layers.
//!
//! Every check runs before the buffer is touched, so an `Err` always means
//! the storage is still in its last valid state.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Bounds passed to `initialize` or a resize do not fit the buffer.
    #[error("invalid storage layout: capacity {capacity}, first item {first}, last item {last}")]
    CapacityValidation {
        capacity: usize,
        first: usize,
        last: usize,
    },

    /// The items handed to `initialize` do not match the declared bounds.
    #[error("expected {expected} items, got {actual}")]
    ItemCountMismatch { expected: usize, actual: usize },

    /// A range descriptor whose first index comes after its last.
    #[error("invalid index range [{first}, {last}]")]
    InvalidRange { first: usize, last: usize },

    /// Shifting a range by `by` would leave the addressable index space.
    #[error("cannot shift range starting at {first} by {by}")]
    InvalidShift { first: usize, by: usize },

    /// A range reaches past the end of the buffer it addresses.
    #[error("index range [{first}, {last}] exceeds capacity {capacity}")]
    RangeOutOfCapacity {
        first: usize,
        last: usize,
        capacity: usize,
    },

    /// Two range operations of a single reallocation touch the same slot.
    #[error("index range [{first}, {last}] overlaps another range of the same reallocation")]
    OverlappingRanges { first: usize, last: usize },

    /// A single slot write beyond the end of the buffer.
    #[error("storage index {index} exceeds capacity {capacity}")]
    SlotOutOfCapacity { index: usize, capacity: usize },

    /// A logical index outside the sequence. `last` is `None` when empty.
    #[error("index {index} out of range (first {first}, last {last:?})")]
    IndexOutOfRange {
        index: usize,
        first: usize,
        last: Option<usize>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
