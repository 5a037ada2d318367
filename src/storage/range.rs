//! Range operation descriptors.
//!
//! An operation says "take the elements at storage indices
//! `[source_first, source_last]` and put them so the first one lands on
//! `destination_first`". It carries no behavior of its own; the storage
//! interprets it either in place (`shift_items`) or while copying into a
//! freshly allocated buffer (`add_capacity_and_shift_items`).

use crate::error::Error;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRangeOperation {
    source_first_index: usize,
    source_last_index: usize,
    destination_first_index: usize,
}

impl IndexRangeOperation {
    /// Describe a move of `[source_first, source_last]` to `destination_first`.
    pub fn new(
        source_first_index: usize,
        source_last_index: usize,
        destination_first_index: usize,
    ) -> Result<IndexRangeOperation> {
        if source_first_index > source_last_index {
            return Err(Error::InvalidRange {
                first: source_first_index,
                last: source_last_index,
            });
        }
        let length = source_last_index - source_first_index;
        if destination_first_index.checked_add(length).is_none() {
            return Err(Error::InvalidShift {
                first: source_first_index,
                by: destination_first_index.abs_diff(source_first_index),
            });
        }
        return Ok(IndexRangeOperation {
            source_first_index,
            source_last_index,
            destination_first_index,
        });
    }

    /// Keep `[first, last]` at the same indices (used when reallocating).
    pub fn copy(first: usize, last: usize) -> Result<IndexRangeOperation> {
        return IndexRangeOperation::new(first, last, first);
    }

    /// Move `[first, last]` towards the tail by `by` slots.
    pub fn shift_right(first: usize, last: usize, by: usize) -> Result<IndexRangeOperation> {
        let destination = first
            .checked_add(by)
            .ok_or(Error::InvalidShift { first, by })?;
        return IndexRangeOperation::new(first, last, destination);
    }

    /// Move `[first, last]` towards the head by `by` slots.
    pub fn shift_left(first: usize, last: usize, by: usize) -> Result<IndexRangeOperation> {
        let destination = first
            .checked_sub(by)
            .ok_or(Error::InvalidShift { first, by })?;
        return IndexRangeOperation::new(first, last, destination);
    }

    pub fn source_first_index(&self) -> usize {
        return self.source_first_index;
    }

    pub fn source_last_index(&self) -> usize {
        return self.source_last_index;
    }

    pub fn destination_first_index(&self) -> usize {
        return self.destination_first_index;
    }

    pub fn destination_last_index(&self) -> usize {
        return self.destination_first_index + self.len() - 1;
    }

    /// Number of elements moved. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        return self.source_last_index - self.source_first_index + 1;
    }

    /// True when source and destination coincide.
    pub fn is_identity(&self) -> bool {
        return self.source_first_index == self.destination_first_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            IndexRangeOperation::new(5, 1, 0),
            Err(Error::InvalidRange { first: 5, last: 1 })
        );
    }

    #[test]
    fn single_element_range() {
        let op = IndexRangeOperation::copy(3, 3).unwrap();
        assert_eq!(op.len(), 1);
        assert_eq!(op.destination_last_index(), 3);
        assert!(op.is_identity());
    }

    #[test]
    fn shifts_compute_destination() {
        let right = IndexRangeOperation::shift_right(2, 4, 3).unwrap();
        assert_eq!(right.destination_first_index(), 5);
        assert_eq!(right.destination_last_index(), 7);

        let left = IndexRangeOperation::shift_left(2, 4, 2).unwrap();
        assert_eq!(left.destination_first_index(), 0);
        assert_eq!(left.destination_last_index(), 2);
    }

    #[test]
    fn shift_left_past_zero_fails() {
        assert_eq!(
            IndexRangeOperation::shift_left(1, 4, 2),
            Err(Error::InvalidShift { first: 1, by: 2 })
        );
    }

    #[test]
    fn shift_right_overflow_fails() {
        assert!(IndexRangeOperation::shift_right(1, 4, usize::MAX).is_err());
        assert!(IndexRangeOperation::new(0, 10, usize::MAX - 3).is_err());
    }
}
