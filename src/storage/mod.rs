//! Linear index storage.
//!
//! A resizable, randomly indexable buffer with spare room on both sides of
//! the occupied range. The storage only knows storage indices; translating
//! logical sequence indices is the sequence layer's job, and deciding how
//! much to grow is the capacity strategy's job.

mod linear;
mod range;
mod registry;

pub use linear::Iter;
pub use linear::LinearIndexStorage;
pub use range::IndexRangeOperation;
pub use registry::ContentBounds;
pub use registry::ContentIndexRegistry;

use crate::error::Result;

/// The primitives a capacity strategy drives.
///
/// `shift_items` and `add_capacity_and_shift_items` only move elements;
/// keeping the registry in step is up to the caller.
pub trait ResizableStorage {
    type Item;
    type Registry: ContentIndexRegistry;

    fn registry(&self) -> &Self::Registry;
    fn registry_mut(&mut self) -> &mut Self::Registry;

    /// Total number of slots, live or not.
    fn capacity(&self) -> usize;

    /// Replace the contents with `items` at `[first, last]` in a buffer of
    /// exactly `capacity` slots.
    fn initialize(
        &mut self,
        capacity: usize,
        first_item_index: usize,
        last_item_index: usize,
        items: Vec<Self::Item>,
    ) -> Result<()>;

    /// Drop every element and start over with `capacity` empty slots.
    fn reset(&mut self, capacity: usize);

    /// Move a run inside the current buffer.
    fn shift_items(&mut self, operation: IndexRangeOperation) -> Result<()>;

    /// Grow the buffer by `additional` slots, relocating every range in
    /// `operations` from the old buffer into the new one.
    fn add_capacity_and_shift_items(
        &mut self,
        additional: usize,
        operations: &[IndexRangeOperation],
    ) -> Result<()>;

    /// Free slots before the first live one.
    fn head_capacity(&self) -> usize {
        return self.registry().first_item_index();
    }

    /// Free slots after the last live one.
    fn tail_capacity(&self) -> usize {
        return self.capacity() - self.registry().end_index();
    }

    fn items_count(&self) -> usize {
        return self.registry().items_count();
    }
}
