use smallvec::SmallVec;

use crate::error::Error;
use crate::error::Result;
use crate::storage::ContentBounds;
use crate::storage::ContentIndexRegistry;
use crate::storage::IndexRangeOperation;
use crate::storage::ResizableStorage;

/// A buffer of slots with the live elements in one contiguous run.
///
/// Slots outside `[first, end)` are always `None`. Moves take elements out
/// of their old slot, so no element is ever aliased or dropped twice.
pub struct LinearIndexStorage<T> {
    buffer: Vec<Option<T>>,
    bounds: ContentBounds,
}

impl<T> LinearIndexStorage<T> {
    pub fn new() -> LinearIndexStorage<T> {
        return LinearIndexStorage::with_capacity(0);
    }

    /// An empty storage with `capacity` free slots, all of them tail room.
    pub fn with_capacity(capacity: usize) -> LinearIndexStorage<T> {
        return LinearIndexStorage {
            buffer: empty_slots(capacity),
            bounds: ContentBounds::default(),
        };
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        return self.buffer.len();
    }

    #[inline(always)]
    pub fn items_count(&self) -> usize {
        return self.bounds.items_count();
    }

    pub fn is_empty(&self) -> bool {
        return self.bounds.is_empty();
    }

    pub fn first_item_index(&self) -> usize {
        return self.bounds.first_item_index();
    }

    pub fn last_item_index(&self) -> Option<usize> {
        return self.bounds.last_item_index();
    }

    pub fn head_capacity(&self) -> usize {
        return self.bounds.first_item_index();
    }

    pub fn tail_capacity(&self) -> usize {
        return self.capacity() - self.bounds.end_index();
    }

    pub fn bounds(&self) -> &ContentBounds {
        return &self.bounds;
    }

    /// Element at a storage index.
    ///
    /// Callers are expected to pass a live index; this is only checked in
    /// debug builds. Vacant or out-of-buffer slots read as `None`.
    #[inline]
    pub fn get(&self, storage_index: usize) -> Option<&T> {
        debug_assert!(
            self.bounds.contains(storage_index),
            "storage index {storage_index} outside live range {:?}",
            self.bounds
        );
        return self.buffer.get(storage_index)?.as_ref();
    }

    #[inline]
    pub fn get_mut(&mut self, storage_index: usize) -> Option<&mut T> {
        debug_assert!(
            self.bounds.contains(storage_index),
            "storage index {storage_index} outside live range {:?}",
            self.bounds
        );
        return self.buffer.get_mut(storage_index)?.as_mut();
    }

    /// Overwrite a slot, returning what was there. Never resizes.
    pub fn replace(&mut self, storage_index: usize, item: T) -> Result<Option<T>> {
        let capacity = self.capacity();
        let slot = self
            .buffer
            .get_mut(storage_index)
            .ok_or(Error::SlotOutOfCapacity { index: storage_index, capacity })?;
        return Ok(slot.replace(item));
    }

    /// Vacate a slot, returning its element.
    pub fn take(&mut self, storage_index: usize) -> Option<T> {
        return self.buffer.get_mut(storage_index)?.take();
    }

    /// Set up the storage from scratch.
    ///
    /// `items` land at `[first_item_index, last_item_index]` of a buffer of
    /// exactly `capacity` slots. Nothing is touched unless every bound
    /// checks out.
    pub fn initialize(
        &mut self,
        capacity: usize,
        first_item_index: usize,
        last_item_index: usize,
        items: Vec<T>,
    ) -> Result<()> {
        let invalid = Error::CapacityValidation {
            capacity,
            first: first_item_index,
            last: last_item_index,
        };
        if first_item_index > last_item_index || last_item_index >= capacity {
            return Err(invalid);
        }
        let expected = last_item_index - first_item_index + 1;
        if expected > capacity {
            return Err(invalid);
        }
        if items.len() != expected {
            return Err(Error::ItemCountMismatch { expected, actual: items.len() });
        }

        let mut buffer = empty_slots(capacity);
        for (slot, item) in buffer[first_item_index..].iter_mut().zip(items) {
            *slot = Some(item);
        }
        self.buffer = buffer;
        self.bounds = ContentBounds::new(first_item_index, last_item_index + 1);
        return Ok(());
    }

    pub fn reset(&mut self, capacity: usize) {
        self.buffer = empty_slots(capacity);
        self.bounds = ContentBounds::default();
    }

    /// Drop every element but keep the buffer.
    pub fn clear(&mut self) {
        for slot in self.buffer.iter_mut() {
            *slot = None;
        }
        self.bounds = ContentBounds::default();
    }

    /// Move a run of slots inside the current buffer.
    ///
    /// Overlapping source and destination behave like `memmove`: the run is
    /// walked away from the direction of travel so every element is read
    /// before its slot is written. Vacated slots become `None`, and any
    /// element already sitting in a destination slot is dropped.
    pub fn shift_items(&mut self, operation: IndexRangeOperation) -> Result<()> {
        let capacity = self.capacity();
        check_within(operation.source_first_index(), operation.source_last_index(), capacity)?;
        check_within(
            operation.destination_first_index(),
            operation.destination_last_index(),
            capacity,
        )?;
        if operation.is_identity() {
            return Ok(());
        }

        let source = operation.source_first_index();
        let destination = operation.destination_first_index();
        log::trace!(
            "shifting {} items from {} to {} in place",
            operation.len(),
            source,
            destination
        );

        if destination > source {
            for offset in (0..operation.len()).rev() {
                self.buffer[destination + offset] = self.buffer[source + offset].take();
            }
        } else {
            for offset in 0..operation.len() {
                self.buffer[destination + offset] = self.buffer[source + offset].take();
            }
        }
        return Ok(());
    }

    /// Grow by `additional` slots, moving each range into the new buffer.
    ///
    /// All operations read from the old buffer and write to the new one, so
    /// their order does not matter. They are validated up front: sources
    /// must fit the old buffer, destinations the new one, and no two
    /// operations may share a source or destination slot. Elements of the
    /// old buffer not covered by any operation are dropped.
    pub fn add_capacity_and_shift_items(
        &mut self,
        additional: usize,
        operations: &[IndexRangeOperation],
    ) -> Result<()> {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.checked_add(additional).ok_or(Error::CapacityValidation {
            capacity: usize::MAX,
            first: self.bounds.first_item_index(),
            last: self.bounds.end_index().saturating_sub(1),
        })?;

        let mut sources: SmallVec<[(usize, usize); 4]> = SmallVec::new();
        let mut destinations: SmallVec<[(usize, usize); 4]> = SmallVec::new();
        for operation in operations {
            check_within(operation.source_first_index(), operation.source_last_index(), old_capacity)?;
            check_within(
                operation.destination_first_index(),
                operation.destination_last_index(),
                new_capacity,
            )?;
            sources.push((operation.source_first_index(), operation.source_last_index()));
            destinations.push((
                operation.destination_first_index(),
                operation.destination_last_index(),
            ));
        }
        check_disjoint(&mut sources)?;
        check_disjoint(&mut destinations)?;

        log::trace!(
            "reallocating storage from {} to {} slots with {} range operations",
            old_capacity,
            new_capacity,
            operations.len()
        );

        let mut buffer = empty_slots(new_capacity);
        for operation in operations {
            let source = operation.source_first_index();
            let destination = operation.destination_first_index();
            for offset in 0..operation.len() {
                buffer[destination + offset] = self.buffer[source + offset].take();
            }
        }
        self.buffer = buffer;
        return Ok(());
    }

    /// Duplicate the buffer and bounds. The copy shares nothing with `self`.
    pub fn deep_copy(&self) -> LinearIndexStorage<T>
    where
        T: Clone,
    {
        let mut buffer = Vec::with_capacity(self.buffer.len());
        buffer.extend(self.buffer.iter().cloned());
        return LinearIndexStorage { buffer, bounds: self.bounds };
    }

    /// Live elements in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        let live = &self.buffer[self.bounds.first_item_index()..self.bounds.end_index()];
        return Iter { slots: live.iter() };
    }
}

impl<T> ResizableStorage for LinearIndexStorage<T> {
    type Item = T;
    type Registry = ContentBounds;

    fn registry(&self) -> &ContentBounds {
        return &self.bounds;
    }

    fn registry_mut(&mut self) -> &mut ContentBounds {
        return &mut self.bounds;
    }

    fn capacity(&self) -> usize {
        return self.buffer.len();
    }

    fn initialize(
        &mut self,
        capacity: usize,
        first_item_index: usize,
        last_item_index: usize,
        items: Vec<T>,
    ) -> Result<()> {
        return LinearIndexStorage::initialize(self, capacity, first_item_index, last_item_index, items);
    }

    fn reset(&mut self, capacity: usize) {
        LinearIndexStorage::reset(self, capacity);
    }

    fn shift_items(&mut self, operation: IndexRangeOperation) -> Result<()> {
        return LinearIndexStorage::shift_items(self, operation);
    }

    fn add_capacity_and_shift_items(
        &mut self,
        additional: usize,
        operations: &[IndexRangeOperation],
    ) -> Result<()> {
        return LinearIndexStorage::add_capacity_and_shift_items(self, additional, operations);
    }
}

impl<T> Default for LinearIndexStorage<T> {
    fn default() -> Self {
        return LinearIndexStorage::new();
    }
}

impl<T: Clone> Clone for LinearIndexStorage<T> {
    fn clone(&self) -> Self {
        return self.deep_copy();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinearIndexStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f
            .debug_struct("LinearIndexStorage")
            .field("capacity", &self.capacity())
            .field("first", &self.bounds.first_item_index())
            .field("last", &self.bounds.last_item_index())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish();
    }
}

/// Iterator over the live elements of a storage.
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.slots.next()?.as_ref() {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (0, Some(self.slots.len()));
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.slots.next_back()?.as_ref() {
                return Some(item);
            }
        }
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut buffer = Vec::with_capacity(capacity);
    buffer.resize_with(capacity, || None);
    return buffer;
}

fn check_within(first: usize, last: usize, capacity: usize) -> Result<()> {
    if last >= capacity {
        return Err(Error::RangeOutOfCapacity { first, last, capacity });
    }
    return Ok(());
}

/// Fails if any two inclusive ranges share an index.
fn check_disjoint(ranges: &mut [(usize, usize)]) -> Result<()> {
    ranges.sort_unstable();
    for pair in ranges.windows(2) {
        if pair[1].0 <= pair[0].1 {
            return Err(Error::OverlappingRanges { first: pair[1].0, last: pair[1].1 });
        }
    }
    return Ok(());
}
