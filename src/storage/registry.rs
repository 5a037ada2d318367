//! Occupied-bounds bookkeeping.
//!
//! The registry is the single writable source of truth for which storage
//! slots are live. Capacity strategies update it after moving elements;
//! it performs no validation of its own beyond debug assertions.
//!
//! Bounds are kept half-open: `first` is the first live slot and `end` is
//! one past the last. An empty storage has `first == end`.

pub trait ContentIndexRegistry {
    fn first_item_index(&self) -> usize;

    /// One past the last occupied storage index.
    fn end_index(&self) -> usize;

    fn increment_first_item_index(&mut self, delta: usize);
    fn decrement_first_item_index(&mut self, delta: usize);
    fn increment_last_item_index(&mut self, delta: usize);
    fn decrement_last_item_index(&mut self, delta: usize);

    /// Overwrite both bounds at once. `end` is exclusive.
    fn set_bounds(&mut self, first: usize, end: usize);

    /// The last occupied storage index, or `None` when empty.
    fn last_item_index(&self) -> Option<usize> {
        let end = self.end_index();
        if end > self.first_item_index() {
            return Some(end - 1);
        }
        return None;
    }

    fn items_count(&self) -> usize {
        return self.end_index() - self.first_item_index();
    }

    fn is_empty(&self) -> bool {
        return self.items_count() == 0;
    }

    /// True if `storage_index` points at a live slot.
    fn contains(&self, storage_index: usize) -> bool {
        return storage_index >= self.first_item_index() && storage_index < self.end_index();
    }
}

/// The registry owned by a `LinearIndexStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentBounds {
    first: usize,
    end: usize,
}

impl ContentBounds {
    pub fn new(first: usize, end: usize) -> ContentBounds {
        debug_assert!(first <= end, "bounds [{first}, {end}) are reversed");
        return ContentBounds { first, end };
    }
}

impl ContentIndexRegistry for ContentBounds {
    #[inline(always)]
    fn first_item_index(&self) -> usize {
        return self.first;
    }

    #[inline(always)]
    fn end_index(&self) -> usize {
        return self.end;
    }

    fn increment_first_item_index(&mut self, delta: usize) {
        self.first += delta;
        debug_assert!(self.first <= self.end, "first {} passed end {}", self.first, self.end);
    }

    fn decrement_first_item_index(&mut self, delta: usize) {
        self.first -= delta;
    }

    fn increment_last_item_index(&mut self, delta: usize) {
        self.end += delta;
    }

    fn decrement_last_item_index(&mut self, delta: usize) {
        self.end -= delta;
        debug_assert!(self.first <= self.end, "end {} fell below first {}", self.end, self.first);
    }

    fn set_bounds(&mut self, first: usize, end: usize) {
        debug_assert!(first <= end, "bounds [{first}, {end}) are reversed");
        self.first = first;
        self.end = end;
    }
}
