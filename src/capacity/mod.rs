//! Capacity strategies.
//!
//! A strategy turns "I need `n` free slots at the head / tail / split
//! point" into at most one storage call: an in-place `shift_items` when
//! the room already exists on the right side, otherwise a single
//! `add_capacity_and_shift_items` that grows and relocates in one pass.
//! How much to grow is delegated to a [`GrowthPolicy`], so the same case
//! analysis serves both the minimal and the amortized flavor.

mod head;
mod initial;
mod split;
mod tail;

pub use head::HeadCapacityStrategy;
pub use initial::InitialCapacityStrategy;
pub use split::SplitCapacityStrategy;
pub use tail::TailCapacityStrategy;

use crate::error::Result;
use crate::storage::ResizableStorage;

/// Decides how many slots to add once a shortfall is known.
pub trait GrowthPolicy {
    /// Must return at least `missing`.
    fn additional_capacity(&self, missing: usize, capacity: usize) -> usize;
}

/// Grow by exactly the shortfall. Never over-allocates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactGrowth;

impl GrowthPolicy for ExactGrowth {
    #[inline(always)]
    fn additional_capacity(&self, missing: usize, _capacity: usize) -> usize {
        return missing;
    }
}

/// Grow by at least the current capacity, for amortized O(1) appends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoublingGrowth;

impl GrowthPolicy for DoublingGrowth {
    #[inline(always)]
    fn additional_capacity(&self, missing: usize, capacity: usize) -> usize {
        return missing.max(capacity);
    }
}

/// Everything a sequence needs from its capacity policy.
///
/// Each `ensure_*` is a no-op when the room already exists. Otherwise it
/// issues exactly one storage call and leaves the registry describing the
/// moved elements.
pub trait CapacityStrategy {
    /// Allocate exactly enough for `items` and place them at `[0, len)`.
    fn ensure_capacity<S: ResizableStorage>(&self, storage: &mut S, items: Vec<S::Item>) -> Result<()>;

    /// Make sure at least `required` slots are free before the first item.
    fn ensure_head_capacity<S: ResizableStorage>(&self, storage: &mut S, required: usize) -> Result<()>;

    /// Make sure at least `required` slots are free after the last item.
    fn ensure_tail_capacity<S: ResizableStorage>(&self, storage: &mut S, required: usize) -> Result<()>;

    /// Open a gap of `required` vacant slots starting at `split_index` and
    /// extend the occupied range over it.
    fn ensure_split_capacity<S: ResizableStorage>(
        &self,
        storage: &mut S,
        split_index: usize,
        required: usize,
    ) -> Result<()>;
}

/// The four single-purpose strategies wired together under one growth
/// policy.
#[derive(Debug, Clone, Default)]
pub struct ComposedCapacityStrategy<G> {
    initial: InitialCapacityStrategy,
    head: HeadCapacityStrategy<G>,
    tail: TailCapacityStrategy<G>,
    split: SplitCapacityStrategy<G>,
}

/// Minimal memory: every growth adds exactly the shortfall.
pub type MinimalCapacityStrategy = ComposedCapacityStrategy<ExactGrowth>;

/// Amortized growth: every growth at least doubles the buffer.
pub type AmortizedCapacityStrategy = ComposedCapacityStrategy<DoublingGrowth>;

impl<G: GrowthPolicy + Clone> ComposedCapacityStrategy<G> {
    pub fn new(growth: G) -> ComposedCapacityStrategy<G> {
        return ComposedCapacityStrategy {
            initial: InitialCapacityStrategy,
            head: HeadCapacityStrategy::new(growth.clone()),
            tail: TailCapacityStrategy::new(growth.clone()),
            split: SplitCapacityStrategy::new(growth),
        };
    }
}

impl<G: GrowthPolicy> CapacityStrategy for ComposedCapacityStrategy<G> {
    fn ensure_capacity<S: ResizableStorage>(&self, storage: &mut S, items: Vec<S::Item>) -> Result<()> {
        return self.initial.ensure(storage, items);
    }

    fn ensure_head_capacity<S: ResizableStorage>(&self, storage: &mut S, required: usize) -> Result<()> {
        return self.head.ensure(storage, required);
    }

    fn ensure_tail_capacity<S: ResizableStorage>(&self, storage: &mut S, required: usize) -> Result<()> {
        return self.tail.ensure(storage, required);
    }

    fn ensure_split_capacity<S: ResizableStorage>(
        &self,
        storage: &mut S,
        split_index: usize,
        required: usize,
    ) -> Result<()> {
        return self.split.ensure(storage, split_index, required);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A storage double that records calls and tracks bounds without
    //! holding any elements.

    use crate::error::Error;
    use crate::error::Result;
    use crate::storage::ContentBounds;
    use crate::storage::ContentIndexRegistry;
    use crate::storage::IndexRangeOperation;
    use crate::storage::ResizableStorage;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Initialize { capacity: usize, first: usize, last: usize },
        Reset { capacity: usize },
        Shift(IndexRangeOperation),
        Grow { additional: usize, operations: Vec<IndexRangeOperation> },
    }

    #[derive(Debug, Default)]
    pub struct RecordingStorage {
        pub capacity: usize,
        pub bounds: ContentBounds,
        pub calls: Vec<Call>,
        /// Returned by the next shift or reallocation instead of `Ok`.
        pub fail_next: Option<Error>,
    }

    impl RecordingStorage {
        pub fn new(capacity: usize, first: usize, end: usize) -> RecordingStorage {
            return RecordingStorage {
                capacity,
                bounds: ContentBounds::new(first, end),
                calls: Vec::new(),
                fail_next: None,
            };
        }
    }

    impl ResizableStorage for RecordingStorage {
        type Item = u32;
        type Registry = ContentBounds;

        fn registry(&self) -> &ContentBounds {
            return &self.bounds;
        }

        fn registry_mut(&mut self) -> &mut ContentBounds {
            return &mut self.bounds;
        }

        fn capacity(&self) -> usize {
            return self.capacity;
        }

        fn initialize(&mut self, capacity: usize, first: usize, last: usize, _items: Vec<u32>) -> Result<()> {
            self.calls.push(Call::Initialize { capacity, first, last });
            self.capacity = capacity;
            self.bounds.set_bounds(first, last + 1);
            return Ok(());
        }

        fn reset(&mut self, capacity: usize) {
            self.calls.push(Call::Reset { capacity });
            self.capacity = capacity;
            self.bounds = ContentBounds::default();
        }

        fn shift_items(&mut self, operation: IndexRangeOperation) -> Result<()> {
            if let Some(error) = self.fail_next.take() {
                return Err(error);
            }
            self.calls.push(Call::Shift(operation));
            return Ok(());
        }

        fn add_capacity_and_shift_items(
            &mut self,
            additional: usize,
            operations: &[IndexRangeOperation],
        ) -> Result<()> {
            if let Some(error) = self.fail_next.take() {
                return Err(error);
            }
            self.calls.push(Call::Grow { additional, operations: operations.to_vec() });
            self.capacity += additional;
            return Ok(());
        }
    }
}
