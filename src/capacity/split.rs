use smallvec::SmallVec;

use crate::capacity::GrowthPolicy;
use crate::error::Result;
use crate::storage::ContentIndexRegistry;
use crate::storage::IndexRangeOperation;
use crate::storage::ResizableStorage;

/// Opens a gap inside the occupied run.
///
/// Everything from the split point to the last item moves right by the gap
/// size. With enough tail room that is one in-place shift and the left part
/// is never touched. Otherwise the buffer grows by the shortfall and both
/// parts are relocated in the same reallocation.
#[derive(Debug, Clone, Default)]
pub struct SplitCapacityStrategy<G> {
    growth: G,
}

impl<G: GrowthPolicy> SplitCapacityStrategy<G> {
    pub fn new(growth: G) -> SplitCapacityStrategy<G> {
        return SplitCapacityStrategy { growth };
    }

    /// Leaves `[split_index, split_index + required)` vacant and counted as
    /// occupied. `split_index` must lie in `[first, end]`.
    pub fn ensure<S: ResizableStorage>(
        &self,
        storage: &mut S,
        split_index: usize,
        required: usize,
    ) -> Result<()> {
        if required == 0 {
            return Ok(());
        }
        let first = storage.registry().first_item_index();
        let end = storage.registry().end_index();
        debug_assert!(
            first <= split_index && split_index <= end,
            "split index {split_index} outside [{first}, {end}]"
        );

        let right = if split_index < end {
            Some(IndexRangeOperation::shift_right(split_index, end - 1, required)?)
        } else {
            None
        };

        let available = storage.tail_capacity();
        if required <= available {
            if let Some(operation) = right {
                storage.shift_items(operation)?;
            }
        } else {
            let missing = required - available;
            let additional = self.growth.additional_capacity(missing, storage.capacity());
            log::debug!("growing split at {split_index} by {additional} slots ({missing} missing)");

            let mut operations: SmallVec<[IndexRangeOperation; 2]> = SmallVec::new();
            if split_index > first {
                operations.push(IndexRangeOperation::copy(first, split_index - 1)?);
            }
            operations.extend(right);
            storage.add_capacity_and_shift_items(additional, &operations)?;
        }

        storage.registry_mut().increment_last_item_index(required);
        return Ok(());
    }
}
