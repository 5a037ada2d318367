use crate::capacity::GrowthPolicy;
use crate::error::Result;
use crate::storage::IndexRangeOperation;
use crate::storage::ResizableStorage;
use crate::storage::ContentIndexRegistry;

/// Makes room after the last item.
///
/// New slots are appended to the end of the buffer, so the occupied run is
/// copied to the same indices and the registry does not change.
#[derive(Debug, Clone, Default)]
pub struct TailCapacityStrategy<G> {
    growth: G,
}

impl<G: GrowthPolicy> TailCapacityStrategy<G> {
    pub fn new(growth: G) -> TailCapacityStrategy<G> {
        return TailCapacityStrategy { growth };
    }

    pub fn ensure<S: ResizableStorage>(&self, storage: &mut S, required: usize) -> Result<()> {
        let available = storage.tail_capacity();
        if required <= available {
            return Ok(());
        }
        let missing = required - available;
        let additional = self.growth.additional_capacity(missing, storage.capacity());
        log::debug!("growing tail by {additional} slots ({missing} missing)");

        let first = storage.registry().first_item_index();
        match storage.registry().last_item_index() {
            Some(last) => {
                let operation = IndexRangeOperation::copy(first, last)?;
                storage.add_capacity_and_shift_items(additional, &[operation])?;
            }
            None => storage.add_capacity_and_shift_items(additional, &[])?,
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::DoublingGrowth;
    use crate::capacity::ExactGrowth;
    use crate::capacity::testing::Call;
    use crate::capacity::testing::RecordingStorage;
    use crate::error::Error;
    use crate::storage::ContentBounds;
    use crate::storage::LinearIndexStorage;

    #[test]
    fn enough_room_is_a_no_op() {
        let mut storage = RecordingStorage::new(10, 3, 6);
        TailCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 4).unwrap();
        assert!(storage.calls.is_empty());
    }

    #[test]
    fn grows_by_exact_shortfall() {
        let mut storage = RecordingStorage::new(5, 2, 4);
        TailCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 3).unwrap();

        assert_eq!(
            storage.calls,
            vec![Call::Grow {
                additional: 2,
                operations: vec![IndexRangeOperation::copy(2, 3).unwrap()],
            }]
        );
        assert_eq!(storage.tail_capacity(), 3);
        assert_eq!(storage.bounds.first_item_index(), 2);
        assert_eq!(storage.bounds.last_item_index(), Some(3));
    }

    #[test]
    fn doubling_overshoots() {
        let mut storage = RecordingStorage::new(4, 0, 4);
        TailCapacityStrategy::new(DoublingGrowth).ensure(&mut storage, 1).unwrap();
        assert_eq!(storage.capacity, 8);
        assert_eq!(storage.tail_capacity(), 4);
    }

    #[test]
    fn keeps_head_room_and_items() {
        let mut storage = LinearIndexStorage::new();
        storage.initialize(5, 2, 4, vec!['a', 'b', 'c']).unwrap();
        TailCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 3).unwrap();

        assert_eq!(storage.capacity(), 8);
        assert_eq!(storage.head_capacity(), 2);
        assert_eq!(storage.tail_capacity(), 3);
        assert_eq!(storage.iter().collect::<String>(), "abc");
    }

    #[test]
    fn storage_error_leaves_bounds_alone() {
        let mut storage = RecordingStorage::new(5, 2, 5);
        let error = Error::OverlappingRanges { first: 2, last: 4 };
        storage.fail_next = Some(error.clone());

        let result = TailCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 3);
        assert_eq!(result, Err(error));
        assert_eq!(storage.bounds, ContentBounds::new(2, 5));
        assert_eq!(storage.capacity, 5);
        assert!(storage.calls.is_empty());
    }
}
