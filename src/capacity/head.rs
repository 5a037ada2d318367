use crate::capacity::GrowthPolicy;
use crate::error::Result;
use crate::storage::ContentIndexRegistry;
use crate::storage::IndexRangeOperation;
use crate::storage::ResizableStorage;

/// Makes room before the first item.
///
/// Head room can only come from a reallocation: the whole occupied run
/// moves right by the added amount in the same pass, so the tail room is
/// left as it was.
#[derive(Debug, Clone, Default)]
pub struct HeadCapacityStrategy<G> {
    growth: G,
}

impl<G: GrowthPolicy> HeadCapacityStrategy<G> {
    pub fn new(growth: G) -> HeadCapacityStrategy<G> {
        return HeadCapacityStrategy { growth };
    }

    pub fn ensure<S: ResizableStorage>(&self, storage: &mut S, required: usize) -> Result<()> {
        let first = storage.registry().first_item_index();
        if required <= first {
            return Ok(());
        }
        let missing = required - first;
        let additional = self.growth.additional_capacity(missing, storage.capacity());
        log::debug!("growing head by {additional} slots ({missing} missing)");

        match storage.registry().last_item_index() {
            Some(last) => {
                let operation = IndexRangeOperation::shift_right(first, last, additional)?;
                storage.add_capacity_and_shift_items(additional, &[operation])?;
            }
            None => storage.add_capacity_and_shift_items(additional, &[])?,
        }

        let registry = storage.registry_mut();
        registry.increment_last_item_index(additional);
        registry.increment_first_item_index(additional);
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
        let strategy = HeadCapacityStrategy::new(ExactGrowth);
        strategy.ensure(&mut storage, 3).unwrap();
        strategy.ensure(&mut storage, 0).unwrap();
        assert!(storage.calls.is_empty());
    }

    #[test]
    fn grows_by_exact_shortfall() {
        let mut storage = RecordingStorage::new(6, 1, 4);
        HeadCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 4).unwrap();

        assert_eq!(
            storage.calls,
            vec![Call::Grow {
                additional: 3,
                operations: vec![IndexRangeOperation::new(1, 3, 4).unwrap()],
            }]
        );
        assert_eq!(storage.capacity, 9);
        assert_eq!(storage.bounds.first_item_index(), 4);
        assert_eq!(storage.bounds.last_item_index(), Some(6));
        assert_eq!(storage.tail_capacity(), 2);
    }

    #[test]
    fn second_call_is_idempotent() {
        let mut storage = RecordingStorage::new(3, 0, 3);
        let strategy = HeadCapacityStrategy::new(ExactGrowth);
        strategy.ensure(&mut storage, 2).unwrap();
        strategy.ensure(&mut storage, 2).unwrap();
        assert_eq!(storage.calls.len(), 1);
        assert_eq!(storage.head_capacity(), 2);
    }

    #[test]
    fn empty_storage_only_grows() {
        let mut storage = RecordingStorage::new(0, 0, 0);
        HeadCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 2).unwrap();
        assert_eq!(storage.calls, vec![Call::Grow { additional: 2, operations: vec![] }]);
        assert_eq!(storage.bounds.first_item_index(), 2);
        assert!(storage.bounds.is_empty());
    }

    #[test]
    fn doubling_overshoots() {
        let mut storage = RecordingStorage::new(8, 0, 8);
        HeadCapacityStrategy::new(DoublingGrowth).ensure(&mut storage, 1).unwrap();
        assert_eq!(storage.capacity, 16);
        assert_eq!(storage.head_capacity(), 8);
    }

    #[test]
    fn moves_real_items() {
        let mut storage = LinearIndexStorage::new();
        storage.initialize(3, 0, 2, vec!['a', 'b', 'c']).unwrap();
        HeadCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 2).unwrap();

        assert_eq!(storage.capacity(), 5);
        assert_eq!(storage.head_capacity(), 2);
        assert_eq!(storage.tail_capacity(), 0);
        assert_eq!(storage.get(2), Some(&'a'));
        assert_eq!(storage.get(4), Some(&'c'));
    }

    #[test]
    fn storage_error_leaves_bounds_alone() {
        let mut storage = RecordingStorage::new(3, 0, 3);
        let error = Error::RangeOutOfCapacity { first: 0, last: 2, capacity: 3 };
        storage.fail_next = Some(error.clone());

        let result = HeadCapacityStrategy::new(ExactGrowth).ensure(&mut storage, 2);
        assert_eq!(result, Err(error));
        assert_eq!(storage.bounds, ContentBounds::new(0, 3));
        assert_eq!(storage.capacity, 3);
        assert!(storage.calls.is_empty());
    }
}
