use crate::error::Result;
use crate::storage::ResizableStorage;

/// Sizes a fresh storage to exactly its starting items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitialCapacityStrategy;

impl InitialCapacityStrategy {
    pub fn ensure<S: ResizableStorage>(&self, storage: &mut S, items: Vec<S::Item>) -> Result<()> {
        if items.is_empty() {
            storage.reset(0);
            return Ok(());
        }
        let count = items.len();
        return storage.initialize(count, 0, count - 1, items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::testing::Call;
    use crate::capacity::testing::RecordingStorage;
    use crate::storage::ContentIndexRegistry;
    use crate::storage::LinearIndexStorage;

    #[test]
    fn sizes_exactly_to_items() {
        let mut storage = RecordingStorage::default();
        InitialCapacityStrategy.ensure(&mut storage, vec![7, 8, 9]).unwrap();
        assert_eq!(storage.calls, vec![Call::Initialize { capacity: 3, first: 0, last: 2 }]);
        assert_eq!(storage.bounds.items_count(), 3);
    }

    #[test]
    fn no_items_means_no_capacity() {
        let mut storage = RecordingStorage::new(5, 1, 3);
        InitialCapacityStrategy.ensure(&mut storage, vec![]).unwrap();
        assert_eq!(storage.calls, vec![Call::Reset { capacity: 0 }]);
        assert!(storage.bounds.is_empty());
    }

    #[test]
    fn populates_linear_storage() {
        let mut storage = LinearIndexStorage::new();
        InitialCapacityStrategy.ensure(&mut storage, vec!["a", "b"]).unwrap();
        assert_eq!(storage.capacity(), 2);
        assert_eq!(storage.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
