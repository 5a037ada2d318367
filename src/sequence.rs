//! Index-addressable sequences on top of linear storage.
//!
//! An `IndexSequence` numbers its items from a configurable first index
//! (0 by default, 1 for one-based sequences). It validates logical indices,
//! translates them to storage indices, and picks the head, tail or split
//! capacity request that matches where the mutation happens.

use crate::capacity::CapacityStrategy;
use crate::capacity::MinimalCapacityStrategy;
use crate::error::Error;
use crate::error::Result;
use crate::storage::ContentIndexRegistry;
use crate::storage::IndexRangeOperation;
use crate::storage::Iter;
use crate::storage::LinearIndexStorage;
use crate::storage::ResizableStorage;

/// Read access by logical index.
pub trait Gettable {
    type Item;

    fn get(&self, index: usize) -> Option<&Self::Item>;
}

/// Overwrite by logical index.
pub trait Replaceable: Gettable {
    /// Returns the previous item.
    fn replace(&mut self, index: usize, item: Self::Item) -> Result<Self::Item>;
}

/// Insertion before a logical index. The index one past the last item
/// appends.
pub trait Insertable: Gettable {
    fn insert(&mut self, index: usize, item: Self::Item) -> Result<()>;

    fn insert_all<I>(&mut self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Item>;
}

/// Removal by logical index.
pub trait Removable: Gettable {
    fn remove(&mut self, index: usize) -> Result<Self::Item>;
}

/// Construction-time settings for a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceOptions {
    /// Logical index of the first item.
    pub first_index: usize,
}

pub struct IndexSequence<T, P = MinimalCapacityStrategy> {
    storage: LinearIndexStorage<T>,
    strategy: P,
    first_index: usize,
}

impl<T> IndexSequence<T> {
    pub fn new() -> IndexSequence<T> {
        return IndexSequence::with_options(SequenceOptions::default(), MinimalCapacityStrategy::default());
    }

    /// An empty sequence whose first item will sit at `first_index`.
    pub fn with_first_index(first_index: usize) -> IndexSequence<T> {
        return IndexSequence::with_options(SequenceOptions { first_index }, MinimalCapacityStrategy::default());
    }

    /// A zero-based sequence holding exactly `items`, with no spare room.
    pub fn from_vec(items: Vec<T>) -> Result<IndexSequence<T>> {
        let mut sequence = IndexSequence::new();
        sequence.strategy.ensure_capacity(&mut sequence.storage, items)?;
        return Ok(sequence);
    }
}

impl<T, P: CapacityStrategy> IndexSequence<T, P> {
    pub fn with_strategy(strategy: P) -> IndexSequence<T, P> {
        return IndexSequence::with_options(SequenceOptions::default(), strategy);
    }

    pub fn with_options(options: SequenceOptions, strategy: P) -> IndexSequence<T, P> {
        return IndexSequence {
            storage: LinearIndexStorage::new(),
            strategy,
            first_index: options.first_index,
        };
    }

    pub fn first_index(&self) -> usize {
        return self.first_index;
    }

    /// Logical index of the last item, `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        return Some(self.first_index + (self.len() - 1));
    }

    pub fn len(&self) -> usize {
        return self.storage.items_count();
    }

    pub fn is_empty(&self) -> bool {
        return self.storage.is_empty();
    }

    pub fn capacity(&self) -> usize {
        return self.storage.capacity();
    }

    pub fn storage(&self) -> &LinearIndexStorage<T> {
        return &self.storage;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let storage_index = self.storage_index(index)?;
        return self.storage.get(storage_index);
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let storage_index = self.storage_index(index)?;
        return self.storage.get_mut(storage_index);
    }

    pub fn first(&self) -> Option<&T> {
        return self.get(self.first_index);
    }

    pub fn last(&self) -> Option<&T> {
        return self.get(self.last_index()?);
    }

    pub fn replace(&mut self, index: usize, item: T) -> Result<T> {
        let error = self.out_of_range(index);
        let slot = self.get_mut(index).ok_or(error)?;
        return Ok(std::mem::replace(slot, item));
    }

    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        return self.insert_all(index, [item]);
    }

    /// Insert `items` so the first of them ends up at `index`.
    ///
    /// Items at `index` and after move up by the number inserted. An empty
    /// iterator changes nothing but the index is still validated.
    pub fn insert_all<I>(&mut self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if index < self.first_index || index > self.end_index()? {
            return Err(self.out_of_range(index));
        }
        let items: Vec<T> = items.into_iter().collect();
        let count = items.len();
        if count == 0 {
            return Ok(());
        }
        // The last item must keep a representable logical index.
        let fits = self
            .len()
            .checked_add(count - 1)
            .and_then(|offset| self.first_index.checked_add(offset))
            .is_some();
        if !fits {
            return Err(self.out_of_range(index));
        }

        let offset = index - self.first_index;
        let first = self.storage.first_item_index();
        let start = if offset == self.len() {
            self.strategy.ensure_tail_capacity(&mut self.storage, count)?;
            let start = self.storage.bounds().end_index();
            self.storage.registry_mut().increment_last_item_index(count);
            start
        } else if offset == 0 {
            self.strategy.ensure_head_capacity(&mut self.storage, count)?;
            let start = self.storage.first_item_index() - count;
            self.storage.registry_mut().decrement_first_item_index(count);
            start
        } else {
            let split_index = first + offset;
            self.strategy.ensure_split_capacity(&mut self.storage, split_index, count)?;
            split_index
        };

        for (storage_index, item) in (start..).zip(items) {
            self.storage.replace(storage_index, item)?;
        }
        return Ok(());
    }

    pub fn append(&mut self, item: T) -> Result<()> {
        let end = self.end_index()?;
        return self.insert_all(end, [item]);
    }

    pub fn append_all<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let end = self.end_index()?;
        return self.insert_all(end, items);
    }

    pub fn prepend(&mut self, item: T) -> Result<()> {
        return self.insert_all(self.first_index, [item]);
    }

    pub fn prepend_all<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        return self.insert_all(self.first_index, items);
    }

    /// Remove and return the item at `index`.
    ///
    /// The shorter side of the run closes the gap, so removals near either
    /// end stay cheap. Freed slots become head or tail room.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let storage_index = self.storage_index(index).ok_or_else(|| self.out_of_range(index))?;
        let item = self.storage.take(storage_index).ok_or_else(|| self.out_of_range(index))?;

        let first = self.storage.first_item_index();
        let end = self.storage.bounds().end_index();
        let before = storage_index - first;
        let after = end - storage_index - 1;

        if before < after {
            if before > 0 {
                let operation = IndexRangeOperation::shift_right(first, storage_index - 1, 1)?;
                self.storage.shift_items(operation)?;
            }
            self.storage.registry_mut().increment_first_item_index(1);
        } else {
            if after > 0 {
                let operation = IndexRangeOperation::shift_left(storage_index + 1, end - 1, 1)?;
                self.storage.shift_items(operation)?;
            }
            self.storage.registry_mut().decrement_last_item_index(1);
        }
        return Ok(item);
    }

    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        return self.remove(self.first_index).ok();
    }

    pub fn remove_last(&mut self) -> Option<T> {
        let last = self.last_index()?;
        return self.remove(last).ok();
    }

    /// Drop every item, keeping the allocated buffer.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        return self.storage.iter();
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        return self.iter().cloned().collect();
    }

    fn storage_index(&self, index: usize) -> Option<usize> {
        if index < self.first_index {
            return None;
        }
        let offset = index - self.first_index;
        if offset >= self.len() {
            return None;
        }
        return Some(self.storage.first_item_index() + offset);
    }

    /// Logical index one past the last item. Fails when that index does
    /// not fit in a `usize`, since nothing can be appended there.
    fn end_index(&self) -> Result<usize> {
        return self
            .first_index
            .checked_add(self.len())
            .ok_or_else(|| self.out_of_range(usize::MAX));
    }

    fn out_of_range(&self, index: usize) -> Error {
        return Error::IndexOutOfRange {
            index,
            first: self.first_index,
            last: self.last_index(),
        };
    }
}

impl<T, P: CapacityStrategy> Gettable for IndexSequence<T, P> {
    type Item = T;

    fn get(&self, index: usize) -> Option<&T> {
        return IndexSequence::get(self, index);
    }
}

impl<T, P: CapacityStrategy> Replaceable for IndexSequence<T, P> {
    fn replace(&mut self, index: usize, item: T) -> Result<T> {
        return IndexSequence::replace(self, index, item);
    }
}

impl<T, P: CapacityStrategy> Insertable for IndexSequence<T, P> {
    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        return IndexSequence::insert(self, index, item);
    }

    fn insert_all<I>(&mut self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        return IndexSequence::insert_all(self, index, items);
    }
}

impl<T, P: CapacityStrategy> Removable for IndexSequence<T, P> {
    fn remove(&mut self, index: usize) -> Result<T> {
        return IndexSequence::remove(self, index);
    }
}

impl<T> Default for IndexSequence<T> {
    fn default() -> Self {
        return IndexSequence::new();
    }
}

impl<T: Clone, P: Clone> Clone for IndexSequence<T, P> {
    fn clone(&self) -> Self {
        return IndexSequence {
            storage: self.storage.deep_copy(),
            strategy: self.strategy.clone(),
            first_index: self.first_index,
        };
    }
}

impl<T: std::fmt::Debug, P> std::fmt::Debug for IndexSequence<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f
            .debug_struct("IndexSequence")
            .field("first_index", &self.first_index)
            .field("items", &self.storage.iter().collect::<Vec<_>>())
            .finish();
    }
}

impl<'a, T, P: CapacityStrategy> IntoIterator for &'a IndexSequence<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T> FromIterator<T> for IndexSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut sequence = IndexSequence::new();
        let items: Vec<T> = items.into_iter().collect();
        // The initial strategy only fails on a layout it computes itself.
        if let Err(error) = sequence.strategy.ensure_capacity(&mut sequence.storage, items) {
            unreachable!("initial layout rejected: {error}");
        }
        return sequence;
    }
}

impl<T, P: CapacityStrategy> Extend<T> for IndexSequence<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        if let Err(error) = self.append_all(items) {
            panic!("cannot extend sequence: {error}");
        }
    }
}
