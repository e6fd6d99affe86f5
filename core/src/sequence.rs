use std::collections::{TryReserveError, VecDeque};

/// An ascending sequence of values with stable insertion for duplicates.
///
/// Backs both the per-vertex neighbor lists of the adjacency-list store and
/// the priority queue that drives BFS. Insertion is O(n); removal is only
/// structural (`pop_front`), there is no removal by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSeq<T> {
    items: VecDeque<T>,
}

impl<T: Ord> OrderedSeq<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert `value` keeping ascending order. Equal values are placed after
    /// the ones already present.
    pub fn insert_sorted(&mut self, value: T) {
        let at = self.items.partition_point(|x| *x <= value);
        self.items.insert(at, value);
    }

    /// Fallible variant of [`insert_sorted`](Self::insert_sorted) used on the
    /// load path, where the sequence grows with the input.
    pub fn try_insert_sorted(&mut self, value: T) -> Result<(), TryReserveError> {
        self.items.try_reserve(1)?;
        self.insert_sorted(value);
        Ok(())
    }

    /// Position of the first element equal to `key`.
    pub fn search(&self, key: &T) -> Option<usize> {
        let at = self.items.partition_point(|x| x < key);
        match self.items.get(at) {
            Some(found) if found == key => Some(at),
            _ => None,
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Remove and return the smallest element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every element, leaving an empty sequence.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Heap bytes held by the backing buffer.
    pub fn heap_size(&self) -> usize {
        self.items.capacity() * std::mem::size_of::<T>()
    }
}

impl<T: Ord> Default for OrderedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        for value in iter {
            seq.insert_sorted(value);
        }
        seq
    }
}
