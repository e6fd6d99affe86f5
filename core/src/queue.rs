use crate::error::{GraphError, Result};
use crate::sequence::OrderedSeq;

/// Ascending priority queue: the value is its own priority, lowest first.
///
/// Equal values leave in arrival order. BFS runs over this queue, so the
/// frontier is drained smallest-ID-first rather than strictly first-in
/// first-out.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    seq: OrderedSeq<T>,
}

impl<T: Ord + Copy> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            seq: OrderedSeq::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seq: OrderedSeq::with_capacity(capacity),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.seq.insert_sorted(value);
    }

    /// Remove and return the lowest value.
    pub fn dequeue(&mut self) -> Result<T> {
        self.seq.pop_front().ok_or(GraphError::EmptyQueue)
    }

    pub fn peek(&self) -> Result<T> {
        self.seq.first().copied().ok_or(GraphError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }
}

impl<T: Ord + Copy> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
