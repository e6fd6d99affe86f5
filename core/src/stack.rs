use crate::error::{GraphError, Result};

/// LIFO stack that drives DFS.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T: Copy> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(GraphError::EmptyStack)
    }

    pub fn peek(&self) -> Result<T> {
        self.items.last().copied().ok_or(GraphError::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
