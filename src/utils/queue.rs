use std::collections::VecDeque;

use crate::error::{GraphError, Result};

/// A FIFO queue.
///
/// Thin wrapper around [`VecDeque`] that turns a dequeue on an empty queue
/// into [`GraphError::EmptyQueue`] instead of an `Option`.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap),
        }
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(GraphError::EmptyQueue)
    }

    /// Returns a reference to the front item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));

        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn dequeue_on_empty_fails() {
        let mut queue: Queue<u32> = Queue::new();
        assert_eq!(queue.dequeue(), Err(GraphError::EmptyQueue));

        queue.enqueue(5);
        queue.clear();
        assert_eq!(queue.dequeue(), Err(GraphError::EmptyQueue));
    }
}
