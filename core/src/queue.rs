//! FIFO queue over a [`SinglyLinkedChain`]: enqueue at the tail, dequeue at
//! the head, both O(1).

use std::fmt;

use crate::chain::{ChainIter, SinglyLinkedChain};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Queue<T> {
    chain: SinglyLinkedChain<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            chain: SinglyLinkedChain::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.chain.push_back(value);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.chain.pop_front().map_err(|_| Error::empty("dequeue"))
    }

    /// The element `dequeue` would return next.
    pub fn first(&self) -> Result<&T> {
        self.chain.first().map_err(|_| Error::empty("first"))
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Front to rear.
    pub fn iter(&self) -> ChainIter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = Queue::new();
        q.enqueue("a");
        q.enqueue("b");
        q.enqueue("c");
        assert_eq!(q.first(), Ok(&"a"));
        assert_eq!(q.dequeue(), Ok("a"));
        assert_eq!(q.dequeue(), Ok("b"));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut q: Queue<u8> = Queue::new();
        assert_eq!(q.dequeue(), Err(Error::empty("dequeue")));
        assert_eq!(q.first(), Err(Error::empty("first")));
    }

    #[test]
    fn test_interleaved() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Ok(1));
        q.enqueue(3);
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(3));
        assert!(q.is_empty());
        q.enqueue(4);
        assert_eq!(q.first(), Ok(&4));
    }

    #[test]
    fn test_iter_front_first() {
        let mut q = Queue::new();
        for i in 0..3 {
            q.enqueue(i);
        }
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(q.to_string(), "[0, 1, 2]");
    }
}
