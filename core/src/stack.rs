//! LIFO stack over a [`SinglyLinkedChain`]; the head of the chain is the top.

use std::fmt;

use crate::chain::{ChainIter, SinglyLinkedChain};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Stack<T> {
    chain: SinglyLinkedChain<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            chain: SinglyLinkedChain::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.chain.push_front(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.chain.pop_front().map_err(|_| Error::empty("pop"))
    }

    pub fn peek(&self) -> Result<&T> {
        self.chain.first().map_err(|_| Error::empty("peek"))
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Top to bottom.
    pub fn iter(&self) -> ChainIter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.peek(), Ok(&3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut s: Stack<i32> = Stack::new();
        assert_eq!(s.pop(), Err(Error::empty("pop")));
        assert_eq!(s.peek(), Err(Error::empty("peek")));
    }

    #[test]
    fn test_drain_then_reuse() {
        let mut s = Stack::new();
        s.push('a');
        s.pop().unwrap();
        assert!(s.is_empty());
        s.push('b');
        assert_eq!(s.peek(), Ok(&'b'));
    }

    #[test]
    fn test_iter_top_first() {
        let mut s = Stack::new();
        for i in 0..3 {
            s.push(i);
        }
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(s.to_string(), "[2, 1, 0]");
    }
}
