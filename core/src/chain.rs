//! Singly linked chain with head and tail links.
//!
//! Nodes live in an index arena (`Vec` of slots plus a free list) and link to
//! each other by slot index, so the chain needs neither `unsafe` nor shared
//! ownership to keep an O(1) tail. Freed slots are reused by later pushes.
//! `len` is maintained incrementally, never recomputed by walking.

use std::fmt;

use crate::error::{Error, Result};
use crate::generation::Generation;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SinglyLinkedChain<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    generation: Generation,
}

impl<T> SinglyLinkedChain<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            generation: Generation::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Some(node) => node,
            None => unreachable!("chain link points at free slot {}", idx),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Some(node) => node,
            None => unreachable!("chain link points at free slot {}", idx),
        }
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Some(Node { value, next });
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = node;
                idx
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        match self.slots[idx].take() {
            Some(node) => {
                self.free.push(idx);
                node
            }
            None => unreachable!("double release of chain slot {}", idx),
        }
    }

    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(value, self.head);
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
        self.generation.bump();
    }

    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        self.generation.bump();
    }

    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::empty("pop_front"))?;
        let node = self.release(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.generation.bump();
        Ok(node.value)
    }

    pub fn first(&self) -> Result<&T> {
        self.head
            .map(|idx| &self.node(idx).value)
            .ok_or(Error::empty("first"))
    }

    pub fn last(&self) -> Result<&T> {
        self.tail
            .map(|idx| &self.node(idx).value)
            .ok_or(Error::empty("last"))
    }

    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.generation.bump();
    }

    pub fn iter(&self) -> ChainIter<'_, T> {
        ChainIter {
            chain: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// A detached, generation-checked cursor starting at the head.
    pub fn cursor(&self) -> ChainCursor {
        ChainCursor {
            next: self.head,
            generation: self.generation,
        }
    }
}

impl<T: PartialEq> SinglyLinkedChain<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Unlink the first node equal to `value`. O(n).
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut prev: Option<usize> = None;
        let mut current = self.head;

        while let Some(idx) = current {
            let node = self.node(idx);
            if node.value == *value {
                let next = node.next;
                match prev {
                    Some(p) => self.node_mut(p).next = next,
                    None => self.head = next,
                }
                if self.tail == Some(idx) {
                    self.tail = prev;
                }
                let removed = self.release(idx);
                self.len -= 1;
                self.generation.bump();
                return Some(removed.value);
            }
            prev = current;
            current = node.next;
        }

        None
    }
}

impl<T> Default for SinglyLinkedChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        for value in iter {
            chain.push_back(value);
        }
        chain
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedChain<T> {
    type Item = &'a T;
    type IntoIter = ChainIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

/// Borrowing head-to-tail iterator.
pub struct ChainIter<'a, T> {
    chain: &'a SinglyLinkedChain<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = self.chain.node(idx);
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ChainIter<'_, T> {}

/// Detached head-to-tail cursor; see [`SequenceCursor`](crate::SequenceCursor)
/// for the invalidation contract.
#[derive(Debug, Clone, Copy)]
pub struct ChainCursor {
    next: Option<usize>,
    generation: Generation,
}

impl ChainCursor {
    pub fn advance<'a, T>(&mut self, chain: &'a SinglyLinkedChain<T>) -> Result<Option<&'a T>> {
        self.generation.check(chain.generation)?;
        // A cursor handed a different chain may point at a free or missing slot.
        let Some(node) = self
            .next
            .and_then(|idx| chain.slots.get(idx))
            .and_then(Option::as_ref)
        else {
            self.next = None;
            return Ok(None);
        };
        self.next = node.next;
        Ok(Some(&node.value))
    }
}
