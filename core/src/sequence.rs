//! Contiguous, index-addressed storage with doubling growth.
//!
//! `GrowableSequence` backs every array-shaped structure in the engine: the
//! vertex index and the per-slot neighbour rows of the adjacency-list
//! backend. Growth is explicit (capacity doubles when an insert would
//! overflow) so the amortised O(1) append is a property of this type rather
//! than of the allocator, and capacity never shrinks.

use std::fmt;

use crate::config::{clamp_capacity, DEFAULT_CAPACITY};
use crate::error::{Error, Result};
use crate::generation::Generation;

#[derive(Debug, Clone)]
pub struct GrowableSequence<T> {
    items: Vec<T>,
    generation: Generation,
}

impl<T> GrowableSequence<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Reserve `capacity` slots up front (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(clamp_capacity(capacity)),
            generation: Generation::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Double the capacity if one more element would not fit.
    fn ensure_room(&mut self) {
        let cap = self.items.capacity();
        if self.items.len() == cap {
            let grow_by = cap.max(1);
            self.items.reserve_exact(grow_by);
            log::debug!(
                "sequence grown: capacity {} -> {}",
                cap,
                self.items.capacity()
            );
        }
    }

    /// Add to the rear.
    pub fn append(&mut self, value: T) {
        self.ensure_room();
        self.items.push(value);
        self.generation.bump();
    }

    /// Insert at `index`, shifting trailing elements right. `index == len`
    /// appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.ensure_room();
        self.items.insert(index, value);
        self.generation.bump();
        Ok(())
    }

    /// Remove the element at `index`, shifting trailing elements left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(Error::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let value = self.items.remove(index);
        self.generation.bump();
        Ok(value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, len })
    }

    /// Overwrite in place, returning the previous value. Not a structural
    /// change, so open cursors stay valid.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    pub fn first(&self) -> Result<&T> {
        self.items.first().ok_or(Error::empty("first"))
    }

    pub fn last(&self) -> Result<&T> {
        self.items.last().ok_or(Error::empty("last"))
    }

    pub fn remove_first(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::empty("remove_first"));
        }
        self.remove_at(0)
    }

    pub fn remove_last(&mut self) -> Result<T> {
        let value = self.items.pop().ok_or(Error::empty("remove_last"))?;
        self.generation.bump();
        Ok(value)
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.generation.bump();
        }
    }

    /// Keep only the elements matching `keep`, preserving order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        let before = self.items.len();
        self.items.retain(keep);
        if self.items.len() != before {
            self.generation.bump();
        }
    }

    /// Apply `f` to every element in place. Not a structural change.
    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, f: F) {
        self.items.iter_mut().for_each(f);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// A detached, generation-checked cursor starting at the front.
    pub fn cursor(&self) -> SequenceCursor {
        SequenceCursor {
            position: 0,
            generation: self.generation,
        }
    }
}

impl<T: PartialEq> GrowableSequence<T> {
    /// Slot of the first element equal to `value`. Linear scan.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Remove the first element equal to `value`, if any.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.find(value)?;
        self.remove_at(index).ok()
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> FromIterator<T> for GrowableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for GrowableSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> IntoIterator for GrowableSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

/// Forward cursor over a [`GrowableSequence`] that does not borrow it.
///
/// Because the cursor holds no reference, the sequence may be mutated while
/// the cursor is alive; the next [`advance`](SequenceCursor::advance) then
/// fails with `IteratorInvalidated`. Pass the same sequence the cursor was
/// taken from.
#[derive(Debug, Clone, Copy)]
pub struct SequenceCursor {
    position: usize,
    generation: Generation,
}

impl SequenceCursor {
    pub fn advance<'a, T>(&mut self, seq: &'a GrowableSequence<T>) -> Result<Option<&'a T>> {
        self.generation.check(seq.generation)?;
        let item = seq.items.get(self.position);
        if item.is_some() {
            self.position += 1;
        }
        Ok(item)
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
