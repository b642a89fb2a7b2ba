//! Bidirectional mapping between vertex values and dense slots.
//!
//! Slots are always `0..len` with no gaps. Removing a vertex shifts every
//! higher slot down by one; the owning graph must compact its edge storage
//! in the same step.

use crate::generation::Generation;
use crate::sequence::GrowableSequence;

/// Compact slot assigned to a live vertex.
pub type Slot = usize;

#[derive(Debug, Clone)]
pub struct VertexIndex<T> {
    vertices: GrowableSequence<T>,
}

impl<T> VertexIndex<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: GrowableSequence::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    pub fn generation(&self) -> Generation {
        self.vertices.generation()
    }

    /// Assign the next slot to `value`.
    pub fn push(&mut self, value: T) -> Slot {
        self.vertices.append(value);
        self.vertices.len() - 1
    }

    /// Drop the vertex at `slot`, shifting higher slots down.
    pub fn remove(&mut self, slot: Slot) -> Option<T> {
        self.vertices.remove_at(slot).ok()
    }

    pub fn get(&self, slot: Slot) -> Option<&T> {
        self.vertices.get(slot).ok()
    }

    /// Vertices in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vertices.iter()
    }
}

impl<T: PartialEq> VertexIndex<T> {
    /// Slot of the first vertex equal to `value`. Duplicates alias to the
    /// lowest slot.
    pub fn slot_of(&self, value: &T) -> Option<Slot> {
        self.vertices.find(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.vertices.contains(value)
    }
}

impl<T> Default for VertexIndex<T> {
    fn default() -> Self {
        Self {
            vertices: GrowableSequence::new(),
        }
    }
}
