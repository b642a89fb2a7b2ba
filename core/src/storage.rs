//! Edge storage strategies.
//!
//! A [`Graph`](crate::Graph) owns a vertex index and one `EdgeStorage`. The
//! storage only ever sees slots; the graph resolves values to slots before
//! calling in and keeps both sides compacted in lock-step.
//!
//! Every edge is undirected: `insert(a, b, w)` records `a -> b` and `b -> a`
//! together, and `remove` drops both directions.
//!
//! Neighbour order is part of the contract because it fixes BFS/DFS output:
//! insertion order for [`AdjacencyList`], ascending slot for
//! [`AdjacencyMatrix`].

use std::fmt;
use std::mem::size_of;

use crate::config::{clamp_capacity, DEFAULT_CAPACITY};
use crate::sequence::GrowableSequence;
use crate::vertex_index::Slot;

/// Marker weight for "no edge" in a weighted matrix.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Capability set a graph needs from its edge representation.
pub trait EdgeStorage {
    /// Shortest paths minimise summed weight (Dijkstra) when true, hop count
    /// (BFS) when false.
    const WEIGHTED: bool;

    fn with_capacity(capacity: usize) -> Self;

    /// Number of live slots. Always equal to the owning graph's vertex count.
    fn slot_count(&self) -> usize;

    /// Open a new, edgeless slot at index `slot_count()`.
    fn push_slot(&mut self);

    /// Drop every edge touching `slot` and shift higher slots down by one.
    fn remove_slot(&mut self, slot: Slot);

    /// Record the `a`-`b` edge. Returns whether the neighbour relation
    /// changed (a re-weight of an existing matrix edge does not).
    fn insert(&mut self, a: Slot, b: Slot, weight: f64) -> bool;

    /// Drop the `a`-`b` edge. Returns whether anything was removed.
    fn remove(&mut self, a: Slot, b: Slot) -> bool;

    fn has_edge(&self, a: Slot, b: Slot) -> bool {
        self.weight(a, b).is_some()
    }

    /// Weight of the `a`-`b` edge; unweighted storage reports 1.0.
    fn weight(&self, a: Slot, b: Slot) -> Option<f64>;

    /// The first neighbour of `slot` at or after `position`, together with
    /// the position to resume from. Drives both [`Neighbors`] and the
    /// detached graph cursor.
    fn next_neighbor(&self, slot: Slot, position: usize) -> Option<(Slot, usize)>;

    fn neighbors(&self, slot: Slot) -> Neighbors<'_, Self>
    where
        Self: Sized,
    {
        Neighbors {
            storage: self,
            slot,
            position: 0,
        }
    }

    fn edge_count(&self) -> usize;

    /// Approximate heap footprint in bytes.
    fn memory_usage(&self) -> usize;
}

/// Neighbours of one slot in storage order.
pub struct Neighbors<'a, S> {
    storage: &'a S,
    slot: Slot,
    position: usize,
}

impl<S: EdgeStorage> Iterator for Neighbors<'_, S> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let (neighbor, resume) = self.storage.next_neighbor(self.slot, self.position)?;
        self.position = resume;
        Some(neighbor)
    }
}

// ---------------------------------------------------------------------------
// Adjacency list
// ---------------------------------------------------------------------------

/// Per-slot neighbour rows in edge-insertion order.
///
/// Parallel edges are kept as repeated entries; `remove` filters every
/// occurrence. A self-loop appears twice in its own row.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    rows: GrowableSequence<GrowableSequence<Slot>>,
}

impl AdjacencyList {
    fn row_mut(&mut self, slot: Slot) -> Option<&mut GrowableSequence<Slot>> {
        self.rows.get_mut(slot).ok()
    }

    /// Neighbour row of `slot`, if the slot is live.
    pub fn row(&self, slot: Slot) -> Option<&[Slot]> {
        self.rows.get(slot).ok().map(|row| row.as_slice())
    }
}

impl EdgeStorage for AdjacencyList {
    const WEIGHTED: bool = false;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: GrowableSequence::with_capacity(capacity),
        }
    }

    fn slot_count(&self) -> usize {
        self.rows.len()
    }

    fn push_slot(&mut self) {
        self.rows.append(GrowableSequence::new());
    }

    fn remove_slot(&mut self, slot: Slot) {
        if self.rows.remove_at(slot).is_err() {
            return;
        }
        self.rows.for_each_mut(|row| {
            row.retain(|&n| n != slot);
            row.for_each_mut(|n| {
                if *n > slot {
                    *n -= 1;
                }
            });
        });
    }

    fn insert(&mut self, a: Slot, b: Slot, _weight: f64) -> bool {
        if a >= self.rows.len() || b >= self.rows.len() {
            return false;
        }
        if let Some(row) = self.row_mut(a) {
            row.append(b);
        }
        if let Some(row) = self.row_mut(b) {
            row.append(a);
        }
        true
    }

    fn remove(&mut self, a: Slot, b: Slot) -> bool {
        let mut removed = false;
        if let Some(row) = self.row_mut(a) {
            let before = row.len();
            row.retain(|&n| n != b);
            removed |= row.len() != before;
        }
        if let Some(row) = self.row_mut(b) {
            let before = row.len();
            row.retain(|&n| n != a);
            removed |= row.len() != before;
        }
        removed
    }

    fn has_edge(&self, a: Slot, b: Slot) -> bool {
        self.row(a).is_some_and(|row| row.contains(&b))
    }

    fn weight(&self, a: Slot, b: Slot) -> Option<f64> {
        self.has_edge(a, b).then_some(1.0)
    }

    fn next_neighbor(&self, slot: Slot, position: usize) -> Option<(Slot, usize)> {
        let row = self.row(slot)?;
        row.get(position).map(|&n| (n, position + 1))
    }

    fn edge_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum::<usize>() / 2
    }

    fn memory_usage(&self) -> usize {
        let row_headers = self.rows.capacity() * size_of::<GrowableSequence<Slot>>();
        let entries: usize = self
            .rows
            .iter()
            .map(|row| row.capacity() * size_of::<Slot>())
            .sum();
        row_headers + entries
    }
}

// ---------------------------------------------------------------------------
// Adjacency matrix
// ---------------------------------------------------------------------------

/// Cell type of an [`AdjacencyMatrix`].
pub trait MatrixCell: Copy + PartialEq + fmt::Debug {
    /// Value of a cell with no edge.
    const EMPTY: Self;

    const WEIGHTED: bool;

    fn from_weight(weight: f64) -> Self;

    /// `Some(weight)` if the cell holds an edge.
    fn weight(self) -> Option<f64>;
}

impl MatrixCell for bool {
    const EMPTY: Self = false;
    const WEIGHTED: bool = false;

    fn from_weight(_weight: f64) -> Self {
        true
    }

    fn weight(self) -> Option<f64> {
        self.then_some(1.0)
    }
}

impl MatrixCell for f64 {
    const EMPTY: Self = NO_EDGE;
    const WEIGHTED: bool = true;

    fn from_weight(weight: f64) -> Self {
        weight
    }

    fn weight(self) -> Option<f64> {
        (!self.is_infinite()).then_some(self)
    }
}

/// Square `capacity × capacity` matrix stored row-major in one allocation.
///
/// Only the leading `len × len` block is live; everything outside it is kept
/// at `C::EMPTY` so a newly pushed slot starts edgeless. Capacity doubles when
/// a push would overflow and never shrinks. Symmetric by construction.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<C> {
    cells: Vec<C>,
    capacity: usize,
    len: usize,
}

/// `numVertices × numVertices` boolean matrix.
pub type BoolMatrix = AdjacencyMatrix<bool>;

/// Real-valued matrix with [`NO_EDGE`] where no edge exists.
pub type WeightMatrix = AdjacencyMatrix<f64>;

impl<C: MatrixCell> AdjacencyMatrix<C> {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn at(&self, row: Slot, col: Slot) -> C {
        self.cells[row * self.capacity + col]
    }

    fn set(&mut self, row: Slot, col: Slot, cell: C) {
        self.cells[row * self.capacity + col] = cell;
    }

    fn in_range(&self, a: Slot, b: Slot) -> bool {
        a < self.len && b < self.len
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        let mut cells = vec![C::EMPTY; new_capacity * new_capacity];
        for row in 0..self.len {
            let src = row * self.capacity;
            let dst = row * new_capacity;
            cells[dst..dst + self.len].copy_from_slice(&self.cells[src..src + self.len]);
        }
        log::debug!(
            "adjacency matrix grown: capacity {} -> {}",
            self.capacity,
            new_capacity
        );
        self.cells = cells;
        self.capacity = new_capacity;
    }
}

impl<C: MatrixCell> EdgeStorage for AdjacencyMatrix<C> {
    const WEIGHTED: bool = C::WEIGHTED;

    fn with_capacity(capacity: usize) -> Self {
        let capacity = clamp_capacity(capacity);
        Self {
            cells: vec![C::EMPTY; capacity * capacity],
            capacity,
            len: 0,
        }
    }

    fn slot_count(&self) -> usize {
        self.len
    }

    fn push_slot(&mut self) {
        if self.len == self.capacity {
            self.grow();
        }
        self.len += 1;
    }

    fn remove_slot(&mut self, slot: Slot) {
        if slot >= self.len {
            return;
        }
        let last = self.len - 1;

        // Shift rows below `slot` up by one.
        for row in slot..last {
            for col in 0..self.len {
                let cell = self.at(row + 1, col);
                self.set(row, col, cell);
            }
        }
        // Shift columns right of `slot` left by one.
        for col in slot..last {
            for row in 0..last {
                let cell = self.at(row, col + 1);
                self.set(row, col, cell);
            }
        }
        for i in 0..self.len {
            self.set(last, i, C::EMPTY);
            self.set(i, last, C::EMPTY);
        }

        self.len = last;
    }

    fn insert(&mut self, a: Slot, b: Slot, weight: f64) -> bool {
        if !self.in_range(a, b) {
            return false;
        }
        let had_edge = self.at(a, b).weight().is_some();
        let cell = C::from_weight(weight);
        self.set(a, b, cell);
        self.set(b, a, cell);
        had_edge != cell.weight().is_some()
    }

    fn remove(&mut self, a: Slot, b: Slot) -> bool {
        if !self.in_range(a, b) {
            return false;
        }
        let had_edge = self.at(a, b).weight().is_some();
        self.set(a, b, C::EMPTY);
        self.set(b, a, C::EMPTY);
        had_edge
    }

    fn weight(&self, a: Slot, b: Slot) -> Option<f64> {
        if !self.in_range(a, b) {
            return None;
        }
        self.at(a, b).weight()
    }

    fn next_neighbor(&self, slot: Slot, position: usize) -> Option<(Slot, usize)> {
        if slot >= self.len {
            return None;
        }
        (position..self.len)
            .find(|&col| self.at(slot, col).weight().is_some())
            .map(|col| (col, col + 1))
    }

    fn edge_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.len {
            for col in row..self.len {
                if self.at(row, col).weight().is_some() {
                    count += 1;
                }
            }
        }
        count
    }

    fn memory_usage(&self) -> usize {
        self.cells.capacity() * size_of::<C>()
    }
}

impl<C: MatrixCell> Default for AdjacencyMatrix<C> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
