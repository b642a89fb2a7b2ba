use std::mem::size_of;

use crate::config::GraphConfig;
use crate::error::Result;
use crate::generation::Generation;
use crate::storage::{AdjacencyList, BoolMatrix, EdgeStorage, WeightMatrix};
use crate::traversal::{self, DegreeResult, Walk, WalkKind};
use crate::vertex_index::{Slot, VertexIndex};

/// Unweighted graph over per-vertex neighbour lists.
pub type AdjListGraph<T> = Graph<T, AdjacencyList>;

/// Unweighted graph over a boolean adjacency matrix.
pub type MatrixGraph<T> = Graph<T, BoolMatrix>;

/// Weighted graph over a real-valued matrix; shortest paths use Dijkstra.
pub type WeightedGraph<T> = Graph<T, WeightMatrix>;

/// In-memory undirected graph: a vertex index plus one edge storage.
///
/// Vertices are identified by value equality; each live vertex occupies a
/// dense slot in `0..len()`. `add_edge(a, b, w)` always records both
/// directions. The edge storage `S` decides neighbour order and whether
/// shortest paths are hop-count (BFS) or weight (Dijkstra) minimal.
///
/// Queries that name a missing vertex are not errors: mutations no-op,
/// traversals return an empty [`Walk`], lookups return `None`/`false`.
///
/// Duplicate vertex values are accepted and alias to the lowest slot in every
/// lookup; keeping values unique is the caller's job.
#[derive(Debug, Clone)]
pub struct Graph<T, S = AdjacencyList> {
    vertices: VertexIndex<T>,
    edges: S,
    generation: Generation,
}

impl<T: PartialEq, S: EdgeStorage> Graph<T, S> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self::with_config(GraphConfig::new(vertex_count))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let config = config.clamped();
        Self {
            vertices: VertexIndex::with_capacity(config.initial_capacity),
            edges: S::with_capacity(config.initial_capacity),
            generation: Generation::default(),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bumped on every structural change to vertices or edges.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Slot of `vertex` (first match). O(n).
    pub fn slot_of(&self, vertex: &T) -> Option<Slot> {
        self.vertices.slot_of(vertex)
    }

    pub fn vertex(&self, slot: Slot) -> Option<&T> {
        self.vertices.get(slot)
    }

    /// Vertices in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.vertices.iter()
    }

    fn slots_of(&self, a: &T, b: &T) -> Option<(Slot, Slot)> {
        Some((self.slot_of(a)?, self.slot_of(b)?))
    }

    /// Add `vertex` in the next free slot and return that slot.
    pub fn add_vertex(&mut self, vertex: T) -> Slot {
        if log::log_enabled!(log::Level::Warn) && self.vertices.contains(&vertex) {
            log::warn!(
                "duplicate vertex added at slot {}; lookups resolve to the first copy",
                self.vertices.len()
            );
        }
        let slot = self.vertices.push(vertex);
        self.edges.push_slot();
        self.generation.bump();
        slot
    }

    /// Remove `vertex` and every edge touching it, compacting higher slots.
    ///
    /// No-op returning `None` if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &T) -> Option<T> {
        let slot = self.slot_of(vertex)?;
        self.edges.remove_slot(slot);
        let removed = self.vertices.remove(slot);
        self.generation.bump();
        log::debug!(
            "removed vertex at slot {}, {} remaining",
            slot,
            self.vertices.len()
        );
        removed
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// `weight` is ignored by unweighted storage. On weighted storage a second
    /// call for the same pair overwrites the weight, an infinite weight clears
    /// the edge, and a NaN weight is rejected. Returns `false` (and changes
    /// nothing) when either vertex is absent or the weight was rejected.
    pub fn add_edge(&mut self, a: &T, b: &T, weight: f64) -> bool {
        let Some((sa, sb)) = self.slots_of(a, b) else {
            return false;
        };
        if S::WEIGHTED && weight.is_nan() {
            log::warn!("rejected NaN weight for edge {} - {}", sa, sb);
            return false;
        }
        if self.edges.insert(sa, sb, weight) {
            self.generation.bump();
        }
        true
    }

    /// Disconnect `a` and `b` in both directions. Returns whether an edge
    /// was removed; absent vertices are a no-op.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> bool {
        let Some((sa, sb)) = self.slots_of(a, b) else {
            return false;
        };
        let removed = self.edges.remove(sa, sb);
        if removed {
            self.generation.bump();
        }
        removed
    }

    pub fn has_edge(&self, a: &T, b: &T) -> bool {
        self.slots_of(a, b)
            .is_some_and(|(sa, sb)| self.edges.has_edge(sa, sb))
    }

    /// Weight of the `a`-`b` edge; 1.0 on unweighted storage.
    pub fn edge_weight(&self, a: &T, b: &T) -> Option<f64> {
        let (sa, sb) = self.slots_of(a, b)?;
        self.edges.weight(sa, sb)
    }

    /// Number of neighbour entries of `vertex`; 0 if absent.
    pub fn degree(&self, vertex: &T) -> usize {
        self.slot_of(vertex)
            .map_or(0, |slot| self.edges.neighbors(slot).count())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// True iff a BFS from slot 0 reaches every vertex. Vacuously true for an
    /// empty graph.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        traversal::bfs_order(&self.edges, 0).len() == self.len()
    }

    /// Sum of edge weights along consecutive pairs of `path`.
    ///
    /// `Some(0.0)` for a single vertex; `None` for an empty slice, an absent
    /// vertex, or a consecutive pair that is not adjacent.
    pub fn path_weight(&self, path: &[T]) -> Option<f64> {
        if path.is_empty() {
            return None;
        }
        self.slot_of(&path[0])?;
        path.windows(2)
            .map(|pair| self.edge_weight(&pair[0], &pair[1]))
            .sum()
    }

    /// A detached, generation-checked cursor over `vertex`'s neighbours.
    ///
    /// `None` if the vertex is absent.
    pub fn neighbor_cursor(&self, vertex: &T) -> Option<NeighborCursor> {
        Some(NeighborCursor {
            slot: self.slot_of(vertex)?,
            position: 0,
            generation: self.generation,
        })
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        self.vertices.capacity() * size_of::<T>() + self.edges.memory_usage()
    }
}

impl<T: PartialEq + Clone, S: EdgeStorage> Graph<T, S> {
    fn values(&self, slots: Vec<Slot>) -> Vec<T> {
        slots
            .into_iter()
            .filter_map(|slot| self.vertices.get(slot).cloned())
            .collect()
    }

    /// Snapshot of `vertex`'s neighbours in storage order; empty if absent.
    pub fn neighbors(&self, vertex: &T) -> Vec<T> {
        match self.slot_of(vertex) {
            Some(slot) => self.values(self.edges.neighbors(slot).collect()),
            None => Vec::new(),
        }
    }

    /// Breadth-first order from `start`.
    pub fn bfs(&self, start: &T) -> Walk<T> {
        let Some(slot) = self.slot_of(start) else {
            return Walk::empty(WalkKind::BreadthFirst, self.generation);
        };
        let order = traversal::bfs_order(&self.edges, slot);
        log::trace!("bfs from slot {}: {} visited", slot, order.len());
        Walk::new(WalkKind::BreadthFirst, self.generation, self.values(order))
    }

    /// Depth-first discovery order from `start` (mark-on-push).
    pub fn dfs(&self, start: &T) -> Walk<T> {
        let Some(slot) = self.slot_of(start) else {
            return Walk::empty(WalkKind::DepthFirst, self.generation);
        };
        let order = traversal::dfs_order(&self.edges, slot);
        log::trace!("dfs from slot {}: {} visited", slot, order.len());
        Walk::new(WalkKind::DepthFirst, self.generation, self.values(order))
    }

    /// Shortest path from `start` to `target`, both endpoints included.
    ///
    /// Fewest edges on unweighted storage, least summed weight on weighted
    /// storage. `start == target` yields just that vertex; a missing or
    /// unreachable endpoint yields an empty walk.
    pub fn shortest_path(&self, start: &T, target: &T) -> Walk<T> {
        let Some((s, t)) = self.slots_of(start, target) else {
            return Walk::empty(WalkKind::ShortestPath, self.generation);
        };
        let path = if S::WEIGHTED {
            traversal::dijkstra_path(&self.edges, s, t)
        } else {
            traversal::bfs_path(&self.edges, s, t)
        };
        log::trace!(
            "shortest path {} -> {}: {}",
            s,
            t,
            path.as_ref()
                .map_or_else(|| "unreachable".to_string(), |p| format!("{} vertices", p.len()))
        );
        match path {
            Some(slots) => Walk::new(WalkKind::ShortestPath, self.generation, self.values(slots)),
            None => Walk::empty(WalkKind::ShortestPath, self.generation),
        }
    }

    /// The vertex to move to from `from` on a shortest path to `to`.
    ///
    /// `None` when `to` is unreachable, absent, or equal to `from`.
    pub fn next_hop(&self, from: &T, to: &T) -> Option<T> {
        self.shortest_path(from, to).nth(1)
    }

    /// Vertices ranked by degree, descending, ties by slot. `top_n == 0`
    /// returns every vertex.
    pub fn degree_ranking(&self, top_n: usize) -> Vec<DegreeResult<T>> {
        traversal::degree_order(&self.edges, top_n)
            .into_iter()
            .filter_map(|(slot, degree)| {
                self.vertices.get(slot).map(|vertex| DegreeResult {
                    vertex: vertex.clone(),
                    slot,
                    degree,
                })
            })
            .collect()
    }
}

impl<T: PartialEq, S: EdgeStorage> Default for Graph<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward cursor over one vertex's neighbours that does not borrow the graph.
///
/// Any structural change to the graph after the cursor was taken (a vertex or
/// edge added or removed) makes the next [`advance`](NeighborCursor::advance)
/// fail with `IteratorInvalidated`. Pass the graph the cursor came from.
#[derive(Debug, Clone, Copy)]
pub struct NeighborCursor {
    slot: Slot,
    position: usize,
    generation: Generation,
}

impl NeighborCursor {
    pub fn advance<'a, T, S: EdgeStorage>(
        &mut self,
        graph: &'a Graph<T, S>,
    ) -> Result<Option<&'a T>> {
        self.generation.check(graph.generation)?;
        match graph.edges.next_neighbor(self.slot, self.position) {
            Some((neighbor, resume)) => {
                self.position = resume;
                Ok(graph.vertices.get(neighbor))
            }
            None => Ok(None),
        }
    }
}
