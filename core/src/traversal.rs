//! Traversal and shortest-path algorithms.
//!
//! Implemented once over [`EdgeStorage`] and shared by every backend. All
//! functions here work on slots; [`Graph`](crate::Graph) resolves values to
//! slots on the way in and maps the resulting slot sequences back to values.
//!
//! Neighbour enumeration order is whatever the storage yields (insertion
//! order for the adjacency list, ascending slot for matrices), which makes
//! BFS and DFS output deterministic per backend.

use std::iter::FusedIterator;

use crate::generation::Generation;
use crate::queue::Queue;
use crate::stack::Stack;
use crate::storage::EdgeStorage;
use crate::vertex_index::Slot;

/// Which query produced a [`Walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkKind {
    BreadthFirst,
    DepthFirst,
    ShortestPath,
}

/// One-pass, eagerly materialised traversal result.
///
/// A walk owns its vertex values, so later mutation of the graph cannot
/// corrupt it; [`generation`](Walk::generation) tells which graph state it
/// describes. Missing or unreachable endpoints produce an empty walk, never
/// an error.
#[derive(Debug, Clone)]
pub struct Walk<T> {
    kind: WalkKind,
    generation: Generation,
    items: std::vec::IntoIter<T>,
}

impl<T> Walk<T> {
    pub(crate) fn new(kind: WalkKind, generation: Generation, items: Vec<T>) -> Self {
        Self {
            kind,
            generation,
            items: items.into_iter(),
        }
    }

    pub(crate) fn empty(kind: WalkKind, generation: Generation) -> Self {
        Self::new(kind, generation, Vec::new())
    }

    pub fn kind(&self) -> WalkKind {
        self.kind
    }

    /// Graph generation the walk was computed at.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Vertices not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> Iterator for Walk<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for Walk<T> {
    fn next_back(&mut self) -> Option<T> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for Walk<T> {}

impl<T> FusedIterator for Walk<T> {}

/// Breadth-first visiting order from `start`.
///
/// Vertices are marked visited when enqueued, so each reachable slot appears
/// exactly once.
pub(crate) fn bfs_order<S: EdgeStorage>(edges: &S, start: Slot) -> Vec<Slot> {
    let n = edges.slot_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut queue = Queue::new();
    let mut order = Vec::new();

    queue.enqueue(start);
    visited[start] = true;

    while let Ok(current) = queue.dequeue() {
        order.push(current);
        for neighbor in edges.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.enqueue(neighbor);
            }
        }
    }

    order
}

/// Depth-first discovery order from `start`.
///
/// Mark-on-push: a vertex is recorded and marked the moment it is pushed.
/// Each step re-scans the stack top for its first unvisited neighbour and
/// backtracks (pops) when there is none.
pub(crate) fn dfs_order<S: EdgeStorage>(edges: &S, start: Slot) -> Vec<Slot> {
    let n = edges.slot_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut stack = Stack::new();
    let mut order = Vec::new();

    stack.push(start);
    visited[start] = true;
    order.push(start);

    while let Ok(&top) = stack.peek() {
        match edges.neighbors(top).find(|&neighbor| !visited[neighbor]) {
            Some(next) => {
                visited[next] = true;
                order.push(next);
                stack.push(next);
            }
            None => {
                let _ = stack.pop();
            }
        }
    }

    order
}

/// Fewest-edge path from `start` to `target` using BFS with parent tracking.
///
/// Stops the moment `target` is first discovered. Returns `None` if it is
/// never reached.
pub(crate) fn bfs_path<S: EdgeStorage>(
    edges: &S,
    start: Slot,
    target: Slot,
) -> Option<Vec<Slot>> {
    let n = edges.slot_count();
    if start >= n || target >= n {
        return None;
    }

    let mut visited = vec![false; n];
    let mut parent: Vec<Option<Slot>> = vec![None; n];
    let mut queue = Queue::new();

    visited[start] = true;
    queue.enqueue(start);

    'search: while let Ok(current) = queue.dequeue() {
        if current == target {
            break;
        }
        for neighbor in edges.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                parent[neighbor] = Some(current);
                if neighbor == target {
                    break 'search;
                }
                queue.enqueue(neighbor);
            }
        }
    }

    if !visited[target] {
        return None;
    }
    Some(reconstruct_path(&parent, target))
}

/// Least-total-weight path from `start` to `target` (Dijkstra).
///
/// Linear-scan extraction of the closest unsettled vertex, O(V²); ties go to
/// the lowest slot. Stops when `target` is settled or nothing reachable is
/// left. Only real edges are relaxed.
pub(crate) fn dijkstra_path<S: EdgeStorage>(
    edges: &S,
    start: Slot,
    target: Slot,
) -> Option<Vec<Slot>> {
    let n = edges.slot_count();
    if start >= n || target >= n {
        return None;
    }

    // `None` = not reached yet. A reached distance may itself overflow to +inf.
    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut parent: Vec<Option<Slot>> = vec![None; n];

    dist[start] = Some(0.0);

    for _ in 0..n {
        let mut closest: Option<(Slot, f64)> = None;
        for slot in 0..n {
            if settled[slot] {
                continue;
            }
            let Some(d) = dist[slot] else { continue };
            match closest {
                Some((_, best)) if d >= best => {}
                _ => closest = Some((slot, d)),
            }
        }

        let Some((u, du)) = closest else { break };
        settled[u] = true;
        if u == target {
            break;
        }

        for v in edges.neighbors(u) {
            if settled[v] {
                continue;
            }
            let Some(w) = edges.weight(u, v) else {
                continue;
            };
            let candidate = du + w;
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                parent[v] = Some(u);
            }
        }
    }

    if dist[target].is_none() {
        return None;
    }
    Some(reconstruct_path(&parent, target))
}

/// Walk parent pointers from `target` back to the root, then reverse.
fn reconstruct_path(parent: &[Option<Slot>], target: Slot) -> Vec<Slot> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    path
}

/// Degree information for a single vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeResult<T> {
    pub vertex: T,
    pub slot: Slot,
    /// Number of neighbour entries: parallel list edges count once each.
    pub degree: usize,
}

/// Slots ranked by degree, descending; ties broken by slot ascending.
///
/// If `top_n` is 0, returns all slots.
pub(crate) fn degree_order<S: EdgeStorage>(edges: &S, top_n: usize) -> Vec<(Slot, usize)> {
    let mut ranked: Vec<(Slot, usize)> = (0..edges.slot_count())
        .map(|slot| (slot, edges.neighbors(slot).count()))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    if top_n > 0 && top_n < ranked.len() {
        ranked.truncate(top_n);
    }
    ranked
}
