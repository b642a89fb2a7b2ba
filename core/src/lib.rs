//! maze-graph-core: In-memory undirected graph engine.
//!
//! A pure Rust library for modelling mazes as graphs: rooms are vertices,
//! halls are undirected edges. One [`Graph`] type is generic over its edge
//! storage (adjacency list, boolean matrix, weighted matrix) and provides
//! BFS, DFS and shortest-path queries implemented once for all of them.
//!
//! The small container substrate the engine runs on (growable sequence,
//! linked chain, stack, queue) is exported too. Container misuse is an
//! [`Error`]; graph queries that miss are not, and return empty results.

mod chain;
mod config;
mod error;
mod generation;
mod graph;
mod queue;
mod sequence;
mod stack;
mod storage;
mod traversal;
mod vertex_index;

pub use chain::{ChainCursor, ChainIter, SinglyLinkedChain};
pub use config::{GraphConfig, DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};
pub use error::{Error, Result};
pub use generation::Generation;
pub use graph::{AdjListGraph, Graph, MatrixGraph, NeighborCursor, WeightedGraph};
pub use queue::Queue;
pub use sequence::{GrowableSequence, SequenceCursor};
pub use stack::Stack;
pub use storage::{
    AdjacencyList, AdjacencyMatrix, BoolMatrix, EdgeStorage, MatrixCell, Neighbors, WeightMatrix,
    NO_EDGE,
};
pub use traversal::{DegreeResult, Walk, WalkKind};
pub use vertex_index::{Slot, VertexIndex};
