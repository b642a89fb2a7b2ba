//! Construction-time settings for graphs and their backing storage.

/// Initial slot capacity when nothing else is requested.
pub const DEFAULT_CAPACITY: usize = 10;

/// Lower bound for any requested capacity. Doubling from zero never grows.
pub const MIN_CAPACITY: usize = 1;

/// Upper bound for a requested initial capacity. Matrix backends allocate
/// `capacity²` cells up front.
pub const MAX_CAPACITY: usize = 1 << 16;

/// Settings applied when a graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Vertex slots reserved before the first growth.
    pub initial_capacity: usize,
}

impl GraphConfig {
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }.clamped()
    }

    /// Clamp every setting into its accepted range.
    pub fn clamped(self) -> Self {
        Self {
            initial_capacity: clamp_capacity(self.initial_capacity),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

pub(crate) fn clamp_capacity(capacity: usize) -> usize {
    capacity.clamp(MIN_CAPACITY, MAX_CAPACITY)
}
