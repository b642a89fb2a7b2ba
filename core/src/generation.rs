//! Modification generations for fail-fast cursors.
//!
//! Every mutable collection in this crate carries a monotonic generation that
//! is bumped on each structural mutation (anything that adds, removes or
//! reorders elements). A cursor records the generation it was taken at and
//! compares it against the collection's current value on every advance; a
//! mismatch surfaces as [`Error::IteratorInvalidated`] instead of stale data.
//!
//! Value-only updates (overwriting an element in place, re-weighting an
//! existing edge) do not bump the generation.

use std::fmt;

use crate::error::{Error, Result};

/// Monotonic modification counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// The generation following this one. Wraps on overflow.
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    /// Advance in place.
    pub fn bump(&mut self) {
        *self = self.next();
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Fail with `IteratorInvalidated` unless `current` is still `self`.
    pub fn check(self, current: Generation) -> Result<()> {
        if self == current {
            Ok(())
        } else {
            Err(Error::IteratorInvalidated {
                expected: self,
                found: current,
            })
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_is_monotonic() {
        let mut g = Generation::default();
        assert_eq!(g.value(), 0);
        g.bump();
        g.bump();
        assert_eq!(g.value(), 2);
        assert!(g > Generation::default());
    }

    #[test]
    fn test_check_same_generation() {
        let g = Generation::default().next();
        assert_eq!(g.check(g), Ok(()));
    }

    #[test]
    fn test_check_stale_generation() {
        let taken = Generation::default();
        let now = taken.next();
        assert_eq!(
            taken.check(now),
            Err(Error::IteratorInvalidated {
                expected: taken,
                found: now,
            })
        );
    }

    #[test]
    fn test_wraps_at_max() {
        let g = Generation(u64::MAX);
        assert_eq!(g.next().value(), 0);
    }
}
