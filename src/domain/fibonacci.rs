use std::iter::FusedIterator;

use tracing::instrument;

/// Unbounded Fibonacci sequence: 0, 1, 1, 2, 3, 5, 8, ...
///
/// Holds only the next two values. Additions wrap at `u128::MAX`, so the
/// sequence never ends and never panics; from index 187 on the values are
/// reduced modulo 2^128.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    prev_prev: u128,
    prev: u128,
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Fibonacci {
    #[instrument(level = "trace")]
    pub fn new() -> Self {
        Self {
            prev_prev: 0,
            prev: 1,
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u128;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.prev_prev;
        let next = self.prev_prev.wrapping_add(self.prev);
        self.prev_prev = self.prev;
        self.prev = next;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Fibonacci {}

/// Returns the Fibonacci numbers as an infinite lazy sequence.
pub fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}
