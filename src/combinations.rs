//! Lazy enumeration of k-element combinations in lexicographic index order.
//!
//! Each combination is identified by an increasing index tuple
//! `i1 < i2 < ... < ik` into the pool, so duplicate values at distinct
//! positions are distinct items. The enumeration is deterministic, which
//! makes "first match" a well-defined tie-break for the search.

use std::iter::FusedIterator;


/// Iterator over the k-element combinations of `pool`.
///
/// Holds the current index tuple and advances it in place: the rightmost
/// index that can still be incremented is bumped and every index to its
/// right is reset to a consecutive run. The enumeration is finite; a fresh
/// iterator restarts it from the first index tuple.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    pool: &'a [i64],
    indices: Vec<usize>,
    k: usize,
    first: bool,
    done: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(pool: &'a [i64], k: usize) -> Self {
        if k > pool.len() {
            return Self {
                pool,
                indices: Vec::new(),
                k,
                first: true,
                done: true,
            };
        }

        Self {
            pool,
            indices: (0..k).collect(),
            k,
            first: true,
            done: false,
        }
    }

    /// The combination selected by the current index tuple.
    fn current(&self) -> Vec<i64> {
        self.indices.iter().map(|&i| self.pool[i]).collect()
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        if self.done {
            return None;
        }

        if self.first {
            self.first = false;
            if self.k == 0 {
                self.done = true;
                return Some(Vec::new()); // single empty combination
            }
            return Some(self.current());
        }

        let n = self.pool.len();

        // Find the rightmost index that can still be incremented
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + n - self.k {
                break;
            }
        }

        // Increment it and reset every index to its right
        self.indices[i] += 1;
        for j in (i + 1)..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(self.current())
    }
}

impl FusedIterator for Combinations<'_> {}
