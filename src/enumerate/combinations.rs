// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of non-decreasing index triples.
//!
//! # Ordering
//!
//! Triples are produced in lexicographic order of (a, b, c):
//! (2, 2, 2), (2, 2, 3), ..., (2, 2, U-1), (2, 3, 3), ... , (U-1, U-1, U-1).
//! The grouping downstream keeps this order, which makes output deterministic.
//!
//! # Example
//!
//! For bound 5 the indices are drawn from {2, 3, 4}:
//! - (2, 2, 2), (2, 2, 3), (2, 2, 4)
//! - (2, 3, 3), (2, 3, 4), (2, 4, 4)
//! - (3, 3, 3), (3, 3, 4), (3, 4, 4)
//! - (4, 4, 4)
//!
//! that is, C(3 + 2, 3) = 10 triples in total.

use crate::constants::{triple_count, MIN_INDEX};
use crate::triple::IndexTriple;

/// Lazy iterator over every (a, b, c) with `MIN_INDEX <= a <= b <= c < bound`.
///
/// Cloning the iterator (or calling [`IndexTriples::new`] again) restarts the
/// enumeration from the current position (or from scratch).
#[derive(Debug, Clone)]
pub struct IndexTriples {
    bound: usize,
    next: Option<(usize, usize, usize)>,
    remaining: usize,
}

impl IndexTriples {
    pub fn new(bound: usize) -> Self {
        let next = if bound > MIN_INDEX {
            Some((MIN_INDEX, MIN_INDEX, MIN_INDEX))
        } else {
            None
        };
        Self {
            bound,
            next,
            remaining: triple_count(bound),
        }
    }

    /// The exclusive upper bound on indices.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Successor of (a, b, c) in lexicographic order, if any.
    fn successor(&self, (a, b, c): (usize, usize, usize)) -> Option<(usize, usize, usize)> {
        let last = self.bound - 1;
        if c < last {
            Some((a, b, c + 1))
        } else if b < last {
            Some((a, b + 1, b + 1))
        } else if a < last {
            Some((a + 1, a + 1, a + 1))
        } else {
            None
        }
    }
}

impl Iterator for IndexTriples {
    type Item = IndexTriple;

    fn next(&mut self) -> Option<IndexTriple> {
        let current = self.next?;
        self.next = self.successor(current);
        self.remaining -= 1;
        let (a, b, c) = current;
        Some(IndexTriple::new(a, b, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IndexTriples {}

impl std::iter::FusedIterator for IndexTriples {}
