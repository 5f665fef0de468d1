// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use fib_triples::{IndexTriple, ScoredTriple};

/// Index triples of a group, as plain tuples for easy comparison.
pub fn index_tuples(group: &[ScoredTriple<'_>]) -> Vec<(usize, usize, usize)> {
    group
        .iter()
        .map(|s| (s.indices.a(), s.indices.b(), s.indices.c()))
        .collect()
}

/// Brute-force reference count of minimal triples below `bound`.
pub fn reference_minimal_count(bound: usize) -> usize {
    let mut count = 0;
    for a in 2..bound {
        for b in a..bound {
            for c in b..bound {
                if c >= a + b + 1 {
                    count += 1;
                }
            }
        }
    }
    count
}

/// The two known triples with m = 21.
pub fn known_21_triples() -> [IndexTriple; 2] {
    [IndexTriple::new(2, 3, 6), IndexTriple::new(3, 3, 7)]
}
