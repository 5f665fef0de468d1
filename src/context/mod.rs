// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO data and the run configuration.
//!
//! The SearchContext owns:
//! - Tier 1 (MEMO): The Fibonacci sequence, generated once
//! - The index bound, shared by generation and enumeration
//!
//! Because the sequence is generated with exactly `bound` entries, every
//! enumerated index has a value; the lookup error in the grouper can only
//! occur when the stages are wired with mismatched bounds.
//!
//! # Example
//!
//! ```
//! use fib_triples::context::SearchContext;
//! use num_bigint::BigInt;
//!
//! let ctx = SearchContext::new(10);
//! let outcome = ctx.search().unwrap();
//! assert_eq!(outcome.groups.require(&BigInt::from(21)).unwrap().len(), 2);
//! ```

use crate::engine::{group_by_m_value, MValueGroups};
use crate::enumerate::{IndexTriples, Minimal};
use crate::errors::Result;
use crate::memo::Sequence;
use crate::state::Statistics;

/// Everything a single run needs, built once and read afterwards.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Exclusive upper bound on indices.
    pub bound: usize,
    /// F(0) ..= F(bound - 1)
    pub fibs: Sequence,
}

/// Result of a run: the grouping plus the counters collected while building it.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    pub groups: MValueGroups<'a>,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for `bound`, generating the sequence.
    pub fn new(bound: usize) -> Self {
        tracing::info!(bound, "generating Fibonacci sequence");
        Self {
            bound,
            fibs: Sequence::generate(bound),
        }
    }

    /// Enumerate, filter, score and group every minimal triple below the bound.
    ///
    /// Can be called repeatedly; each call starts from scratch and yields an
    /// identical grouping.
    pub fn search(&self) -> Result<SearchOutcome<'_>> {
        let triples = IndexTriples::new(self.bound);
        tracing::info!(
            bound = self.bound,
            candidates = triples.len(),
            "enumerating index triples"
        );
        let mut statistics = Statistics::new();
        let groups = group_by_m_value(triples.minimal(), &self.fibs, &mut statistics)?;
        statistics.log();
        Ok(SearchOutcome { groups, statistics })
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(crate::constants::C_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Counters;

    #[test]
    fn test_sequence_matches_bound() {
        let ctx = SearchContext::new(25);
        assert_eq!(ctx.fibs.len(), 25);
    }

    #[test]
    fn test_search_bound_10() {
        let ctx = SearchContext::new(10);
        let outcome = ctx.search().unwrap();
        assert_eq!(outcome.groups.len(), 21);
        assert_eq!(outcome.statistics.get(Counters::Scored), 22);
    }

    #[test]
    fn test_search_twice_is_identical() {
        let ctx = SearchContext::new(20);
        let first = ctx.search().unwrap();
        let second = ctx.search().unwrap();
        assert_eq!(first.groups, second.groups);
        assert_eq!(first.statistics, second.statistics);
    }

    #[test]
    fn test_search_bound_2_is_empty() {
        let ctx = SearchContext::new(2);
        let outcome = ctx.search().unwrap();
        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.statistics.get(Counters::Scored), 0);
    }
}
