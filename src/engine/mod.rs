// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scoring and grouping of minimal triples.
//!
//! This module consumes a stream of index triples, looks up their Fibonacci
//! values, computes each m-value, and groups the triples by m-value.
//!
//! # Pipeline
//!
//! ```text
//! IndexTriples(bound) --minimal()--> group_by_m_value(.., fibs) --> MValueGroups
//! ```
//!
//! 1. Look up (fa, fb, fc) in the sequence; an index past its end is an error
//! 2. Compute m = fa² + fb² + fc² − 3·fa·fb·fc
//! 3. Discard the triple if m <= 0
//! 4. Otherwise append it to the group for m, creating the group if needed
//!
//! Groups remember the order in which their m-value was first seen, and each
//! group keeps its triples in enumeration order.
//!
//! # Example
//!
//! ```
//! use fib_triples::engine::group_by_m_value;
//! use fib_triples::enumerate::{IndexTriples, Minimal};
//! use fib_triples::memo::Sequence;
//! use fib_triples::state::Statistics;
//! use num_bigint::BigInt;
//!
//! let fibs = Sequence::generate(10);
//! let mut stats = Statistics::new();
//! let groups = group_by_m_value(IndexTriples::new(10).minimal(), &fibs, &mut stats).unwrap();
//!
//! assert_eq!(groups.shared(), vec![(&BigInt::from(21), 2)]);
//! ```

use crate::errors::{Error, Result};
use crate::memo::Sequence;
use crate::state::{Counters, Statistics};
use crate::triple::{IndexTriple, ScoredTriple};
use num_bigint::BigInt;
use num_traits::Signed;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Group<'a> {
    /// Position of this m-value in first-seen order.
    first_seen: usize,
    triples: Vec<ScoredTriple<'a>>,
}

/// Mapping from positive m-value to the scored triples producing it.
///
/// Iteration is in first-seen order of m-values. Values borrow from the
/// [`Sequence`] they were looked up in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MValueGroups<'a> {
    groups: HashMap<BigInt, Group<'a>>,
}

impl<'a> MValueGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `triple` to the group for `m`, creating the group if absent.
    ///
    /// Returns true if a new group was created.
    pub fn insert(&mut self, m: BigInt, triple: ScoredTriple<'a>) -> bool {
        let next_position = self.groups.len();
        let mut created = false;
        self.groups
            .entry(m)
            .or_insert_with(|| {
                created = true;
                Group {
                    first_seen: next_position,
                    triples: Vec::with_capacity(1),
                }
            })
            .triples
            .push(triple);
        created
    }

    /// Triples for `m`, if any.
    pub fn get(&self, m: &BigInt) -> Option<&[ScoredTriple<'a>]> {
        self.groups.get(m).map(|g| g.triples.as_slice())
    }

    /// Triples for `m`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingMValue`] if no triple produced `m`.
    pub fn require(&self, m: &BigInt) -> Result<&[ScoredTriple<'a>]> {
        self.get(m)
            .ok_or_else(|| Error::MissingMValue { m: m.clone() })
    }

    /// Number of distinct m-values.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped triples.
    pub fn triple_count(&self) -> usize {
        self.groups.values().map(|g| g.triples.len()).sum()
    }

    /// All groups in first-seen order of their m-value.
    pub fn iter(&self) -> impl Iterator<Item = (&BigInt, &[ScoredTriple<'a>])> + '_ {
        let mut ordered: Vec<_> = self.groups.iter().collect();
        ordered.sort_unstable_by_key(|(_, g)| g.first_seen);
        ordered
            .into_iter()
            .map(|(m, g)| (m, g.triples.as_slice()))
    }

    /// `(m, count)` for every m-value shared by more than one triple.
    pub fn shared(&self) -> Vec<(&BigInt, usize)> {
        self.iter()
            .filter(|(_, triples)| triples.len() > 1)
            .map(|(m, triples)| (m, triples.len()))
            .collect()
    }

    /// Check that `m` is the only m-value with more than one triple.
    ///
    /// This is the property Lemma 4.5 asserts for the canonical bound.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingMValue`] if `m` is absent
    /// - [`Error::PropertyViolated`] if `m` has a single triple, or if any other
    ///   m-value has more than one
    pub fn verify_unique_shared(&self, m: &BigInt) -> Result<()> {
        let count = self.require(m)?.len();
        if count < 2 {
            return Err(Error::PropertyViolated {
                m: m.clone(),
                count,
                expected: "more than 1",
            });
        }
        if let Some((other, count)) = self.shared().into_iter().find(|(k, _)| *k != m) {
            return Err(Error::PropertyViolated {
                m: other.clone(),
                count,
                expected: "exactly 1",
            });
        }
        Ok(())
    }
}

/// Score every triple from `triples` against `fibs` and group by m-value.
///
/// Triples with m <= 0 are counted and dropped.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if a triple refers past the end of `fibs`;
/// this means the enumeration bound exceeds the generated sequence.
pub fn group_by_m_value<'a, I>(
    triples: I,
    fibs: &'a Sequence,
    stats: &mut Statistics,
) -> Result<MValueGroups<'a>>
where
    I: IntoIterator<Item = IndexTriple>,
{
    let mut groups = MValueGroups::new();
    for indices in triples {
        stats.increment_counter(Counters::Scored);
        let values = indices.values(fibs)?;
        let m = values.m_value();
        if !m.is_positive() {
            tracing::trace!(%indices, %m, "discarding non-positive m-value");
            stats.increment_counter(Counters::NonPositive);
            continue;
        }
        if groups.insert(m, ScoredTriple { indices, values }) {
            stats.increment_counter(Counters::MValues);
        }
        stats.increment_counter(Counters::Grouped);
    }
    tracing::debug!(
        m_values = groups.len(),
        triples = stats.get(Counters::Grouped),
        "grouping complete"
    );
    Ok(groups)
}
