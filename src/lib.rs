// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for m-values shared by more than one minimal Fibonacci triple.
//!
//! Supports the proof of Lemma 4.5: among minimal triples (a, b, c) with
//! c < 500, m = 21 is the only positive m-value with more than one triple.
//!
//! # Architecture
//!
//! The search is a single pass through a pipeline of lazy iterators:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - The Fibonacci sequence F(0) ..= F(bound - 1), as big integers
//!
//! ## Tier 2: DYNAMIC Data (Built during the run)
//!
//! - Statistics - counts of scored, discarded and grouped triples
//! - MValueGroups - the grouping, read-only once built
//!
//! # Search Algorithm
//!
//! 1. **IndexTriples**: every (a, b, c) with 2 <= a <= b <= c < bound, in lexicographic order
//! 2. **MinimalTriples**: keep only c >= a + b + 1 (Lemma 2.3)
//! 3. **group_by_m_value**: m = fa² + fb² + fc² − 3·fa·fb·fc; drop m <= 0; group by m
//! 4. **Report**: print every shared m-value, then the group for m = 21
//!
//! # Performance
//!
//! The number of candidate triples grows cubically with the bound: 20,708,500
//! at the canonical bound of 500, of which 10,199,372 are minimal and grouped.
//! Use a release build for bounds of that size.

pub mod constants;
pub mod context;
pub mod engine;
pub mod enumerate;
pub mod errors;
pub mod memo;
pub mod report;
pub mod state;
pub mod triple;

// Re-export commonly used types
pub use context::{SearchContext, SearchOutcome};
pub use engine::{group_by_m_value, MValueGroups};
pub use errors::{Error, Result};
pub use memo::Sequence;
pub use triple::{IndexTriple, ScoredTriple, ValueTriple};
