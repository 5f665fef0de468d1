// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable during a run).
//!
//! - Statistics (counters updated as triples are scored and grouped)

pub mod statistics;

pub use statistics::{Counters, Statistics};
