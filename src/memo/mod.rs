// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Data computed once before enumeration starts and only read afterwards:
//! - The Fibonacci sequence up to the index bound

pub mod sequence;

pub use sequence::Sequence;
