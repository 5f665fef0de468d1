// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy enumeration of candidate triples.
//!
//! - `combinations`: every non-decreasing triple below a bound
//! - `minimal`: the minimality filter (c >= a + b + 1)
//!
//! # Example
//!
//! ```
//! use fib_triples::enumerate::{IndexTriples, Minimal};
//!
//! let triples = IndexTriples::new(10);
//! assert_eq!(triples.len(), 120);
//! assert_eq!(triples.minimal().count(), 22);
//! ```

pub mod combinations;
pub mod minimal;

pub use combinations::IndexTriples;
pub use minimal::{Minimal, MinimalTriples};
