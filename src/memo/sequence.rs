// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Fibonacci sequence, generated once per run.
//!
//! # Generation
//!
//! Values follow F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2). F(499) has 104
//! decimal digits, so values are stored as [`BigUint`].
//!
//! # Example
//!
//! ```
//! use fib_triples::memo::Sequence;
//!
//! let fibs = Sequence::generate(8);
//! assert_eq!(fibs.len(), 8);
//! assert_eq!(fibs.get(7).unwrap().to_string(), "13");
//! assert!(fibs.get(8).is_err());
//! ```

use crate::errors::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Indexed Fibonacci values for indices `0..len`.
///
/// Immutable after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<BigUint>,
}

impl Sequence {
    /// Generate the first `n` Fibonacci numbers.
    ///
    /// `n == 0` gives an empty sequence.
    pub fn generate(n: usize) -> Self {
        let mut values = Vec::with_capacity(n);
        let mut a = BigUint::zero();
        let mut b = BigUint::one();
        for _ in 0..n {
            let next = &a + &b;
            values.push(std::mem::replace(&mut a, std::mem::replace(&mut b, next)));
        }
        tracing::debug!(len = n, "generated Fibonacci sequence");
        Self { values }
    }

    /// Value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&BigUint> {
        self.values.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BigUint)> + '_ {
        self.values.iter().enumerate()
    }
}
