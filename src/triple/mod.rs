// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triple types.
//!
//! - IndexTriple: Non-decreasing indices (a, b, c) into the sequence
//! - ValueTriple: The sequence values (F(a), F(b), F(c)), borrowed
//! - ScoredTriple: An index triple together with its values
//!
//! Triples print the way the search report shows them, e.g. `((2, 3, 6), (1, 2, 8))`.

use crate::constants::MIN_INDEX;
use crate::errors::Result;
use crate::memo::Sequence;
use num_bigint::{BigInt, BigUint};
use std::fmt;

/// Indices (a, b, c) with `MIN_INDEX <= a <= b <= c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexTriple {
    a: usize,
    b: usize,
    c: usize,
}

impl IndexTriple {
    /// Create a new triple, panicking if it is not non-decreasing.
    ///
    /// # Panics
    ///
    /// Panics unless `MIN_INDEX <= a <= b <= c`.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self::try_new(a, b, c)
            .unwrap_or_else(|| panic!("Invalid index triple: ({}, {}, {})", a, b, c))
    }

    /// Try to create a new triple, returning None if it is not non-decreasing.
    pub fn try_new(a: usize, b: usize, c: usize) -> Option<Self> {
        if MIN_INDEX <= a && a <= b && b <= c {
            Some(Self { a, b, c })
        } else {
            None
        }
    }

    #[inline]
    pub fn a(self) -> usize {
        self.a
    }

    #[inline]
    pub fn b(self) -> usize {
        self.b
    }

    #[inline]
    pub fn c(self) -> usize {
        self.c
    }

    /// The minimality condition c >= a + b + 1 (Lemma 2.3).
    ///
    /// Triples failing it reduce to smaller triples with the same m-value.
    #[inline]
    pub fn is_minimal(self) -> bool {
        self.c > self.a + self.b
    }

    /// Look up (F(a), F(b), F(c)).
    ///
    /// # Errors
    ///
    /// [`crate::Error::IndexOutOfRange`] if `c` is past the end of `fibs`.
    pub fn values(self, fibs: &Sequence) -> Result<ValueTriple<'_>> {
        Ok(ValueTriple {
            fa: fibs.get(self.a)?,
            fb: fibs.get(self.b)?,
            fc: fibs.get(self.c)?,
        })
    }
}

impl fmt::Display for IndexTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Sequence values of an index triple, borrowed from the [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTriple<'a> {
    pub fa: &'a BigUint,
    pub fb: &'a BigUint,
    pub fc: &'a BigUint,
}

impl ValueTriple<'_> {
    /// m = fa² + fb² + fc² − 3·fa·fb·fc.
    pub fn m_value(&self) -> BigInt {
        m_value(self.fa, self.fb, self.fc)
    }
}

impl fmt::Display for ValueTriple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.fa, self.fb, self.fc)
    }
}

/// m = fa² + fb² + fc² − 3·fa·fb·fc, computed without loss of precision.
pub fn m_value(fa: &BigUint, fb: &BigUint, fc: &BigUint) -> BigInt {
    let squares = fa * fa + fb * fb + fc * fc;
    let product = fa * fb * fc * 3u32;
    BigInt::from(squares) - BigInt::from(product)
}

/// An index triple together with its sequence values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredTriple<'a> {
    pub indices: IndexTriple,
    pub values: ValueTriple<'a>,
}

impl fmt::Display for ScoredTriple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.indices, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_triple_new() {
        let t = IndexTriple::new(2, 3, 6);
        assert_eq!((t.a(), t.b(), t.c()), (2, 3, 6));
    }

    #[test]
    #[should_panic(expected = "Invalid index triple")]
    fn test_index_triple_decreasing() {
        IndexTriple::new(3, 2, 6);
    }

    #[test]
    fn test_index_triple_try_new() {
        assert!(IndexTriple::try_new(2, 2, 2).is_some());
        assert!(IndexTriple::try_new(1, 2, 3).is_none());
        assert!(IndexTriple::try_new(2, 4, 3).is_none());
    }

    #[test]
    fn test_is_minimal() {
        assert!(IndexTriple::new(2, 3, 6).is_minimal());
        assert!(IndexTriple::new(2, 2, 5).is_minimal());
        assert!(!IndexTriple::new(2, 2, 4).is_minimal());
        assert!(!IndexTriple::new(3, 3, 6).is_minimal());
        assert!(!IndexTriple::new(5, 5, 5).is_minimal());
    }

    #[test]
    fn test_m_value_regression_anchor() {
        // (2, 3, 6) -> (1, 2, 8): 1 + 4 + 64 - 48 = 21
        let fibs = Sequence::generate(10);
        let values = IndexTriple::new(2, 3, 6).values(&fibs).unwrap();
        assert_eq!(values.to_string(), "(1, 2, 8)");
        assert_eq!(values.m_value(), BigInt::from(21));
    }

    #[test]
    fn test_m_value_non_positive() {
        let one = BigUint::from(1u32);
        assert_eq!(m_value(&one, &one, &one), BigInt::from(0));

        let (two, three, five) = (BigUint::from(2u32), BigUint::from(3u32), BigUint::from(5u32));
        // 4 + 9 + 25 - 90
        assert_eq!(m_value(&two, &three, &five), BigInt::from(-52));
    }

    #[test]
    fn test_m_value_large() {
        let fibs = Sequence::generate(500);
        let values = IndexTriple::new(2, 2, 499).values(&fibs).unwrap();
        let fc = BigInt::from(values.fc.clone());
        // fa = fb = 1: m = 2 + fc² - 3·fc
        assert_eq!(values.m_value(), &fc * &fc - &fc * BigInt::from(3) + BigInt::from(2));
    }

    #[test]
    fn test_values_out_of_range() {
        let fibs = Sequence::generate(6);
        let err = IndexTriple::new(2, 3, 6).values(&fibs).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::IndexOutOfRange { index: 6, len: 6 }
        ));
    }

    #[test]
    fn test_scored_triple_display() {
        let fibs = Sequence::generate(8);
        let indices = IndexTriple::new(3, 3, 7);
        let scored = ScoredTriple {
            indices,
            values: indices.values(&fibs).unwrap(),
        };
        assert_eq!(scored.to_string(), "((3, 3, 7), (2, 2, 13))");
    }
}
