// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimality filter over a stream of index triples.

use crate::triple::IndexTriple;

/// Iterator adapter passing only triples with c >= a + b + 1.
///
/// Preserves the order of the wrapped iterator. Restartable whenever the
/// wrapped iterator is `Clone`.
#[derive(Debug, Clone)]
pub struct MinimalTriples<I> {
    inner: I,
}

impl<I> MinimalTriples<I>
where
    I: Iterator<Item = IndexTriple>,
{
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I> Iterator for MinimalTriples<I>
where
    I: Iterator<Item = IndexTriple>,
{
    type Item = IndexTriple;

    fn next(&mut self) -> Option<IndexTriple> {
        self.inner.by_ref().find(|t| t.is_minimal())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Extension for chaining the filter onto any triple iterator.
pub trait Minimal: Iterator<Item = IndexTriple> + Sized {
    fn minimal(self) -> MinimalTriples<Self> {
        MinimalTriples::new(self)
    }
}

impl<I: Iterator<Item = IndexTriple>> Minimal for I {}
