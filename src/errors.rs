// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the triple search.

use num_bigint::BigInt;

/// Errors that can stop a run.
///
/// None of these are transient: the computation is pure, so every error is a
/// configuration or logic error and there is nothing to retry.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A triple refers to an index past the end of the generated sequence.
    #[error("index {index} out of generated range (sequence length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The m-value of interest has no group at all.
    #[error("m = {m} not found among minimal triples")]
    MissingMValue { m: BigInt },

    /// The uniqueness property does not hold for the grouping.
    #[error("m = {m} has {count} minimal triples, expected {expected}")]
    PropertyViolated {
        m: BigInt,
        count: usize,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
