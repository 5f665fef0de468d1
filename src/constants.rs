// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named constants for the canonical run.
//!
//! These encode the specific claim being checked (Lemma 4.5): among minimal
//! triples with every index below [`C_MAX`], only [`M_OF_INTEREST`] is shared
//! by more than one triple.

/// Exclusive upper bound on indices for the canonical run.
///
/// Used both as the length of the generated sequence and as the enumeration
/// bound. The number of enumerated triples grows cubically with this value
/// (20,708,500 at 500), so large bounds want a release build.
pub const C_MAX: usize = 500;

/// The m-value whose group is dumped, and which must be present.
pub const M_OF_INTEREST: u64 = 21;

/// Smallest index used in a triple.
///
/// F(0) = 0 and F(1) = F(2) = 1, so indices 0 and 1 add nothing new.
pub const MIN_INDEX: usize = 2;

/// Number of non-decreasing triples drawn from `MIN_INDEX..bound`.
///
/// This is the count of combinations with repetition of 3 from
/// `bound - MIN_INDEX` items, C(n + 2, 3).
pub const fn triple_count(bound: usize) -> usize {
    if bound <= MIN_INDEX {
        return 0;
    }
    let n = bound - MIN_INDEX;
    n * (n + 1) * (n + 2) / 6
}
