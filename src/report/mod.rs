// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text report of a grouping.
//!
//! Output has one line per shared m-value, in first-seen order:
//!
//! ```text
//! m = 21, count = 2
//! ```
//!
//! followed by the raw group for the m-value of interest:
//!
//! ```text
//! [((2, 3, 6), (1, 2, 8)), ((3, 3, 7), (2, 2, 13))]
//! ```

use crate::engine::MValueGroups;
use crate::errors::Result;
use crate::triple::ScoredTriple;
use num_bigint::BigInt;
use std::fmt;
use std::io::Write;

/// Displays a group as a bracketed, comma-separated list of scored triples.
#[derive(Debug, Clone, Copy)]
pub struct GroupDump<'g, 'a>(pub &'g [ScoredTriple<'a>]);

impl fmt::Display for GroupDump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, triple) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", triple)?;
        }
        write!(f, "]")
    }
}

/// Write one line per m-value shared by more than one triple.
///
/// Returns the number of lines written.
pub fn write_shared<W: Write>(groups: &MValueGroups<'_>, out: &mut W) -> Result<usize> {
    let mut lines = 0;
    for (m, count) in groups.shared() {
        writeln!(out, "m = {}, count = {}", m, count)?;
        lines += 1;
    }
    Ok(lines)
}

/// Write the full report: shared m-values, then the group for `m_of_interest`.
///
/// # Errors
///
/// [`crate::Error::MissingMValue`] if `m_of_interest` has no group. The
/// shared-value lines are written before the lookup, so they still appear.
pub fn write_report<W: Write>(
    groups: &MValueGroups<'_>,
    m_of_interest: &BigInt,
    out: &mut W,
) -> Result<()> {
    let shared = write_shared(groups, out)?;
    tracing::info!(shared, "m-values with more than one minimal triple");
    let group = groups.require(m_of_interest)?;
    writeln!(out, "{}", GroupDump(group))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SearchContext;
    use crate::Error;

    #[test]
    fn test_group_dump_empty() {
        assert_eq!(GroupDump(&[]).to_string(), "[]");
    }

    #[test]
    fn test_report_bound_10() {
        let ctx = SearchContext::new(10);
        let outcome = ctx.search().unwrap();
        let mut out = Vec::new();
        write_report(&outcome.groups, &BigInt::from(21), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "m = 21, count = 2\n[((2, 3, 6), (1, 2, 8)), ((3, 3, 7), (2, 2, 13))]\n"
        );
    }

    #[test]
    fn test_report_single_member_group() {
        let ctx = SearchContext::new(7);
        let outcome = ctx.search().unwrap();
        let mut out = Vec::new();
        write_report(&outcome.groups, &BigInt::from(21), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[((2, 3, 6), (1, 2, 8))]\n"
        );
    }

    #[test]
    fn test_report_missing_m_value() {
        let ctx = SearchContext::new(2);
        let outcome = ctx.search().unwrap();
        let mut out = Vec::new();
        let err = write_report(&outcome.groups, &BigInt::from(21), &mut out).unwrap_err();
        assert!(matches!(err, Error::MissingMValue { .. }));
        assert!(out.is_empty());
    }
}
