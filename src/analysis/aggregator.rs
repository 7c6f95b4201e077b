//! Sum and maximum over numeric sequences.
//!
//! Every operation here is a pure linear scan over a borrowed sequence.

use crate::error::{AggregateError, Result};
use crate::models::{AggregateSummary, NumericSequence};

/// Arithmetic sum of all elements. Zero for an empty sequence.
///
/// The accumulator is `i64`, so no `i32` sequence shorter than 2^32
/// elements can overflow it.
pub fn sum(sequence: &NumericSequence) -> i64 {
    sequence.as_slice().iter().map(|&n| i64::from(n)).sum()
}

/// Largest element of the sequence.
///
/// Starts from the first element and replaces the running maximum only on a
/// strictly greater value, so ties keep the earliest occurrence.
pub fn max(sequence: &NumericSequence) -> Result<i32> {
    let (&first, rest) = sequence
        .as_slice()
        .split_first()
        .ok_or(AggregateError::EmptySequence { operation: "max" })?;

    let mut current = first;
    for &n in rest {
        if n > current {
            current = n;
        }
    }

    Ok(current)
}

/// Length, sum and maximum in a single traversal.
pub fn summarize(sequence: &NumericSequence) -> AggregateSummary {
    let mut summary = AggregateSummary {
        len: 0,
        sum: 0,
        max: None,
    };

    for &n in sequence.as_slice() {
        summary.len += 1;
        summary.sum += i64::from(n);
        summary.max = match summary.max {
            Some(current) if n <= current => Some(current),
            _ => Some(n),
        };
    }

    summary
}
