//! Data models for sequence aggregation.
//!
//! This module contains the fixed-length sequences the program works on
//! and the summary and report structures produced from them.

use crate::error::{AggregateError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numbers used when no config file or CLI override supplies any.
pub const BUILTIN_NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

/// Names used when no config file or CLI override supplies any.
pub const BUILTIN_NAMES: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// Write items as `[a, b, c]`.
fn write_bracketed<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

/// An ordered, fixed-length sequence of integers.
///
/// The backing storage is a boxed slice, so once built the sequence can
/// neither grow nor shrink. Aggregation borrows it through [`as_slice`].
///
/// [`as_slice`]: NumericSequence::as_slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericSequence(Box<[i32]>);

impl NumericSequence {
    /// Creates a sequence from any collection of integers.
    pub fn new(values: impl Into<Box<[i32]>>) -> Self {
        Self(values.into())
    }

    /// The built-in `[1, 2, 3, 4, 5]` sequence.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_NUMBERS)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i32>> for NumericSequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for NumericSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.as_slice())
    }
}

/// An ordered, fixed-length sequence of text labels. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedSequence(Box<[String]>);

impl NamedSequence {
    /// Creates a sequence from any collection of labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// The built-in `[Alice, Bob, Charlie]` sequence.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_NAMES)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NamedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.as_slice())
    }
}

/// Sum and maximum of a sequence, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Number of elements visited.
    pub len: usize,
    /// Arithmetic sum, widened so that `i32` inputs cannot overflow it.
    pub sum: i64,
    /// Largest element, absent for an empty sequence.
    pub max: Option<i32>,
}

impl AggregateSummary {
    /// Returns the maximum, or `EmptySequence` when there was no input.
    pub fn require_max(&self) -> Result<i32> {
        self.max
            .ok_or(AggregateError::EmptySequence { operation: "max" })
    }
}

/// Metadata about a generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Version of the tool that produced the report.
    pub tool_version: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Where the input data came from (`built-in`, `cli`, or a config path).
    pub source: String,
}

/// Everything the program prints, in serializable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub numbers: NumericSequence,
    pub names: NamedSequence,
    pub summary: AggregateSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_display() {
        assert_eq!(NumericSequence::builtin().to_string(), "[1, 2, 3, 4, 5]");
        assert_eq!(NumericSequence::new(vec![-7]).to_string(), "[-7]");
        assert_eq!(NumericSequence::new(Vec::<i32>::new()).to_string(), "[]");
    }

    #[test]
    fn test_names_display_preserves_order() {
        let names = NamedSequence::new(["Alice", "Bob", "Charlie"]);
        assert_eq!(names.to_string(), "[Alice, Bob, Charlie]");

        let reversed = NamedSequence::new(["Charlie", "Bob", "Alice"]);
        assert_eq!(reversed.to_string(), "[Charlie, Bob, Alice]");
    }

    #[test]
    fn test_require_max() {
        let summary = AggregateSummary {
            len: 2,
            sum: 3,
            max: Some(2),
        };
        assert_eq!(summary.require_max(), Ok(2));

        let empty = AggregateSummary {
            len: 0,
            sum: 0,
            max: None,
        };
        assert_eq!(
            empty.require_max(),
            Err(AggregateError::EmptySequence { operation: "max" })
        );
    }

    #[test]
    fn test_sequences_serialize_as_arrays() {
        let json = serde_json::to_string(&NumericSequence::builtin()).unwrap();
        assert_eq!(json, "[1,2,3,4,5]");

        let names: NamedSequence = serde_json::from_str(r#"["x","y"]"#).unwrap();
        assert_eq!(names.as_slice(), ["x".to_string(), "y".to_string()]);
    }
}
