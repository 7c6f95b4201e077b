//! seqagg - sum and maximum over fixed integer sequences.
//!
//! The library holds the aggregation core and the report plumbing; the
//! `seqagg` binary wires them to the command line.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

pub use analysis::{max, sum, summarize};
pub use error::{AggregateError, Result};
pub use models::{AggregateSummary, NamedSequence, NumericSequence, Report};
