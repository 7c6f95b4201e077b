//! Aggregation over numeric sequences.

pub mod aggregator;

pub use aggregator::*;
