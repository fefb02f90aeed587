//! Typed errors for the query pipeline.

use thiserror::Error;

/// Failures of the pure query pipeline.
///
/// `EmptyRange` is the only per-request error a caller is expected to
/// recover from (by rendering a "no data" state); the others indicate a bad
/// selector or a configuration defect and should be surfaced, not swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("window ordinal {0} is out of range 0..=6")]
    InvalidSelection(usize),
    #[error("unknown price field \"{0}\" (expected open, high, low or close)")]
    InvalidField(String),
    #[error("no records in the selected range")]
    EmptyRange,
    #[error("instrument \"{0}\" is not in the loaded catalog")]
    UnknownInstrument(String),
}
