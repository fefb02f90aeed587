//! Typed errors for archive loading.

use std::path::PathBuf;

use stocklens_core::Resolution;
use thiserror::Error;

/// Failures raised while loading an instrument's archives.
///
/// Any of these is fatal for the affected instrument at startup: the
/// instrument is excluded from the selectable catalog rather than served
/// with holes.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No archive file, or no rows, for one resolution.
    #[error("no {resolution} data found for {symbol}")]
    MissingData { symbol: String, resolution: Resolution },
    /// Duplicate timestamps, unparseable rows, or non-finite prices.
    /// `line` is zero when the defect spans a whole archive.
    #[error("{}:{line}: {reason}", .source_path.display())]
    DataIntegrity {
        source_path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("failed to read archive directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed archive: {0}")]
    Csv(#[from] ::csv::Error),
}
