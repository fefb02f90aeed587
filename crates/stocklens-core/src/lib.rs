//! Core types for the stocklens price viewer.
//!
//! This crate provides the pure half of the pipeline:
//! - `PriceRecord` / `PriceTable` - OHLC rows and ordered tables
//! - `WindowChoice` / `Lookback` - lookback selection and resolution dispatch
//! - `InstrumentSeries` - the two tables loaded per instrument
//! - `extrema` - min/max summaries over a table

pub mod error;
pub mod record;
pub mod series;
pub mod summary;
pub mod table;
pub mod window;

pub use error::QueryError;
pub use record::{PriceField, PriceRecord, SECS_PER_DAY};
pub use series::{FilteredSelection, InstrumentSeries};
pub use summary::{extrema, Extrema};
pub use table::PriceTable;
pub use window::{Lookback, Resolution, WindowChoice};
