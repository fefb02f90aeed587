//! stocklens: historical price-series loading and windowing.
//!
//! The store loads per-instrument OHLC archives at two resolutions, serves
//! trailing-window selections over them, and summarizes field extrema. The
//! presentation layer (chart, widgets) is an external caller of the three
//! entry points re-exported here.

pub mod store;

pub use stocklens_config::{Config, ConfigError, Instrument};
pub use stocklens_core::{
    extrema, Extrema, FilteredSelection, InstrumentSeries, Lookback, PriceField, PriceRecord,
    PriceTable, QueryError, Resolution, WindowChoice,
};
pub use stocklens_data::{CsvStore, LoadError, SeriesSource};
pub use store::PriceStore;
