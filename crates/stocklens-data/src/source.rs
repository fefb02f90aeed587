//! Archive source trait definition.

use stocklens_core::{InstrumentSeries, PriceTable, Resolution};

use crate::error::LoadError;

/// Trait for types that can load one instrument's price table.
///
/// The store builds against this seam so tests can substitute an in-memory
/// source for the CSV directory.
pub trait SeriesSource {
    fn load(&self, symbol: &str, resolution: Resolution) -> Result<PriceTable, LoadError>;

    /// Loads both resolutions for one instrument.
    ///
    /// Fails if either resolution is absent or defective; a partially loaded
    /// instrument is never returned.
    fn load_instrument(&self, symbol: &str) -> Result<InstrumentSeries, LoadError> {
        Ok(InstrumentSeries {
            intraday: self.load(symbol, Resolution::Intraday)?,
            daily: self.load(symbol, Resolution::Daily)?,
        })
    }
}
