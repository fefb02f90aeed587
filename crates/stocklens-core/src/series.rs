//! Dual-resolution series for one instrument.

use crate::table::PriceTable;
use crate::window::{Resolution, WindowChoice};

/// The two tables loaded for one instrument, one per resolution.
///
/// Built once by the loader and immutable afterwards; selection never
/// mutates either table.
#[derive(Debug, Clone, Default)]
pub struct InstrumentSeries {
    pub intraday: PriceTable,
    pub daily: PriceTable,
}

/// A windowed view plus the resolution it was cut from.
///
/// Transient: created per request, consumed by the summarizer and the
/// caller, then discarded.
#[derive(Debug, Clone)]
pub struct FilteredSelection {
    pub resolution: Resolution,
    pub table: PriceTable,
}

impl InstrumentSeries {
    /// The table serving one resolution.
    pub fn table(&self, resolution: Resolution) -> &PriceTable {
        match resolution {
            Resolution::Intraday => &self.intraday,
            Resolution::Daily => &self.daily,
        }
    }

    /// Applies a window choice: resolution dispatch plus trailing filter.
    pub fn select(&self, choice: WindowChoice) -> FilteredSelection {
        let resolution = choice.resolution();
        FilteredSelection {
            resolution,
            table: self.table(resolution).trailing(choice.lookback()),
        }
    }
}
