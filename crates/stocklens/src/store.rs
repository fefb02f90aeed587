//! Build-once store of loaded price tables.

use std::collections::HashMap;

use stocklens_config::{Config, Instrument};
use stocklens_core::{FilteredSelection, InstrumentSeries, QueryError, WindowChoice};
use stocklens_data::{CsvStore, SeriesSource};

/// The loaded catalog: every instrument's dual-resolution tables, built once
/// at startup and read-only afterwards.
///
/// Instruments whose archives fail to load are excluded from the catalog at
/// build time, so the store never serves a table with holes. There is no
/// unload or refresh; concurrent readers need no locking.
pub struct PriceStore {
    instruments: Vec<Instrument>,
    series: HashMap<String, InstrumentSeries>,
}

impl PriceStore {
    /// Builds the store from the configured CSV directory.
    pub fn load(config: &Config) -> Self {
        let source = CsvStore::new(&config.data.dir);
        Self::load_with(&source, &config.instruments)
    }

    /// Builds the store over any archive source.
    ///
    /// Each instrument loads independently; a failing instrument is logged
    /// and dropped from the selectable catalog rather than aborting the
    /// rest.
    pub fn load_with<S: SeriesSource>(source: &S, catalog: &[Instrument]) -> Self {
        let mut instruments = Vec::new();
        let mut series = HashMap::new();
        for instrument in catalog {
            match source.load_instrument(&instrument.symbol) {
                Ok(loaded) => {
                    log::info!(
                        "{}: {} intraday rows, {} daily rows",
                        instrument.symbol,
                        loaded.intraday.len(),
                        loaded.daily.len()
                    );
                    series.insert(instrument.symbol.clone(), loaded);
                    instruments.push(instrument.clone());
                }
                Err(e) => {
                    log::warn!("excluding {} from catalog: {e}", instrument.symbol);
                }
            }
        }
        Self {
            instruments,
            series,
        }
    }

    /// The selectable catalog, in configuration order.
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// The loaded series for one instrument.
    pub fn series(&self, symbol: &str) -> Option<&InstrumentSeries> {
        self.series.get(symbol)
    }

    /// Resolves a selector ordinal against an instrument: ordinal parsing,
    /// resolution dispatch, and the trailing window filter.
    pub fn select_window(
        &self,
        symbol: &str,
        ordinal: usize,
    ) -> Result<FilteredSelection, QueryError> {
        let choice = WindowChoice::from_ordinal(ordinal)?;
        let series = self
            .series(symbol)
            .ok_or_else(|| QueryError::UnknownInstrument(symbol.to_string()))?;
        Ok(series.select(choice))
    }
}
