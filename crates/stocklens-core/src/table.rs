//! Ordered price tables and the trailing-window filter.

use crate::record::{PriceRecord, SECS_PER_DAY};
use crate::window::Lookback;

/// An ordered sequence of price records for one instrument at one resolution.
///
/// Tables are immutable once built: every operation that narrows a table
/// produces a new one. Rows are strictly increasing by timestamp; the loader
/// enforces this before construction.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    records: Vec<PriceRecord>,
}

impl PriceTable {
    /// Wraps rows that are already sorted strictly ascending by timestamp.
    pub fn from_sorted(records: Vec<PriceRecord>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].ts < w[1].ts));
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The ordered rows, oldest first.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    /// Selects the trailing portion of the table covering the lookback.
    ///
    /// `All` keeps every row. Otherwise the result holds exactly the rows
    /// with `ts` in `[latest - days, latest]`, found with a binary boundary
    /// search over the sorted timestamps. A window reaching past the earliest
    /// row clamps to the full table. Never reorders or resamples.
    pub fn trailing(&self, lookback: Lookback) -> PriceTable {
        let days = match lookback {
            Lookback::All => return PriceTable::from_sorted(self.records.clone()),
            Lookback::Days(days) => days,
        };
        let Some(latest) = self.records.last() else {
            return PriceTable::default();
        };
        let cutoff = latest.ts - i64::from(days) * SECS_PER_DAY;
        let start = self.records.partition_point(|r| r.ts < cutoff);
        PriceTable::from_sorted(self.records[start..].to_vec())
    }
}
