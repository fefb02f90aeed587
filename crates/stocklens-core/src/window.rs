//! Lookback window enumeration and resolution dispatch.

use std::fmt;

use crate::error::QueryError;

/// Sampling granularity of a price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Intraday,
    Daily,
}

impl Resolution {
    /// Short label, also the archive file infix.
    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Intraday => "intraday",
            Resolution::Daily => "daily",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Concrete lookback derived from a window choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    /// Trailing span in calendar days.
    Days(u32),
    /// Entire history, bypassing the filter.
    All,
}

/// Enumerated lookback choices, ordinals 0..=6.
///
/// The two shortest windows read the intraday table; everything longer reads
/// the daily table. `Max` bypasses windowing entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChoice {
    Day1,
    Week1,
    Month1,
    Month3,
    Year1,
    Year5,
    Max,
}

impl WindowChoice {
    /// All choices in ordinal order.
    pub fn all() -> &'static [WindowChoice] {
        &[
            WindowChoice::Day1,
            WindowChoice::Week1,
            WindowChoice::Month1,
            WindowChoice::Month3,
            WindowChoice::Year1,
            WindowChoice::Year5,
            WindowChoice::Max,
        ]
    }

    /// Maps a selector ordinal to a choice.
    pub fn from_ordinal(ordinal: usize) -> Result<Self, QueryError> {
        match ordinal {
            0 => Ok(WindowChoice::Day1),
            1 => Ok(WindowChoice::Week1),
            2 => Ok(WindowChoice::Month1),
            3 => Ok(WindowChoice::Month3),
            4 => Ok(WindowChoice::Year1),
            5 => Ok(WindowChoice::Year5),
            6 => Ok(WindowChoice::Max),
            other => Err(QueryError::InvalidSelection(other)),
        }
    }

    /// The selector ordinal of this choice.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Human-readable label for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            WindowChoice::Day1 => "1 day",
            WindowChoice::Week1 => "1 week",
            WindowChoice::Month1 => "1 month",
            WindowChoice::Month3 => "3 months",
            WindowChoice::Year1 => "1 year",
            WindowChoice::Year5 => "5 years",
            WindowChoice::Max => "Max",
        }
    }

    /// Which resolution serves this window.
    pub fn resolution(&self) -> Resolution {
        match self {
            WindowChoice::Day1 | WindowChoice::Week1 => Resolution::Intraday,
            WindowChoice::Month1
            | WindowChoice::Month3
            | WindowChoice::Year1
            | WindowChoice::Year5
            | WindowChoice::Max => Resolution::Daily,
        }
    }

    /// The concrete lookback span.
    pub fn lookback(&self) -> Lookback {
        match self {
            WindowChoice::Day1 => Lookback::Days(1),
            WindowChoice::Week1 => Lookback::Days(7),
            WindowChoice::Month1 => Lookback::Days(30),
            WindowChoice::Month3 => Lookback::Days(90),
            WindowChoice::Year1 => Lookback::Days(365),
            WindowChoice::Year5 => Lookback::Days(1825),
            WindowChoice::Max => Lookback::All,
        }
    }
}
