//! Price record and field types for OHLC data.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Seconds in one calendar day.
pub const SECS_PER_DAY: i64 = 86_400;

/// One OHLC row: a timestamp and the four price fields.
///
/// Timestamps are seconds since the Unix epoch, derived from timezone-naive
/// wall-clock time. The naive convention is applied uniformly across both
/// resolutions; no record ever carries a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub ts: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceRecord {
    pub fn new(ts: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            ts,
            open,
            high,
            low,
            close,
        }
    }
}

/// The four price fields a summary can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

impl PriceField {
    /// All fields in display order.
    pub fn all() -> &'static [PriceField] {
        &[
            PriceField::Open,
            PriceField::High,
            PriceField::Low,
            PriceField::Close,
        ]
    }

    /// The field name as it appears in archives and selectors.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Open => "open",
            PriceField::High => "high",
            PriceField::Low => "low",
            PriceField::Close => "close",
        }
    }

    /// Extracts this field's value from a record.
    pub fn value(&self, record: &PriceRecord) -> f64 {
        match self {
            PriceField::Open => record.open,
            PriceField::High => record.high,
            PriceField::Low => record.low,
            PriceField::Close => record.close,
        }
    }
}

impl std::str::FromStr for PriceField {
    type Err = QueryError;

    /// Any name outside the four recognized fields is rejected, never
    /// defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(PriceField::Open),
            "high" => Ok(PriceField::High),
            "low" => Ok(PriceField::Low),
            "close" => Ok(PriceField::Close),
            other => Err(QueryError::InvalidField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse_round_trip() {
        for field in PriceField::all() {
            assert_eq!(field.as_str().parse::<PriceField>().unwrap(), *field);
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert_eq!(
            "volume".parse::<PriceField>(),
            Err(QueryError::InvalidField("volume".to_string()))
        );
    }

    #[test]
    fn test_field_value_extraction() {
        let record = PriceRecord::new(0, 1.0, 4.0, 0.5, 2.0);
        assert_eq!(PriceField::Open.value(&record), 1.0);
        assert_eq!(PriceField::High.value(&record), 4.0);
        assert_eq!(PriceField::Low.value(&record), 0.5);
        assert_eq!(PriceField::Close.value(&record), 2.0);
    }
}
