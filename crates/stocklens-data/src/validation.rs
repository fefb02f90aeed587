//! Row validation for loaded archives.

use stocklens_core::PriceRecord;

/// Validate a loaded row has usable values.
///
/// Checks that all four prices are finite and positive and that the high is
/// not below the low. A row failing this is a data defect, not a gap, and
/// fails the whole load.
pub fn validate_record(record: &PriceRecord) -> bool {
    record.open.is_finite()
        && record.high.is_finite()
        && record.low.is_finite()
        && record.close.is_finite()
        && record.high >= record.low
        && record.open > 0.0
        && record.high > 0.0
        && record.low > 0.0
        && record.close > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_record_valid() {
        let record = PriceRecord::new(1000, 100.0, 105.0, 95.0, 102.0);
        assert!(validate_record(&record));
    }

    #[test]
    fn test_validate_record_nan() {
        let record = PriceRecord::new(1000, 100.0, f64::NAN, 95.0, 102.0);
        assert!(!validate_record(&record));
    }

    #[test]
    fn test_validate_record_high_below_low() {
        let record = PriceRecord::new(1000, 100.0, 90.0, 95.0, 102.0);
        assert!(!validate_record(&record));
    }

    #[test]
    fn test_validate_record_zero_price() {
        let record = PriceRecord::new(1000, 0.0, 105.0, 95.0, 102.0);
        assert!(!validate_record(&record));
    }
}
