//! CSV archive loading implementation.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use stocklens_core::{PriceRecord, PriceTable, Resolution};

use crate::error::LoadError;
use crate::source::SeriesSource;
use crate::validation::validate_record;

/// Loads price archives from a directory of CSV files.
///
/// Expected layout: `<SYMBOL>_intraday*.csv` and `<SYMBOL>_daily*.csv` under
/// one root. Multiple files per resolution are concatenated before sorting.
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl SeriesSource for CsvStore {
    fn load(&self, symbol: &str, resolution: Resolution) -> Result<PriceTable, LoadError> {
        load_table(&self.root, symbol, resolution)
    }
}

/// Parse an archive timestamp: `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD`
/// taken as midnight. Values normalize to naive Unix seconds.
pub fn parse_timestamp(s: &str) -> Option<i64> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

/// Column indices for one archive file.
struct Columns {
    ts: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
}

/// Detect columns from headers, falling back to the standard positional
/// layout (timestamp, open, high, low, close) when a header is missing.
fn detect_columns(headers: &csv::StringRecord) -> Columns {
    let lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let find = |name: &str| lower.iter().position(|h| h == name);

    Columns {
        ts: lower
            .iter()
            .position(|h| h.contains("timestamp") || h == "time" || h == "date")
            .unwrap_or(0),
        open: find("open").unwrap_or(1),
        high: find("high").unwrap_or(2),
        low: find("low").unwrap_or(3),
        close: find("close").unwrap_or(4),
    }
}

/// Read every row of one archive file.
fn read_file(path: &Path) -> Result<Vec<PriceRecord>, LoadError> {
    let integrity = |line: u64, reason: String| LoadError::DataIntegrity {
        source_path: path.to_path_buf(),
        line,
        reason,
    };

    let mut reader = csv::ReaderBuilder::new().delimiter(b',').from_path(path)?;
    let headers = reader.headers()?.clone();
    let cols = detect_columns(&headers);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let raw_ts = record.get(cols.ts).unwrap_or("");
        let ts = parse_timestamp(raw_ts)
            .ok_or_else(|| integrity(line, format!("unparseable timestamp {raw_ts:?}")))?;

        let price = |idx: usize, name: &str| -> Result<f64, LoadError> {
            record
                .get(idx)
                .unwrap_or("")
                .parse::<f64>()
                .map_err(|_| integrity(line, format!("unparseable {name} value")))
        };

        let row = PriceRecord::new(
            ts,
            price(cols.open, "open")?,
            price(cols.high, "high")?,
            price(cols.low, "low")?,
            price(cols.close, "close")?,
        );
        if !validate_record(&row) {
            return Err(integrity(line, "non-finite or inconsistent prices".into()));
        }
        records.push(row);
    }

    Ok(records)
}

/// Archive files for one instrument and resolution, sorted by name.
fn archive_files(
    root: &Path,
    symbol: &str,
    resolution: Resolution,
) -> Result<Vec<PathBuf>, LoadError> {
    let prefix = format!("{}_{}", symbol, resolution.label());
    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(&prefix) && name.ends_with(".csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load the full table for one instrument at one resolution.
///
/// All matching archive files are concatenated and sorted ascending by
/// timestamp. An absent or empty source fails with `MissingData`; a
/// duplicate timestamp fails with `DataIntegrity` rather than guessing
/// which row wins.
pub fn load_table(
    root: &Path,
    symbol: &str,
    resolution: Resolution,
) -> Result<PriceTable, LoadError> {
    let files = archive_files(root, symbol, resolution)?;

    let mut records = Vec::new();
    for path in &files {
        records.extend(read_file(path)?);
    }
    if records.is_empty() {
        return Err(LoadError::MissingData {
            symbol: symbol.to_string(),
            resolution,
        });
    }

    records.sort_by_key(|r| r.ts);
    if let Some(pair) = records.windows(2).find(|w| w[0].ts == w[1].ts) {
        return Err(LoadError::DataIntegrity {
            source_path: root.to_path_buf(),
            line: 0,
            reason: format!(
                "duplicate timestamp {} in {} {} archives",
                pair[0].ts, symbol, resolution
            ),
        });
    }

    log::debug!(
        "{}: merged {} {} file(s) into {} rows",
        symbol,
        files.len(),
        resolution,
        records.len()
    );
    Ok(PriceTable::from_sorted(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_parse_timestamp_formats() {
        // 2017-08-17 04:00:00 UTC
        assert_eq!(parse_timestamp("2017-08-17 04:00:00"), Some(1_502_942_400));
        // Bare dates are midnight.
        assert_eq!(parse_timestamp("2020-01-01"), Some(1_577_836_800));
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_load_daily_table() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "AAPL_daily.csv",
            "date,open,high,low,close\n\
             2020-01-02,100.0,104.0,99.0,103.0\n\
             2020-01-03,103.0,106.0,102.0,105.0\n",
        );

        let table = load_table(dir.path(), "AAPL", Resolution::Daily).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].open, 100.0);
        assert_eq!(table.records()[1].close, 105.0);
        assert!(table.records()[0].ts < table.records()[1].ts);
    }

    #[test]
    fn test_unsorted_rows_load_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "TSLA_intraday.csv",
            "timestamp,open,high,low,close\n\
             2021-07-27 19:59:00,650.0,651.0,649.0,650.5\n\
             2021-07-27 19:57:00,648.0,649.0,647.0,648.5\n",
        );

        let table = load_table(dir.path(), "TSLA", Resolution::Intraday).unwrap();
        assert_eq!(table.records()[0].close, 648.5);
        assert_eq!(table.records()[1].close, 650.5);
    }

    #[test]
    fn test_multiple_files_merge() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "IBM_daily_2020.csv",
            "date,open,high,low,close\n2020-06-01,120.0,121.0,119.0,120.5\n",
        );
        write_file(
            dir.path(),
            "IBM_daily_2021.csv",
            "date,open,high,low,close\n2021-06-01,130.0,131.0,129.0,130.5\n",
        );

        let table = load_table(dir.path(), "IBM", Resolution::Daily).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].close, 120.5);
    }

    #[test]
    fn test_missing_archive() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(dir.path(), "AAPL", Resolution::Daily).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingData {
                resolution: Resolution::Daily,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_archive_is_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "AAPL_daily.csv", "date,open,high,low,close\n");
        let err = load_table(dir.path(), "AAPL", Resolution::Daily).unwrap_err();
        assert!(matches!(err, LoadError::MissingData { .. }));
    }

    #[test]
    fn test_duplicate_timestamp_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "NVDA_daily.csv",
            "date,open,high,low,close\n\
             2020-01-02,100.0,104.0,99.0,103.0\n\
             2020-01-02,101.0,105.0,100.0,104.0\n",
        );

        let err = load_table(dir.path(), "NVDA", Resolution::Daily).unwrap_err();
        assert!(matches!(err, LoadError::DataIntegrity { .. }));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "NVDA_daily.csv",
            "date,open,high,low,close\n2020-01-02,100.0,nan,99.0,103.0\n",
        );

        let err = load_table(dir.path(), "NVDA", Resolution::Daily).unwrap_err();
        assert!(matches!(err, LoadError::DataIntegrity { line: 2, .. }));
    }

    #[test]
    fn test_unparseable_timestamp_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "NVDA_daily.csv",
            "date,open,high,low,close\nyesterday,100.0,104.0,99.0,103.0\n",
        );

        let err = load_table(dir.path(), "NVDA", Resolution::Daily).unwrap_err();
        assert!(matches!(err, LoadError::DataIntegrity { .. }));
    }
}
