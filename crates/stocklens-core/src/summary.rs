//! Extremum summaries over a price table.

use serde::Serialize;

use crate::error::QueryError;
use crate::record::PriceField;
use crate::table::PriceTable;

/// Maximum and minimum of one price field over a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extrema {
    pub max: f64,
    pub min: f64,
}

/// Computes the extrema of `field` across all rows of `table`.
///
/// An empty table has no meaningful extremum and fails with `EmptyRange`;
/// callers present that as a "no data for this range" state. Ties are not
/// disambiguated.
pub fn extrema(table: &PriceTable, field: PriceField) -> Result<Extrema, QueryError> {
    let mut rows = table.records().iter();
    let first = rows.next().ok_or(QueryError::EmptyRange)?;
    let mut max = field.value(first);
    let mut min = max;
    for record in rows {
        let v = field.value(record);
        max = max.max(v);
        min = min.min(v);
    }
    Ok(Extrema { max, min })
}
