//! Volume reshaping: flat (date, hour, count) records into an hour x date
//! matrix.

use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::columns;
use crate::core::domain::VolumeRecord;
use crate::core::error::{CapacityError, CapacityResult};

/// Hour x date volume matrix.
///
/// One row per distinct observed hour (ascending), one Int64 column per
/// distinct observed date. Date columns are named `YYYY-MM-DD` and ordered by
/// calendar date ascending; exports and charts rely on that order being
/// deterministic. Cells absent from the input are explicit zeros.
#[derive(Debug, Clone)]
pub struct VolumeTable {
    pub frame: DataFrame,
    /// Date column names in frame order.
    pub date_columns: Vec<String>,
    /// Hours present, ascending, mirroring the frame rows.
    pub hours: Vec<i64>,
}

/// Pivot raw volume records into a [`VolumeTable`].
///
/// Duplicate `(date, hour)` records are summed.
pub fn reshape_volumes(records: &[VolumeRecord]) -> CapacityResult<VolumeTable> {
    if records.is_empty() {
        return Err(CapacityError::EmptyInput("volume sheet".to_string()));
    }

    let mut cells: BTreeMap<u8, BTreeMap<NaiveDate, i64>> = BTreeMap::new();
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    for record in records {
        *cells
            .entry(record.hour)
            .or_default()
            .entry(record.date)
            .or_insert(0) += record.count;
        dates.insert(record.date);
    }

    let hours: Vec<i64> = cells.keys().map(|hour| *hour as i64).collect();
    let mut series = vec![Series::new(columns::HOUR, &hours)];
    let mut date_columns = Vec::with_capacity(dates.len());
    for date in &dates {
        let name = date.format("%Y-%m-%d").to_string();
        let counts: Vec<i64> = cells
            .values()
            .map(|row| row.get(date).copied().unwrap_or(0))
            .collect();
        series.push(Series::new(&name, &counts));
        date_columns.push(name);
    }

    let frame = DataFrame::new(series)?;
    Ok(VolumeTable {
        frame,
        date_columns,
        hours,
    })
}
