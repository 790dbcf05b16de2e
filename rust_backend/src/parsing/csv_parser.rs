use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::core::columns;
use crate::core::domain::{TalkTimeRecord, VolumeRecord};
use crate::core::error::{CapacityError, CapacityResult};
use crate::parsing::parse_date_str;

/// Parse a CSV file into a Polars DataFrame.
pub fn read_csv(path: &Path) -> CapacityResult<DataFrame> {
    let mut file = File::open(path)?;
    let df = CsvReader::new(&mut file).has_header(true).finish()?;
    Ok(df)
}

/// Parse the volume ("Entrantes") sheet from CSV.
pub fn parse_volume_csv(path: &Path) -> CapacityResult<Vec<VolumeRecord>> {
    let df = read_csv(path)?;
    dataframe_to_volume_records(&df)
}

/// Parse the handle-time ("TMA") sheet from CSV.
pub fn parse_talk_time_csv(path: &Path) -> CapacityResult<Vec<TalkTimeRecord>> {
    let df = read_csv(path)?;
    dataframe_to_talk_time_records(&df)
}

fn required_column<'a>(df: &'a DataFrame, name: &str) -> CapacityResult<&'a Series> {
    df.column(name).map_err(|_| CapacityError::MissingColumn {
        column: name.to_string(),
    })
}

/// Convert a volume DataFrame into typed records.
///
/// Requires the `Date`, `Hour` and `Entrantes` columns. Date cells are parsed
/// as text and normalized to a calendar date; hour cells must be integers in
/// 0-23. A null contact count is read as 0.
pub fn dataframe_to_volume_records(df: &DataFrame) -> CapacityResult<Vec<VolumeRecord>> {
    let date_col = required_column(df, columns::DATE)?;
    let hour_col = required_column(df, columns::HOUR)?;
    let count_col = required_column(df, columns::ENTRANTES)?;

    // Text-typed cells cover every date format we accept; numeric columns that
    // were inferred otherwise are rendered back to text first.
    let dates = date_col.cast(&DataType::Utf8)?;
    let dates = dates.utf8()?;
    let hours = hour_col.cast(&DataType::Int64)?;
    let hours = hours.i64()?;
    let counts = count_col.cast(&DataType::Int64)?;
    let counts = counts.i64()?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let raw_date = dates
            .get(row)
            .ok_or_else(|| CapacityError::InvalidValue {
                row,
                column: columns::DATE.to_string(),
                message: "missing date".to_string(),
            })?;
        let date = parse_date_str(raw_date).ok_or_else(|| CapacityError::InvalidValue {
            row,
            column: columns::DATE.to_string(),
            message: format!("unrecognized date '{}'", raw_date),
        })?;

        let hour = parse_hour(hours.get(row), row)?;
        let count = counts.get(row).unwrap_or(0);
        if count < 0 {
            return Err(CapacityError::InvalidValue {
                row,
                column: columns::ENTRANTES.to_string(),
                message: format!("contact count must be non-negative, got {}", count),
            });
        }

        records.push(VolumeRecord { date, hour, count });
    }

    Ok(records)
}

/// Convert a handle-time DataFrame into raw talk-time records.
///
/// Requires the `Hour` and `Average Talk Time` columns. Talk-time cells are
/// kept as text when the column is text; any other column type yields `None`
/// for every row, which the normalizer coerces to zero seconds.
pub fn dataframe_to_talk_time_records(df: &DataFrame) -> CapacityResult<Vec<TalkTimeRecord>> {
    let hour_col = required_column(df, columns::HOUR)?;
    let talk_col = required_column(df, columns::TALK_TIME)?;

    let hours = hour_col.cast(&DataType::Int64)?;
    let hours = hours.i64()?;
    let raw_values: Vec<Option<String>> = match talk_col.dtype() {
        DataType::Utf8 => {
            let texts = talk_col.utf8()?;
            texts
                .into_iter()
                .map(|value| value.map(|s| s.to_string()))
                .collect()
        }
        // Non-text talk times are coerced to 0 downstream, never rejected.
        _ => vec![None; df.height()],
    };

    let mut records = Vec::with_capacity(df.height());
    for (row, raw) in raw_values.into_iter().enumerate() {
        let hour = parse_hour(hours.get(row), row)?;
        records.push(TalkTimeRecord { hour, raw });
    }

    Ok(records)
}

fn parse_hour(value: Option<i64>, row: usize) -> CapacityResult<u8> {
    let hour = value.ok_or_else(|| CapacityError::InvalidValue {
        row,
        column: columns::HOUR.to_string(),
        message: "hour is missing or not an integer".to_string(),
    })?;
    if !(0..=23).contains(&hour) {
        return Err(CapacityError::InvalidHour { row, value: hour });
    }
    Ok(hour as u8)
}
