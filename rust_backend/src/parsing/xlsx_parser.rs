use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::NaiveDate;
use std::path::Path;

use crate::core::columns;
use crate::core::domain::{TalkTimeRecord, VolumeRecord};
use crate::core::error::{CapacityError, CapacityResult};
use crate::parsing::parse_date_str;

/// Parse the volume ("Entrantes") sheet from the first worksheet of an Excel
/// workbook.
pub fn parse_volume_xlsx(path: &Path) -> CapacityResult<Vec<VolumeRecord>> {
    let range = first_sheet(path)?;
    let header = header_row(&range, path)?;
    let date_idx = column_index(&header, columns::DATE)?;
    let hour_idx = column_index(&header, columns::HOUR)?;
    let count_idx = column_index(&header, columns::ENTRANTES)?;

    let mut records = Vec::new();
    for (row_idx, row) in range.rows().enumerate().skip(1) {
        if is_blank(row) {
            continue;
        }
        let date = cell_to_date(cell(row, date_idx)).ok_or_else(|| CapacityError::InvalidValue {
            row: row_idx,
            column: columns::DATE.to_string(),
            message: format!("unrecognized date cell {:?}", cell(row, date_idx)),
        })?;
        let hour = parse_hour_cell(cell(row, hour_idx), row_idx)?;
        let count = cell_to_i64(cell(row, count_idx)).unwrap_or(0);
        if count < 0 {
            return Err(CapacityError::InvalidValue {
                row: row_idx,
                column: columns::ENTRANTES.to_string(),
                message: format!("contact count must be non-negative, got {}", count),
            });
        }
        records.push(VolumeRecord { date, hour, count });
    }

    Ok(records)
}

/// Parse the handle-time ("TMA") sheet from the first worksheet of an Excel
/// workbook. Only text cells carry a talk time; any other cell type becomes
/// `None` and is coerced to 0 by the normalizer.
pub fn parse_talk_time_xlsx(path: &Path) -> CapacityResult<Vec<TalkTimeRecord>> {
    let range = first_sheet(path)?;
    let header = header_row(&range, path)?;
    let hour_idx = column_index(&header, columns::HOUR)?;
    let talk_idx = column_index(&header, columns::TALK_TIME)?;

    let mut records = Vec::new();
    for (row_idx, row) in range.rows().enumerate().skip(1) {
        if is_blank(row) {
            continue;
        }
        let hour = parse_hour_cell(cell(row, hour_idx), row_idx)?;
        let raw = match cell(row, talk_idx) {
            Some(Data::String(s)) => Some(s.clone()),
            _ => None,
        };
        records.push(TalkTimeRecord { hour, raw });
    }

    Ok(records)
}

fn first_sheet(path: &Path) -> CapacityResult<Range<Data>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CapacityError::EmptyInput(format!("{}", path.display())))??;
    Ok(range)
}

fn header_row<'a>(range: &'a Range<Data>, path: &Path) -> CapacityResult<&'a [Data]> {
    range
        .rows()
        .next()
        .ok_or_else(|| CapacityError::EmptyInput(format!("{}", path.display())))
}

fn column_index(header: &[Data], name: &str) -> CapacityResult<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
        .ok_or_else(|| CapacityError::MissingColumn {
            column: name.to_string(),
        })
}

fn cell(row: &[Data], idx: usize) -> Option<&Data> {
    row.get(idx)
}

fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

fn cell_to_i64(cell: Option<&Data>) -> Option<i64> {
    match cell? {
        Data::Int(v) => Some(*v),
        Data::Float(v) if v.fract() == 0.0 => Some(*v as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_to_date(cell: Option<&Data>) -> Option<NaiveDate> {
    match cell? {
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.date()),
        Data::String(s) => parse_date_str(s),
        Data::DateTimeIso(s) => parse_date_str(s),
        _ => None,
    }
}

fn parse_hour_cell(cell: Option<&Data>, row: usize) -> CapacityResult<u8> {
    let hour = cell_to_i64(cell).ok_or_else(|| CapacityError::InvalidValue {
        row,
        column: columns::HOUR.to_string(),
        message: "hour is missing or not an integer".to_string(),
    })?;
    if !(0..=23).contains(&hour) {
        return Err(CapacityError::InvalidHour { row, value: hour });
    }
    Ok(hour as u8)
}
