use std::path::Path;

use crate::core::domain::{TalkTimeRecord, VolumeRecord};
use crate::core::error::{CapacityError, CapacityResult};
use crate::parsing::csv_parser::{parse_talk_time_csv, parse_volume_csv};
use crate::parsing::xlsx_parser::{parse_talk_time_xlsx, parse_volume_xlsx};

/// Loads volume and handle-time sheets, picking a parser by file extension.
///
/// `.csv` goes to the CSV parser; `.xlsx`, `.xls` and `.xlsm` go to the
/// workbook parser. Anything else is rejected up front rather than guessed
/// at.
pub struct SpreadsheetLoader;

enum Format {
    Csv,
    Workbook,
}

impl SpreadsheetLoader {
    /// Load the hourly volume sheet (`Date`, `Hour`, `Entrantes`).
    pub fn load_volumes(path: &Path) -> CapacityResult<Vec<VolumeRecord>> {
        match detect_format(path)? {
            Format::Csv => parse_volume_csv(path),
            Format::Workbook => parse_volume_xlsx(path),
        }
    }

    /// Load the handle-time sheet (`Hour`, `Average Talk Time`).
    pub fn load_talk_times(path: &Path) -> CapacityResult<Vec<TalkTimeRecord>> {
        match detect_format(path)? {
            Format::Csv => parse_talk_time_csv(path),
            Format::Workbook => parse_talk_time_xlsx(path),
        }
    }
}

fn detect_format(path: &Path) -> CapacityResult<Format> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("csv") => Ok(Format::Csv),
        Some("xlsx") | Some("xls") | Some("xlsm") => Ok(Format::Workbook),
        _ => Err(CapacityError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}
