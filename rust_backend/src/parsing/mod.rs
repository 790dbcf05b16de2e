//! Parsers for the two uploaded sheets.
//!
//! This module turns raw tabular files into typed records, independent of the
//! file format they arrived in.
//!
//! # Parsers
//!
//! - [`csv_parser`]: CSV files via the polars reader
//! - [`xlsx_parser`]: Excel workbooks via calamine
//! - [`talk_time`]: `MM:SS` handle-time normalization
//!
//! # Example
//!
//! ```no_run
//! use capacity_rs::parsing::csv_parser::parse_volume_csv;
//! use std::path::Path;
//!
//! let records = parse_volume_csv(Path::new("entrantes.csv"))
//!     .expect("failed to parse volume sheet");
//! ```

pub mod csv_parser;
pub mod talk_time;
pub mod xlsx_parser;


use chrono::{NaiveDate, NaiveDateTime};

/// Parse a raw date cell, discarding any time-of-day.
///
/// Accepts ISO dates, ISO datetimes (space- or `T`-separated, with optional
/// fractional seconds) and `DD/MM/YYYY`.
pub fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    None
}
