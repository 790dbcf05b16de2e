use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::columns;
use crate::core::domain::CapacityParams;
use crate::core::error::CapacityResult;
use crate::preprocessing::pipeline::{CapacityReport, PipelineConfig, PipelineDiagnostics};

/// Parameters as submitted by a front end, with the same defaults the form
/// fields start at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityRequest {
    #[serde(default = "default_slot_count")]
    pub slot_count: i64,
    #[serde(default = "default_break_percent")]
    pub break_percent: f64,
    #[serde(default = "default_absenteeism_percent")]
    pub absenteeism_percent: f64,
    #[serde(default = "default_peak_window")]
    pub peak_window: usize,
}

fn default_slot_count() -> i64 {
    10
}

fn default_break_percent() -> f64 {
    15.0
}

fn default_absenteeism_percent() -> f64 {
    10.0
}

fn default_peak_window() -> usize {
    5
}

impl Default for CapacityRequest {
    fn default() -> Self {
        Self {
            slot_count: default_slot_count(),
            break_percent: default_break_percent(),
            absenteeism_percent: default_absenteeism_percent(),
            peak_window: default_peak_window(),
        }
    }
}

impl CapacityRequest {
    pub fn params(&self) -> CapacityParams {
        CapacityParams {
            slot_count: self.slot_count,
            break_percent: self.break_percent,
            absenteeism_percent: self.absenteeism_percent,
        }
    }

    pub fn config(&self) -> PipelineConfig {
        PipelineConfig {
            peak_window: self.peak_window,
        }
    }
}

/// One hour of the capacity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityPoint {
    pub hour: i64,
    pub general: i64,
    pub pico: i64,
    /// Null when the hour had no off-peak mean.
    pub vale: Option<i64>,
}

/// Flatten the final table's capacity columns into chartable points.
pub fn capacity_series(df: &DataFrame) -> CapacityResult<Vec<CapacityPoint>> {
    let hours = df.column(columns::HOUR)?.i64()?;
    let general = df.column(columns::CAPACITY)?.i64()?;
    let pico = df.column(columns::CAPACITY_PICO)?.i64()?;
    let vale = df.column(columns::CAPACITY_VALE)?.i64()?;

    let mut points = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        points.push(CapacityPoint {
            hour: hours.get(row).unwrap_or(0),
            general: general.get(row).unwrap_or(0),
            pico: pico.get(row).unwrap_or(0),
            vale: vale.get(row),
        });
    }
    Ok(points)
}

/// Run metadata shown alongside the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub hour_count: usize,
    pub date_columns: Vec<String>,
    pub total_volume_records: usize,
    pub diagnostics: PipelineDiagnostics,
}

impl ReportMeta {
    pub fn from_report(report: &CapacityReport) -> Self {
        Self {
            hour_count: report.table.height(),
            date_columns: report.date_columns.clone(),
            total_volume_records: report.total_volume_records,
            diagnostics: report.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_match_form_defaults() {
        let request: CapacityRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.slot_count, 10);
        assert_eq!(request.break_percent, 15.0);
        assert_eq!(request.absenteeism_percent, 10.0);
        assert_eq!(request.peak_window, 5);
        assert!(request.params().validate().is_ok());
    }

    #[test]
    fn test_partial_request_fills_in_defaults() {
        let request: CapacityRequest = serde_json::from_str(r#"{"slot_count": 25}"#).unwrap();
        assert_eq!(request.slot_count, 25);
        assert_eq!(request.break_percent, 15.0);
        assert_eq!(request.config().peak_window, 5);
    }

    #[test]
    fn test_capacity_series_carries_nulls() {
        let df = DataFrame::new(vec![
            Series::new(columns::HOUR, &[9i64, 10]),
            Series::new(columns::CAPACITY, &[3i64, 4]),
            Series::new(columns::CAPACITY_PICO, &[4i64, 5]),
            Series::new(columns::CAPACITY_VALE, &[Some(2i64), None]),
        ])
        .unwrap();

        let points = capacity_series(&df).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].vale, Some(2));
        assert_eq!(points[1].vale, None);
        assert_eq!(points[1].hour, 10);
    }
}
