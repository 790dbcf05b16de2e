use anyhow::{Context, Result};
use log::{info, warn};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::algorithms::capacity::with_capacity;
use crate::algorithms::stats::with_hourly_stats;
use crate::algorithms::summary::{build_summary, TableSummary};
use crate::core::columns;
use crate::core::domain::{CapacityParams, HandleTimeRecord, TalkTimeRecord, VolumeRecord};
use crate::core::error::CapacityError;
use crate::io::loaders::SpreadsheetLoader;
use crate::parsing::talk_time::normalize_talk_times;
use crate::preprocessing::reshaper::reshape_volumes;

/// Configuration for the capacity pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// How many of the largest date counts per hour form the peak ("pico");
    /// everything after them forms the off-peak ("vale").
    pub peak_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { peak_window: 5 }
    }
}

/// Data-quality signals gathered during a run.
///
/// These are the non-fatal conditions: the run succeeds, but the counts tell
/// consumers what was coerced or dropped on the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    /// Talk-time rows whose value could not be parsed and became 0 seconds.
    pub coerced_talk_times: usize,
    /// Hours present in the volume sheet but not in the handle-time sheet.
    pub dropped_volume_hours: usize,
    /// Hours present in the handle-time sheet but not in the volume sheet.
    pub dropped_talk_time_hours: usize,
}

/// Result of one pipeline run.
///
/// Immutable and rebuilt from scratch per pair of uploaded files; consumers
/// (chart renderer, exporter, Q&A stage) borrow it read-only.
#[derive(Debug)]
pub struct CapacityReport {
    /// The final table: hour, per-date counts, derived means, handle time and
    /// capacities, ordered by hour.
    pub table: DataFrame,
    /// Date column names in table order.
    pub date_columns: Vec<String>,
    pub summary: TableSummary,
    pub diagnostics: PipelineDiagnostics,
    /// Raw volume rows that fed the run.
    pub total_volume_records: usize,
}

/// The capacity pipeline.
///
/// Pure and synchronous: reshape volumes, derive hourly statistics, normalize
/// handle times, merge on the hour, apply the staffing formula, summarize.
pub struct CapacityPipeline {
    config: PipelineConfig,
}

impl CapacityPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline on a pair of spreadsheet files (CSV or XLSX).
    pub fn process_files(
        &self,
        volume_path: &Path,
        talk_time_path: &Path,
        params: &CapacityParams,
    ) -> Result<CapacityReport> {
        let volumes = SpreadsheetLoader::load_volumes(volume_path)
            .with_context(|| format!("loading volume sheet {}", volume_path.display()))?;
        let talk_times = SpreadsheetLoader::load_talk_times(talk_time_path)
            .with_context(|| format!("loading handle-time sheet {}", talk_time_path.display()))?;
        self.process_records(&volumes, &talk_times, params)
    }

    /// Run the pipeline on already-parsed records.
    pub fn process_records(
        &self,
        volumes: &[VolumeRecord],
        talk_times: &[TalkTimeRecord],
        params: &CapacityParams,
    ) -> Result<CapacityReport> {
        params.validate()?;
        if talk_times.is_empty() {
            return Err(CapacityError::EmptyInput("handle-time sheet".to_string()).into());
        }

        let volume_table = reshape_volumes(volumes).context("reshaping volume records")?;
        info!(
            "reshaped {} volume records into {} hours x {} dates",
            volumes.len(),
            volume_table.hours.len(),
            volume_table.date_columns.len()
        );

        let with_stats = with_hourly_stats(
            &volume_table.frame,
            &volume_table.date_columns,
            self.config.peak_window,
        )
        .context("computing hourly statistics")?;

        let (handle_times, coerced) = normalize_talk_times(talk_times);
        if coerced > 0 {
            warn!("{} talk-time row(s) were unparsable and coerced to 0s", coerced);
        }

        let merged = merge_talk_times(&with_stats, &handle_times)?;
        let diagnostics = join_diagnostics(&volume_table.hours, &handle_times, coerced);
        if diagnostics.dropped_volume_hours > 0 {
            warn!(
                "{} hour(s) present only in the volume sheet were dropped by the merge",
                diagnostics.dropped_volume_hours
            );
        }
        if diagnostics.dropped_talk_time_hours > 0 {
            warn!(
                "{} hour(s) present only in the handle-time sheet were ignored",
                diagnostics.dropped_talk_time_hours
            );
        }
        if merged.height() == 0 {
            return Err(
                CapacityError::EmptyInput("merged volume/handle-time table".to_string()).into(),
            );
        }

        let table = with_capacity(&merged, params).context("applying the capacity formula")?;
        let summary = build_summary(&table).context("summarizing the final table")?;
        info!("capacity table ready: {} hour rows", table.height());

        Ok(CapacityReport {
            table,
            date_columns: volume_table.date_columns,
            summary,
            diagnostics,
            total_volume_records: volumes.len(),
        })
    }
}

impl Default for CapacityPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: run the default pipeline on two files.
pub fn compute_capacity(
    volume_path: &Path,
    talk_time_path: &Path,
    params: &CapacityParams,
) -> Result<CapacityReport> {
    CapacityPipeline::new().process_files(volume_path, talk_time_path, params)
}

/// Inner-join the statistics table with the normalized handle times on the
/// hour. Hours on one side only are dropped; the caller surfaces the counts.
fn merge_talk_times(
    df: &DataFrame,
    handle_times: &[HandleTimeRecord],
) -> Result<DataFrame, CapacityError> {
    let hours: Vec<i64> = handle_times.iter().map(|r| r.hour as i64).collect();
    let seconds: Vec<i64> = handle_times.iter().map(|r| r.talk_time_seconds).collect();
    let talk_frame = DataFrame::new(vec![
        Series::new(columns::HOUR, &hours),
        Series::new(columns::TALK_TIME_SECONDS, &seconds),
    ])?;

    let joined = df.inner_join(&talk_frame, [columns::HOUR], [columns::HOUR])?;
    // Join output order is not guaranteed; the table contract is ascending
    // hours.
    let joined = joined.sort([columns::HOUR], vec![false], false)?;
    Ok(joined)
}

fn join_diagnostics(
    volume_hours: &[i64],
    handle_times: &[HandleTimeRecord],
    coerced_talk_times: usize,
) -> PipelineDiagnostics {
    let volume_set: HashSet<i64> = volume_hours.iter().copied().collect();
    let talk_set: HashSet<i64> = handle_times.iter().map(|r| r.hour as i64).collect();
    PipelineDiagnostics {
        coerced_talk_times,
        dropped_volume_hours: volume_set.difference(&talk_set).count(),
        dropped_talk_time_hours: talk_set.difference(&volume_set).count(),
    }
}
