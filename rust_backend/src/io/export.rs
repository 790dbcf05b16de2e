use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::preprocessing::pipeline::CapacityReport;

/// Write the report's final table to `path` as CSV, headers included.
///
/// Columns keep the table order: hour, the per-date counts, the derived
/// means, handle time, slots and capacities. Null off-peak cells are written
/// as empty fields.
pub fn write_report_csv(report: &CapacityReport, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("creating export file {}", path.display()))?;
    let mut table = report.table.clone();
    CsvWriter::new(&mut file)
        .finish(&mut table)
        .with_context(|| format!("writing capacity table to {}", path.display()))?;
    Ok(())
}
