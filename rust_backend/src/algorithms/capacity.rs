//! The staffing formula.
//!
//! Headcount is sized without Erlang queueing: total work-seconds per hour
//! (volume x handle time, inflated by shrinkage) divided by the seconds one
//! agent slot provides per hour.

use polars::prelude::*;

use crate::core::columns;
use crate::core::domain::CapacityParams;
use crate::core::error::CapacityResult;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Raw (real-valued) required agents for one volume figure.
///
/// Callers round: truncation for the general capacity, ceiling for peak and
/// off-peak. Only defined for non-negative inputs.
pub fn required_agents(volume: f64, talk_time_seconds: f64, adjust: f64, slot_count: i64) -> f64 {
    volume * talk_time_seconds * adjust / SECONDS_PER_HOUR / slot_count as f64
}

/// Append `Qtd_Slots`, `Capacity_Calculado`, `Capacity_Calculado_pico` and
/// `Capacity_Calculado_vale` to the merged table.
///
/// Expects the `media_geral`, `Media_pico`, `madia_vale` and
/// `Average Talk Time (seconds)` columns. Parameters are validated here,
/// independent of any front-end guard. A null `madia_vale` yields a null
/// off-peak capacity.
pub fn with_capacity(df: &DataFrame, params: &CapacityParams) -> CapacityResult<DataFrame> {
    params.validate()?;
    let adjust = params.adjustment();

    let geral = df.column(columns::MEDIA_GERAL)?.i64()?;
    let pico = df.column(columns::MEDIA_PICO)?.f64()?;
    let vale = df.column(columns::MEDIA_VALE)?.f64()?;
    let talk = df.column(columns::TALK_TIME_SECONDS)?.i64()?;

    let height = df.height();
    let mut capacity_geral = Vec::with_capacity(height);
    let mut capacity_pico = Vec::with_capacity(height);
    let mut capacity_vale: Vec<Option<i64>> = Vec::with_capacity(height);

    for row in 0..height {
        let talk_seconds = talk.get(row).unwrap_or(0) as f64;
        let agents = |volume: f64| required_agents(volume, talk_seconds, adjust, params.slot_count);

        let geral_volume = geral.get(row).unwrap_or(0) as f64;
        capacity_geral.push(agents(geral_volume) as i64);
        capacity_pico.push(agents(pico.get(row).unwrap_or(0.0)).ceil() as i64);
        capacity_vale.push(vale.get(row).map(|volume| agents(volume).ceil() as i64));
    }

    let mut out = df.clone();
    out.with_column(Series::new(
        columns::QTD_SLOTS,
        &vec![params.slot_count; height],
    ))?;
    out.with_column(Series::new(columns::CAPACITY, &capacity_geral))?;
    out.with_column(Series::new(columns::CAPACITY_PICO, &capacity_pico))?;
    out.with_column(Series::new(columns::CAPACITY_VALE, &capacity_vale))?;
    Ok(out)
}
