use polars::prelude::*;

use crate::core::columns;
use crate::core::error::{CapacityError, CapacityResult};

/// Append `Media_pico`, `madia_vale` and `media_geral` columns to an
/// hour x date volume matrix.
///
/// Only the given `date_columns` feed the statistics; derived columns never
/// do. Per row, counts are sorted descending (tie order is irrelevant: only
/// the multiset of top values matters):
///
/// - `Media_pico`: mean of the first `peak_window` values, or of all values
///   when fewer exist.
/// - `madia_vale`: mean of the values from index `peak_window` onward; null
///   when nothing remains. Missing propagates, it is never defaulted to 0.
/// - `media_geral`: mean of all values, truncated toward zero.
pub fn with_hourly_stats(
    df: &DataFrame,
    date_columns: &[String],
    peak_window: usize,
) -> CapacityResult<DataFrame> {
    if peak_window == 0 {
        return Err(CapacityError::InvalidParameter(
            "peak_window must be at least 1".to_string(),
        ));
    }
    if date_columns.is_empty() {
        return Err(CapacityError::EmptyInput("volume table".to_string()));
    }

    let mut per_date = Vec::with_capacity(date_columns.len());
    for name in date_columns {
        per_date.push(df.column(name)?.i64()?);
    }

    let height = df.height();
    let mut pico = Vec::with_capacity(height);
    let mut vale: Vec<Option<f64>> = Vec::with_capacity(height);
    let mut geral = Vec::with_capacity(height);

    for row in 0..height {
        let mut counts: Vec<i64> = per_date
            .iter()
            .map(|column| column.get(row).unwrap_or(0))
            .collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let window = peak_window.min(counts.len());
        pico.push(mean(&counts[..window]));
        let rest = &counts[window..];
        vale.push(if rest.is_empty() {
            None
        } else {
            Some(mean(rest))
        });
        geral.push(mean(&counts) as i64);
    }

    let mut out = df.clone();
    out.with_column(Series::new(columns::MEDIA_PICO, &pico))?;
    out.with_column(Series::new(columns::MEDIA_VALE, &vale))?;
    out.with_column(Series::new(columns::MEDIA_GERAL, &geral))?;
    Ok(out)
}

fn mean(values: &[i64]) -> f64 {
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume_frame(rows: &[(i64, [i64; 7])]) -> (DataFrame, Vec<String>) {
        let names: Vec<String> = (1..=7).map(|d| format!("2024-01-{:02}", d)).collect();
        let hours: Vec<i64> = rows.iter().map(|(hour, _)| *hour).collect();
        let mut series = vec![Series::new(columns::HOUR, &hours)];
        for (idx, name) in names.iter().enumerate() {
            let counts: Vec<i64> = rows.iter().map(|(_, counts)| counts[idx]).collect();
            series.push(Series::new(name, &counts));
        }
        (DataFrame::new(series).unwrap(), names)
    }

    #[test]
    fn test_peak_and_off_peak_means() {
        let (df, names) = volume_frame(&[(9, [70, 10, 30, 50, 20, 60, 40])]);
        let out = with_hourly_stats(&df, &names, 5).unwrap();

        // Top five of [70 60 50 40 30 20 10] average to 50; the rest to 15.
        let pico = out.column(columns::MEDIA_PICO).unwrap().f64().unwrap();
        assert_eq!(pico.get(0), Some(50.0));
        let vale = out.column(columns::MEDIA_VALE).unwrap().f64().unwrap();
        assert_eq!(vale.get(0), Some(15.0));
        let geral = out.column(columns::MEDIA_GERAL).unwrap().i64().unwrap();
        assert_eq!(geral.get(0), Some(40));
    }

    #[test]
    fn test_general_mean_truncates_toward_zero() {
        let (df, names) = volume_frame(&[(9, [1, 1, 1, 1, 1, 1, 2])]);
        let out = with_hourly_stats(&df, &names, 5).unwrap();
        // 8 / 7 = 1.142..., truncated to 1.
        let geral = out.column(columns::MEDIA_GERAL).unwrap().i64().unwrap();
        assert_eq!(geral.get(0), Some(1));
    }

    #[test]
    fn test_fewer_dates_than_window_uses_all_values() {
        let names = vec!["2024-01-01".to_string(), "2024-01-02".to_string()];
        let df = DataFrame::new(vec![
            Series::new(columns::HOUR, &[9i64]),
            Series::new("2024-01-01", &[10i64]),
            Series::new("2024-01-02", &[20i64]),
        ])
        .unwrap();

        let out = with_hourly_stats(&df, &names, 5).unwrap();
        let pico = out.column(columns::MEDIA_PICO).unwrap().f64().unwrap();
        assert_eq!(pico.get(0), Some(15.0));
        // Nothing remains after the window: off-peak is null, not 0.
        let vale = out.column(columns::MEDIA_VALE).unwrap().f64().unwrap();
        assert_eq!(vale.get(0), None);
    }

    #[test]
    fn test_exactly_window_dates_gives_null_off_peak() {
        let names: Vec<String> = (1..=5).map(|d| format!("2024-01-{:02}", d)).collect();
        let mut series = vec![Series::new(columns::HOUR, &[9i64])];
        for name in &names {
            series.push(Series::new(name, &[10i64]));
        }
        let df = DataFrame::new(series).unwrap();

        let out = with_hourly_stats(&df, &names, 5).unwrap();
        let vale = out.column(columns::MEDIA_VALE).unwrap().f64().unwrap();
        assert_eq!(vale.get(0), None);
    }

    #[test]
    fn test_peak_window_is_configurable() {
        let (df, names) = volume_frame(&[(9, [70, 10, 30, 50, 20, 60, 40])]);
        let out = with_hourly_stats(&df, &names, 2).unwrap();

        let pico = out.column(columns::MEDIA_PICO).unwrap().f64().unwrap();
        assert_eq!(pico.get(0), Some(65.0));
        let vale = out.column(columns::MEDIA_VALE).unwrap().f64().unwrap();
        assert_eq!(vale.get(0), Some(30.0));
    }

    #[test]
    fn test_zero_peak_window_rejected() {
        let (df, names) = volume_frame(&[(9, [1, 2, 3, 4, 5, 6, 7])]);
        let err = with_hourly_stats(&df, &names, 0).unwrap_err();
        assert!(matches!(err, CapacityError::InvalidParameter(_)));
    }

    #[test]
    fn test_peak_at_least_off_peak() {
        let (df, names) = volume_frame(&[(9, [3, 9, 1, 4, 1, 5, 9]), (10, [0, 0, 0, 0, 0, 0, 0])]);
        let out = with_hourly_stats(&df, &names, 5).unwrap();
        let pico = out.column(columns::MEDIA_PICO).unwrap().f64().unwrap();
        let vale = out.column(columns::MEDIA_VALE).unwrap().f64().unwrap();
        for row in 0..out.height() {
            let (p, v) = (pico.get(row).unwrap(), vale.get(row).unwrap());
            assert!(p >= v);
            assert!(v >= 0.0);
        }
    }
}
