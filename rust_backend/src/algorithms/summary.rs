use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::columns;
use crate::core::error::CapacityResult;

/// How many values/hours the top-N summary fields carry.
const TOP_N: usize = 5;

/// Scalar and top-N reduction of the final table.
///
/// This is the only thing the question-answering collaborator sees, so it
/// must be a faithful, deterministic reduction: field order is fixed by the
/// struct declaration and ties in the top-N selections break by ascending
/// hour.
///
/// `media_vale` is `None` (serialized as null) when every off-peak mean is
/// null, i.e. no hour had more date columns than the peak window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Mean of `media_geral` across hours.
    pub media_geral: f64,
    /// Maximum `Media_pico`.
    pub media_pico: f64,
    /// Minimum non-null `madia_vale`.
    pub media_vale: Option<f64>,
    /// The five largest `Capacity_Calculado_pico` values, descending.
    pub top_5_capacity_pico: Vec<i64>,
    /// The five largest `Capacity_Calculado_vale` values, descending.
    pub top_5_capacity_vale: Vec<i64>,
    /// Hours of the five largest `Capacity_Calculado` values.
    pub top_5_horas_capacity: Vec<i64>,
}

impl TableSummary {
    /// Serialize as the key->value record handed to downstream consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Reduce the final table to a [`TableSummary`].
pub fn build_summary(df: &DataFrame) -> CapacityResult<TableSummary> {
    let media_geral = df
        .column(columns::MEDIA_GERAL)?
        .i64()?
        .mean()
        .unwrap_or(0.0);
    let media_pico = df
        .column(columns::MEDIA_PICO)?
        .f64()?
        .max()
        .unwrap_or(0.0);
    // Nulls are skipped; an all-null column gives None.
    let media_vale = df.column(columns::MEDIA_VALE)?.f64()?.min();

    let top_5_capacity_pico = top_values(df.column(columns::CAPACITY_PICO)?.i64()?);
    let top_5_capacity_vale = top_values(df.column(columns::CAPACITY_VALE)?.i64()?);

    let hours = df.column(columns::HOUR)?.i64()?;
    let capacity = df.column(columns::CAPACITY)?.i64()?;
    let mut by_capacity: Vec<(i64, i64)> = hours
        .into_iter()
        .zip(capacity.into_iter())
        .filter_map(|(hour, value)| Some((hour?, value?)))
        .collect();
    by_capacity.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let top_5_horas_capacity = by_capacity
        .into_iter()
        .take(TOP_N)
        .map(|(hour, _)| hour)
        .collect();

    Ok(TableSummary {
        media_geral,
        media_pico,
        media_vale,
        top_5_capacity_pico,
        top_5_capacity_vale,
        top_5_horas_capacity,
    })
}

fn top_values(column: &Int64Chunked) -> Vec<i64> {
    let mut values: Vec<i64> = column.into_iter().flatten().collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.truncate(TOP_N);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new(columns::HOUR, &[8i64, 9, 10, 11, 12, 13, 14]),
            Series::new(columns::MEDIA_GERAL, &[10i64, 20, 30, 40, 50, 60, 70]),
            Series::new(
                columns::MEDIA_PICO,
                &[15.0, 25.0, 35.0, 45.0, 55.0, 65.0, 75.0],
            ),
            Series::new(
                columns::MEDIA_VALE,
                &[
                    Some(5.0),
                    Some(12.0),
                    Some(22.0),
                    None,
                    Some(42.0),
                    Some(52.0),
                    Some(62.0),
                ],
            ),
            Series::new(columns::CAPACITY, &[1i64, 2, 3, 4, 5, 6, 7]),
            Series::new(columns::CAPACITY_PICO, &[2i64, 3, 4, 5, 6, 7, 8]),
            Series::new(
                columns::CAPACITY_VALE,
                &[Some(1i64), Some(1), Some(2), None, Some(4), Some(5), Some(6)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_summary_values() {
        let summary = build_summary(&final_frame()).unwrap();
        assert_eq!(summary.media_geral, 40.0);
        assert_eq!(summary.media_pico, 75.0);
        assert_eq!(summary.media_vale, Some(5.0));
        assert_eq!(summary.top_5_capacity_pico, vec![8, 7, 6, 5, 4]);
        assert_eq!(summary.top_5_capacity_vale, vec![6, 5, 4, 2, 1]);
        assert_eq!(summary.top_5_horas_capacity, vec![14, 13, 12, 11, 10]);
    }

    #[test]
    fn test_summary_json_field_order_is_stable() {
        let summary = build_summary(&final_frame()).unwrap();
        let json = summary.to_json().unwrap();

        let keys: Vec<usize> = [
            "media_geral",
            "media_pico",
            "media_vale",
            "top_5_capacity_pico",
            "top_5_capacity_vale",
            "top_5_horas_capacity",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_ties_break_by_ascending_hour() {
        let df = DataFrame::new(vec![
            Series::new(columns::HOUR, &[8i64, 9, 10]),
            Series::new(columns::MEDIA_GERAL, &[10i64, 10, 10]),
            Series::new(columns::MEDIA_PICO, &[10.0, 10.0, 10.0]),
            Series::new(columns::MEDIA_VALE, &[Some(1.0), Some(1.0), Some(1.0)]),
            Series::new(columns::CAPACITY, &[3i64, 3, 3]),
            Series::new(columns::CAPACITY_PICO, &[3i64, 3, 3]),
            Series::new(columns::CAPACITY_VALE, &[Some(1i64), Some(1), Some(1)]),
        ])
        .unwrap();

        let summary = build_summary(&df).unwrap();
        assert_eq!(summary.top_5_horas_capacity, vec![8, 9, 10]);
    }

    #[test]
    fn test_all_null_off_peak_serializes_as_null() {
        let df = DataFrame::new(vec![
            Series::new(columns::HOUR, &[9i64]),
            Series::new(columns::MEDIA_GERAL, &[10i64]),
            Series::new(columns::MEDIA_PICO, &[10.0]),
            Series::new(columns::MEDIA_VALE, &[None::<f64>]),
            Series::new(columns::CAPACITY, &[1i64]),
            Series::new(columns::CAPACITY_PICO, &[2i64]),
            Series::new(columns::CAPACITY_VALE, &[None::<i64>]),
        ])
        .unwrap();

        let summary = build_summary(&df).unwrap();
        assert_eq!(summary.media_vale, None);
        assert!(summary.top_5_capacity_vale.is_empty());
        assert!(summary.to_json().unwrap().contains("\"media_vale\":null"));
    }
}
