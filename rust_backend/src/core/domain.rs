//! Domain models for contact-center capacity calculation.
//!
//! This module provides the core data structures that represent raw
//! spreadsheet rows (inbound volumes and handle times) and the user-supplied
//! calculation parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::CapacityError;

/// One raw row of the inbound-volume ("Entrantes") sheet.
///
/// A record counts inbound contacts for one `(date, hour)` cell. Several
/// records may share the same cell; the reshaper sums them. Any time-of-day
/// carried by the raw date cell has already been discarded at parse time.
///
/// # Examples
///
/// ```
/// use capacity_rs::core::domain::VolumeRecord;
/// use chrono::NaiveDate;
///
/// let record = VolumeRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     hour: 9,
///     count: 42,
/// };
/// assert_eq!(record.hour, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub count: i64,
}

/// One raw row of the handle-time ("TMA") sheet, before normalization.
///
/// `raw` holds the talk-time cell as text when the cell was text, `None`
/// otherwise. The normalizer turns it into a [`HandleTimeRecord`], coercing
/// anything unparsable to zero seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkTimeRecord {
    pub hour: u8,
    pub raw: Option<String>,
}

/// Normalized handle time for one hour, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleTimeRecord {
    pub hour: u8,
    pub talk_time_seconds: i64,
}

/// User-supplied parameters for the capacity formula.
///
/// The calculator validates these independently of any front-end input
/// widget minimums.
///
/// # Examples
///
/// ```
/// use capacity_rs::core::domain::CapacityParams;
///
/// let params = CapacityParams::default();
/// assert_eq!(params.slot_count, 10);
/// assert!(params.validate().is_ok());
///
/// let bad = CapacityParams { slot_count: 0, ..CapacityParams::default() };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityParams {
    /// Agents per slot, minimum 1.
    pub slot_count: i64,
    /// Break time as a percentage of the shift, e.g. `15.0` for 15%.
    pub break_percent: f64,
    /// Absenteeism as a percentage, e.g. `10.0` for 10%.
    pub absenteeism_percent: f64,
}

impl Default for CapacityParams {
    fn default() -> Self {
        Self {
            slot_count: 10,
            break_percent: 15.0,
            absenteeism_percent: 10.0,
        }
    }
}

impl CapacityParams {
    /// Rejects parameters the formula is not defined for.
    pub fn validate(&self) -> Result<(), CapacityError> {
        if self.slot_count < 1 {
            return Err(CapacityError::InvalidParameter(format!(
                "slot_count must be at least 1, got {}",
                self.slot_count
            )));
        }
        if !self.break_percent.is_finite() || self.break_percent < 0.0 {
            return Err(CapacityError::InvalidParameter(format!(
                "break_percent must be a non-negative number, got {}",
                self.break_percent
            )));
        }
        if !self.absenteeism_percent.is_finite() || self.absenteeism_percent < 0.0 {
            return Err(CapacityError::InvalidParameter(format!(
                "absenteeism_percent must be a non-negative number, got {}",
                self.absenteeism_percent
            )));
        }
        Ok(())
    }

    /// Shrinkage multiplier applied to the raw workload:
    /// `(1 + break) * (1 + absenteeism)`, both fractions of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use capacity_rs::core::domain::CapacityParams;
    ///
    /// let params = CapacityParams::default();
    /// assert!((params.adjustment() - 1.265).abs() < 1e-12);
    /// ```
    pub fn adjustment(&self) -> f64 {
        (1.0 + self.break_percent / 100.0) * (1.0 + self.absenteeism_percent / 100.0)
    }
}
