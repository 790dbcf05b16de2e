//! Column name constants shared across the pipeline.
//!
//! Input and output column names are part of the external contract: uploaded
//! sheets are matched against the input names, and exported tables and charts
//! are consumed by name. Centralizing them here keeps the parsers, the
//! pipeline stages and the exporter in agreement.
//!
//! `MEDIA_VALE` keeps its historical misspelling ("madia") because downstream
//! spreadsheets and chart configurations already reference it by that name.

/// Volume sheet: calendar date of the contact (may carry a time-of-day).
pub const DATE: &str = "Date";
/// Both sheets: hour of day, integer 0-23. Also the join key.
pub const HOUR: &str = "Hour";
/// Volume sheet: inbound contact count for (date, hour).
pub const ENTRANTES: &str = "Entrantes";
/// Handle-time sheet: average talk time as `MM:SS` text.
pub const TALK_TIME: &str = "Average Talk Time";

/// Derived: normalized handle time in whole seconds.
pub const TALK_TIME_SECONDS: &str = "Average Talk Time (seconds)";
/// Derived: mean of the top-N date counts per hour.
pub const MEDIA_PICO: &str = "Media_pico";
/// Derived: mean of the remaining date counts per hour (null when none remain).
pub const MEDIA_VALE: &str = "madia_vale";
/// Derived: truncated mean across all date counts per hour.
pub const MEDIA_GERAL: &str = "media_geral";
/// Parameter echoed into the table: agents per slot.
pub const QTD_SLOTS: &str = "Qtd_Slots";
/// Required agents for the general mean volume (truncated).
pub const CAPACITY: &str = "Capacity_Calculado";
/// Required agents for the peak volume (rounded up).
pub const CAPACITY_PICO: &str = "Capacity_Calculado_pico";
/// Required agents for the off-peak volume (rounded up, null when undefined).
pub const CAPACITY_VALE: &str = "Capacity_Calculado_vale";
