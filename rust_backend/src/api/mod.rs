//! Front-end-facing Data Transfer Objects (DTOs).
//!
//! These types use only serde-friendly primitives (String, i64, f64, Vec)
//! and are isolated from the polars frames the pipeline works with. A chart
//! or chat front end consumes these without knowing the table layout.

pub mod qa;
pub mod types;

pub use qa::build_question_prompt;
pub use types::{capacity_series, CapacityPoint, CapacityRequest, ReportMeta};
