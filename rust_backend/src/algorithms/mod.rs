//! Hourly statistics, the staffing formula and the table summary.
//!
//! # Components
//!
//! - [`stats`]: peak/off-peak/general means per hour
//! - [`capacity`]: the Erlang-free headcount formula with shrinkage
//! - [`summary`]: scalar and top-N reduction of the final table

pub mod capacity;
pub mod stats;
pub mod summary;

pub use capacity::with_capacity;
pub use stats::with_hourly_stats;
pub use summary::{build_summary, TableSummary};
