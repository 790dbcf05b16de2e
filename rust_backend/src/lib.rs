//! Contact-center capacity backend.
//!
//! Turns two operational sheets, hourly contact volumes and average talk
//! times, into an hour-by-hour staffing table: pivot the volumes into an
//! hour x date matrix, derive peak/off-peak/general means, merge in handle
//! times and apply a shrinkage-adjusted workload formula. A summary of the
//! result feeds charting and natural-language Q&A front ends.
//!
//! [`preprocessing::pipeline::CapacityPipeline`] is the main entry point;
//! [`compute_capacity`] is the one-call convenience wrapper.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod io;
pub mod parsing;
pub mod preprocessing;

pub use crate::core::domain::CapacityParams;
pub use crate::core::error::{CapacityError, CapacityResult};
pub use crate::preprocessing::pipeline::{
    compute_capacity, CapacityPipeline, CapacityReport, PipelineConfig, PipelineDiagnostics,
};
