//! Error types for the capacity pipeline.

use polars::prelude::PolarsError;

/// Result type for pipeline operations with typed errors.
pub type CapacityResult<T> = Result<T, CapacityError>;

/// Error type for the capacity pipeline.
///
/// Fatal conditions only. Recoverable data-quality issues (unparsable talk
/// times, hours dropped by the merge) are coerced or counted instead and
/// surfaced through `PipelineDiagnostics`.
#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("row {row}: hour {value} is outside the range 0-23")]
    InvalidHour { row: usize, value: i64 },

    #[error("row {row}: column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: String,
        message: String,
    },

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("{0} contains no usable rows")]
    EmptyInput(String),

    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
