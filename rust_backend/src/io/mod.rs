//! File input and output.
//!
//! [`loaders`] dispatches on file extension to the CSV or XLSX parsers;
//! [`export`] writes the final table back out as CSV.

pub mod export;
pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use export::write_report_csv;
pub use loaders::SpreadsheetLoader;
