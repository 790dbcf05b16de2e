//! Core domain models and error types for capacity calculation.

pub mod columns;
pub mod domain;
pub mod error;
