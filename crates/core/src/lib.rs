//! Projectboard Core - project records and the dashboard numbers derived from them.
//!
//! This crate holds everything the dashboard computes: the record model,
//! currency normalization, aggregate totals, payment-status tones and the
//! search/pagination rules of the project table. It performs no I/O; records
//! are supplied by the `sheet-source` crate.

pub mod constants;
pub mod errors;
pub mod projects;

pub use projects::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
