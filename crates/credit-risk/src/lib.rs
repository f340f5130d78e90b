//! Deterministic credit risk metrics and underwriting decision support.
//!
//! The [`underwriting`] module holds the calculators, classifiers, and the
//! HTTP surface; [`config`] and [`telemetry`] carry the runtime plumbing
//! shared with the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod underwriting;
