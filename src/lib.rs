//! Reporting metrics engine for a community road race project.
//!
//! This crate recomputes project-reporting metrics from immutable,
//! period-indexed fact tables: budget lines, risk records, objective
//! curves, team-maturity states and satisfaction survey buckets. A
//! presentation layer selects a reporting period and receives a complete
//! [`models::Summary`] to populate metric displays, charts and alert
//! banners.

#![warn(missing_docs)]

pub mod aggregation;
pub mod data;
pub mod error;
pub mod models;
