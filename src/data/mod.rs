//! Project dataset loading and storage.
//!
//! Fact tables are authored as period-aligned series, either in a YAML
//! dataset directory ([`ProjectData::load`]) or in code
//! ([`ProjectData::demo`]), and expanded once into the immutable
//! [`ProjectData`] store the aggregation layer reads.

mod demo;
mod loader;
mod tables;

pub use tables::{
    BudgetConfig, CategoryBudget, MemberSeries, ObjectiveSeries, ObjectivesConfig, PeriodSpec,
    ProjectConfig, ProjectData, ProjectMeta, RiskConfig, RiskSeries, SatisfactionConfig,
    TeamConfig,
};
