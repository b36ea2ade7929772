//! Core data models for the reporting metrics engine.
//!
//! This module contains all the domain models used throughout the engine.

mod budget;
mod objective;
mod period;
mod risk;
mod satisfaction;
mod summary;
mod team;
mod trend;

pub use budget::{BudgetCategory, BudgetLine};
pub use objective::ObjectiveRecord;
pub use period::{Period, PeriodCatalog};
pub use risk::{RiskLevel, RiskPriority, RiskRecord};
pub use satisfaction::SatisfactionRecord;
pub use summary::{
    Alert, AlertSeverity, BudgetTotals, CategoryBreakdown, MetricDelta, ObjectiveStatus,
    PhaseProgress, ProjectPhase, RiskCounts, Summary, TeamStateCounts,
};
pub use team::{TeamMemberState, TeamState};
pub use trend::Trend;
