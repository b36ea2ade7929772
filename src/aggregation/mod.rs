//! Aggregation logic for the reporting metrics engine.
//!
//! This module contains all the reporting computations: period-over-period
//! deltas, budget totals and per-category breakdowns, risk severity
//! tallies, objective completion tracking, team maturity tallies, project
//! phase completion, threshold alert evaluation, and the [`Aggregator`]
//! that orchestrates them into a full [`crate::models::Summary`].

mod alerts;
mod budget_breakdown;
mod budget_totals;
mod delta;
mod engine;
mod objective_tracking;
mod phase_progress;
mod risk_profile;
mod team_maturity;

pub use alerts::{
    ALERT_RULES, AlertContext, AlertRule, PARTICIPANTS_OBJECTIVE, VOLUNTEERS_OBJECTIVE,
    evaluate_alerts,
};
pub use budget_breakdown::budget_by_category;
pub use budget_totals::{budget_evolution, budget_totals};
pub use delta::{compute_delta, current_vs_previous};
pub use engine::Aggregator;
pub use objective_tracking::{objective_average, objective_status};
pub use phase_progress::phase_progress;
pub use risk_profile::risk_counts;
pub use team_maturity::{team_evolution, team_state_counts};
