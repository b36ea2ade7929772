//! The metrics aggregator.
//!
//! [`Aggregator`] holds the immutable project dataset and exposes the
//! reporting operations. Every operation takes the selected period as an
//! explicit argument, validates it against the catalog, and computes a
//! pure function of the fact tables; there is no ambient selection state
//! anywhere in the engine.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::data::ProjectData;
use crate::error::MetricsResult;
use crate::models::{
    Alert, BudgetTotals, CategoryBreakdown, MetricDelta, PhaseProgress, RiskCounts, Summary,
    TeamStateCounts,
};

use super::alerts::{AlertContext, PARTICIPANTS_OBJECTIVE, evaluate_alerts};
use super::budget_breakdown::budget_by_category;
use super::budget_totals::{budget_evolution, budget_totals};
use super::delta::current_vs_previous;
use super::objective_tracking::{objective_average, objective_status};
use super::phase_progress::phase_progress;
use super::risk_profile::risk_counts;
use super::team_maturity::{team_evolution, team_state_counts};

/// Computes reporting summaries over an immutable project dataset.
///
/// The dataset is shared behind an `Arc`, so the aggregator is cheap to
/// clone and hand to multiple consumers.
///
/// # Example
///
/// ```
/// use race_metrics::aggregation::Aggregator;
/// use race_metrics::data::ProjectData;
///
/// let aggregator = Aggregator::new(ProjectData::demo());
/// let summary = aggregator.compute_summary("S9")?;
/// assert_eq!(summary.period, "S9");
/// assert!(aggregator.compute_summary("S99").is_err());
/// # Ok::<(), race_metrics::error::MetricsError>(())
/// ```
#[derive(Clone)]
pub struct Aggregator {
    data: Arc<ProjectData>,
}

impl Aggregator {
    /// Creates an aggregator over the given dataset.
    pub fn new(data: ProjectData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Returns a reference to the underlying dataset.
    pub fn data(&self) -> &ProjectData {
        &self.data
    }

    /// Overall project progress with period-over-period movement.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn progress_delta(&self, period: &str) -> MetricsResult<MetricDelta> {
        let index = self.data.resolve_period(period)?;
        Ok(current_vs_previous(self.data.periods(), index, |i| {
            Decimal::from(self.data.progress_at(i))
        }))
    }

    /// Budget figures summed across all categories for the period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn budget_totals(&self, period: &str) -> MetricsResult<BudgetTotals> {
        let index = self.data.resolve_period(period)?;
        Ok(budget_totals(self.data.budget_at(index)))
    }

    /// Per-category spending shares for the period, ordered by descending
    /// share.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn budget_by_category(&self, period: &str) -> MetricsResult<Vec<CategoryBreakdown>> {
        let index = self.data.resolve_period(period)?;
        Ok(budget_by_category(self.data.budget_at(index)))
    }

    /// Budget totals for every period from the first through the selected
    /// one, in period order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn budget_evolution(&self, period: &str) -> MetricsResult<Vec<BudgetTotals>> {
        let index = self.data.resolve_period(period)?;
        Ok(budget_evolution(&self.data, index))
    }

    /// Risk tally by severity level for the period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn risk_counts(&self, period: &str) -> MetricsResult<RiskCounts> {
        let index = self.data.resolve_period(period)?;
        Ok(risk_counts(self.data.risks_at(index)))
    }

    /// Average objective completion percentage for the period, truncated
    /// toward zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn objective_average(&self, period: &str) -> MetricsResult<u32> {
        let index = self.data.resolve_period(period)?;
        Ok(objective_average(self.data.objectives_at(index)))
    }

    /// Team tally by maturity state for the period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn team_state_counts(&self, period: &str) -> MetricsResult<TeamStateCounts> {
        let index = self.data.resolve_period(period)?;
        Ok(team_state_counts(self.data.team_at(index)))
    }

    /// Team tallies for every period from the first through the selected
    /// one, in period order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn team_evolution(&self, period: &str) -> MetricsResult<Vec<TeamStateCounts>> {
        let index = self.data.resolve_period(period)?;
        Ok(team_evolution(&self.data, index))
    }

    /// Completion of the four project phases as of the period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn phase_progress(&self, period: &str) -> MetricsResult<Vec<PhaseProgress>> {
        let index = self.data.resolve_period(period)?;
        Ok(phase_progress(index))
    }

    /// Threshold alerts for the period, in declared rule order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn risk_alerts(&self, period: &str) -> MetricsResult<Vec<Alert>> {
        let index = self.data.resolve_period(period)?;
        Ok(evaluate_alerts(&AlertContext {
            period_index: index,
            objectives: self.data.objectives_at(index),
            team: self.data.team_at(index),
        }))
    }

    /// Computes the complete reporting summary for the period.
    ///
    /// The summary is produced whole or not at all; there are no partial
    /// results.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn compute_summary(&self, period: &str) -> MetricsResult<Summary> {
        let index = self.data.resolve_period(period)?;
        debug!(period, "Computing reporting summary");

        let data = &self.data;
        let catalog = data.periods();

        let progress =
            current_vs_previous(catalog, index, |i| Decimal::from(data.progress_at(i)));
        let objective_avg = current_vs_previous(catalog, index, |i| {
            Decimal::from(objective_average(data.objectives_at(i)))
        });
        let major_risks = current_vs_previous(catalog, index, |i| {
            Decimal::from(risk_counts(data.risks_at(i)).major)
        });

        // Present only when the dataset tracks a Participants objective;
        // expansion guarantees the objective exists for every period.
        let tracks_participants = data
            .objectives_at(index)
            .iter()
            .any(|o| o.name == PARTICIPANTS_OBJECTIVE);
        let participants = tracks_participants.then(|| {
            current_vs_previous(catalog, index, |i| {
                data.objectives_at(i)
                    .iter()
                    .find(|o| o.name == PARTICIPANTS_OBJECTIVE)
                    .map(|o| Decimal::from(o.achieved))
                    .unwrap_or(Decimal::ZERO)
            })
        });

        let alerts = evaluate_alerts(&AlertContext {
            period_index: index,
            objectives: data.objectives_at(index),
            team: data.team_at(index),
        });
        if !alerts.is_empty() {
            warn!(period, count = alerts.len(), "Threshold alerts active");
        }

        let risk_tally = risk_counts(data.risks_at(index));
        let summary = Summary {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            period: period.to_string(),
            reference_date: catalog.get(index).reference_date,
            progress,
            objective_average: objective_avg,
            major_risks,
            participants,
            budget: budget_totals(data.budget_at(index)),
            budget_by_category: budget_by_category(data.budget_at(index)),
            risk_counts: risk_tally,
            risks: data.risks_at(index).to_vec(),
            objectives: objective_status(data.objectives_at(index)),
            team: team_state_counts(data.team_at(index)),
            members: data.team_at(index).to_vec(),
            satisfaction: *data.satisfaction_at(index),
            phases: phase_progress(index),
            alerts,
        };

        info!(
            period,
            progress = %summary.progress.current,
            major_risks = summary.risk_counts.major,
            alerts = summary.alerts.len(),
            "Reporting summary computed"
        );

        Ok(summary)
    }
}
