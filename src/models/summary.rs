//! Summary models for the reporting metrics engine.
//!
//! This module contains the [`Summary`] type and its associated structures
//! that capture all outputs of a reporting computation for one period:
//! headline deltas, budget totals and breakdowns, risk and team tallies,
//! objective status rows and threshold alerts.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    BudgetCategory, RiskLevel, RiskRecord, SatisfactionRecord, TeamMemberState, TeamState,
};

/// A metric value paired with its period-over-period movement.
///
/// The first period of the catalog is its own predecessor, so its delta is
/// always zero. `delta_percent` is zero when the previous value is zero
/// (guarded division, not an error).
///
/// # Example
///
/// ```
/// use race_metrics::models::MetricDelta;
/// use rust_decimal::Decimal;
///
/// let delta = MetricDelta {
///     current: Decimal::from(70),
///     previous: Decimal::from(60),
///     delta: Decimal::from(10),
///     delta_percent: Decimal::from_str_exact("16.67").unwrap(),
/// };
/// assert_eq!(delta.delta, delta.current - delta.previous);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// The value for the selected period.
    pub current: Decimal,
    /// The value for the predecessor period.
    pub previous: Decimal,
    /// `current - previous`.
    pub delta: Decimal,
    /// `delta / previous * 100`, or 0 when `previous` is 0.
    pub delta_percent: Decimal,
}

/// Aggregated budget figures for one period, summed across categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// Sum of initially planned budgets.
    pub initial: Decimal,
    /// Sum of last approved budgets.
    pub approved: Decimal,
    /// Sum of current cost estimates.
    pub estimated: Decimal,
    /// Sum of consumed amounts.
    pub consumed: Decimal,
    /// `approved - consumed`; negative when the project is over budget.
    pub remaining: Decimal,
    /// `consumed / approved * 100`, or 0 when `approved` is 0.
    pub consumption_ratio: Decimal,
}

/// One category's share of the period's spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// The spending category.
    pub category: BudgetCategory,
    /// Amount consumed by the category.
    pub consumed: Decimal,
    /// Share of the period's total consumed amount, as a percentage.
    /// 0 when nothing was consumed at all.
    pub share_of_total: Decimal,
    /// Whether the category consumed more than its approved budget.
    pub over_budget: bool,
}

/// Tally of risks by severity level for one period.
///
/// Every level is always present, defaulting to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    /// Number of minor risks.
    pub minor: u32,
    /// Number of moderate risks.
    pub moderate: u32,
    /// Number of major risks.
    pub major: u32,
}

impl RiskCounts {
    /// Returns the count for a severity level.
    pub fn count_for(&self, level: RiskLevel) -> u32 {
        match level {
            RiskLevel::Minor => self.minor,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::Major => self.major,
        }
    }

    /// Total number of tracked risks.
    pub fn total(&self) -> u32 {
        self.minor + self.moderate + self.major
    }
}

/// Tally of team members by maturity state for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStateCounts {
    /// Members absent this period.
    pub absent: u32,
    /// Members in the forming stage.
    pub forming: u32,
    /// Members in the confronting stage.
    pub confronting: u32,
    /// Members in the normalizing stage.
    pub normalizing: u32,
    /// Members performing.
    pub performing: u32,
}

impl TeamStateCounts {
    /// Returns the count for a maturity state.
    pub fn count_for(&self, state: TeamState) -> u32 {
        match state {
            TeamState::Absent => self.absent,
            TeamState::Forming => self.forming,
            TeamState::Confronting => self.confronting,
            TeamState::Normalizing => self.normalizing,
            TeamState::Performing => self.performing,
        }
    }

    /// Number of members in any state other than `Absent`.
    pub fn active_total(&self) -> u32 {
        self.forming + self.confronting + self.normalizing + self.performing
    }

    /// Number of members tracked, absent ones included.
    pub fn total(&self) -> u32 {
        self.absent + self.active_total()
    }
}

/// One objective's status row for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveStatus {
    /// The objective's name.
    pub name: String,
    /// The target value.
    pub target: u32,
    /// The value achieved so far.
    pub achieved: u32,
    /// Floored completion percentage. May exceed 100.
    pub percentage: u32,
}

/// One of the four project phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    /// Design and kickoff.
    Initiation,
    /// Definition and planning.
    Planning,
    /// Implementation up to race day.
    Execution,
    /// Performance review and closure.
    Control,
}

impl ProjectPhase {
    /// All phases in chronological order.
    pub const ALL: [ProjectPhase; 4] = [
        ProjectPhase::Initiation,
        ProjectPhase::Planning,
        ProjectPhase::Execution,
        ProjectPhase::Control,
    ];
}

/// Completion percentage of one project phase as of a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    /// The phase.
    pub phase: ProjectPhase,
    /// Completion percentage, 0 to 100.
    pub percent: Decimal,
}

/// Escalation level attached to a fired alert rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Worth surfacing, no action forced.
    Moderate,
    /// Needs action this period.
    Major,
    /// Threatens the event if left unaddressed.
    Critical,
}

/// A threshold rule that fired for the selected period.
///
/// `details` carries the metric values the rule evaluated, as a JSON
/// object, so callers can render richer banners than the message alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Identifier of the rule that fired.
    pub rule_id: String,
    /// Human-readable rule name.
    pub name: String,
    /// The rule's declared severity.
    pub severity: AlertSeverity,
    /// Rendered message describing the condition.
    pub message: String,
    /// The metric values the rule evaluated.
    pub details: serde_json::Value,
}

/// The complete reporting summary for one period.
///
/// This is the single value object the presentation layer consumes to
/// populate metric displays, charts and alert banners. It is either
/// produced whole or the computation fails; no partial summaries exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Unique identifier for this summary.
    pub report_id: Uuid,
    /// When the summary was computed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that computed the summary.
    pub engine_version: String,
    /// The selected period's label.
    pub period: String,
    /// The selected period's reference date.
    pub reference_date: NaiveDate,
    /// Overall project progress with period-over-period movement.
    pub progress: MetricDelta,
    /// Average objective completion with period-over-period movement.
    pub objective_average: MetricDelta,
    /// Count of major risks with period-over-period movement.
    pub major_risks: MetricDelta,
    /// Registered participants with period-over-period movement, when the
    /// dataset tracks a "Participants" objective.
    pub participants: Option<MetricDelta>,
    /// Budget totals across all categories.
    pub budget: BudgetTotals,
    /// Per-category spending shares, ordered by descending share.
    pub budget_by_category: Vec<CategoryBreakdown>,
    /// Risk tally by severity.
    pub risk_counts: RiskCounts,
    /// Every tracked risk's assessment for the period.
    pub risks: Vec<RiskRecord>,
    /// Every objective's status row for the period.
    pub objectives: Vec<ObjectiveStatus>,
    /// Team tally by maturity state.
    pub team: TeamStateCounts,
    /// Every member's state and trend for the period.
    pub members: Vec<TeamMemberState>,
    /// Satisfaction survey buckets for the period.
    pub satisfaction: SatisfactionRecord,
    /// Completion of the four project phases as of the period.
    pub phases: Vec<PhaseProgress>,
    /// Threshold alerts that fired, in declared rule order.
    pub alerts: Vec<Alert>,
}
