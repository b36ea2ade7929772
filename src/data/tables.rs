//! Dataset table types.
//!
//! This module contains the strongly-typed, series-form structures that
//! dataset files deserialize into, and the [`ProjectData`] store they are
//! expanded into. Fact tables are authored as per-entity series aligned
//! with the period catalog; expansion derives the per-period records
//! (trends, priorities) the aggregation layer consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{MetricsError, MetricsResult};
use crate::models::{
    BudgetCategory, BudgetLine, ObjectiveRecord, Period, PeriodCatalog, RiskLevel, RiskRecord,
    SatisfactionRecord, TeamMemberState, TeamState, Trend,
};

/// Metadata about the project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMeta {
    /// The project's name.
    pub name: String,
    /// The edition or season of the event (e.g., "2025").
    pub version: String,
    /// URL of the source workbook the tables were authored in.
    pub source_url: String,
}

/// One reporting period as authored in `project.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodSpec {
    /// The period label (e.g., "S9").
    pub label: String,
    /// The Monday the period starts on.
    pub date: NaiveDate,
}

/// Project file structure (`project.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata.
    pub project: ProjectMeta,
    /// The ordered period catalog.
    pub periods: Vec<PeriodSpec>,
    /// Overall completion percentage per period.
    pub progress: Vec<u32>,
}

/// One category's budget series as authored in `budget.yaml`.
///
/// The three budget figures are fixed for the project's lifetime; only
/// the consumed amount is a per-period series.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryBudget {
    /// The spending category.
    pub category: BudgetCategory,
    /// The initially planned budget.
    pub initial: Decimal,
    /// The last approved budget.
    pub approved: Decimal,
    /// The current cost estimate.
    pub estimated: Decimal,
    /// Cumulative consumed amount per period.
    pub consumed: Vec<Decimal>,
}

/// Budget file structure (`budget.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// One entry per tracked category.
    pub categories: Vec<CategoryBudget>,
}

/// One risk's assessment series as authored in `risks.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskSeries {
    /// The risk's name.
    pub name: String,
    /// Severity level per period.
    pub severity: Vec<RiskLevel>,
    /// Impact score per period, each bounded to 1..=10.
    pub impact: Vec<u8>,
}

/// Risks file structure (`risks.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    /// One entry per tracked risk.
    pub risks: Vec<RiskSeries>,
}

/// One objective's progression as authored in `objectives.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectiveSeries {
    /// The objective's name.
    pub name: String,
    /// The target value.
    pub target: u32,
    /// Achieved value per period.
    pub achieved: Vec<u32>,
}

/// Objectives file structure (`objectives.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectivesConfig {
    /// One entry per tracked objective.
    pub objectives: Vec<ObjectiveSeries>,
}

/// One member's maturity progression as authored in `team.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSeries {
    /// The member's name.
    pub name: String,
    /// Maturity state per period.
    pub states: Vec<TeamState>,
}

/// Team file structure (`team.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TeamConfig {
    /// One entry per team member.
    pub members: Vec<MemberSeries>,
}

/// Satisfaction file structure (`satisfaction.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct SatisfactionConfig {
    /// Survey bucket counts per period, each row summing to 100.
    pub periods: Vec<SatisfactionRecord>,
}

/// The complete, validated project dataset.
///
/// All fact tables are expanded into per-period records and indexed by
/// period position; the catalog maps labels to positions. The store is
/// populated once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProjectData {
    meta: ProjectMeta,
    periods: PeriodCatalog,
    progress: Vec<u32>,
    budget: Vec<Vec<BudgetLine>>,
    risks: Vec<Vec<RiskRecord>>,
    objectives: Vec<Vec<ObjectiveRecord>>,
    team: Vec<Vec<TeamMemberState>>,
    satisfaction: Vec<SatisfactionRecord>,
}

impl ProjectData {
    /// Builds the store from its file-shaped parts, validating every
    /// table against the period catalog and expanding the authored
    /// series into per-period records.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentTable` when any series length disagrees with
    /// the catalog, an amount is negative, a risk impact leaves 1..=10, a
    /// satisfaction row does not sum to 100, or an entity name or
    /// category appears twice.
    pub fn new(
        project: ProjectConfig,
        budget: BudgetConfig,
        risks: RiskConfig,
        objectives: ObjectivesConfig,
        team: TeamConfig,
        satisfaction: SatisfactionConfig,
    ) -> MetricsResult<Self> {
        let periods = PeriodCatalog::new(
            project
                .periods
                .into_iter()
                .map(|p| Period {
                    label: p.label,
                    reference_date: p.date,
                })
                .collect(),
        )?;
        let count = periods.len();

        check_series_len("progress", "progress", project.progress.len(), count)?;
        if let Some(value) = project.progress.iter().find(|p| **p > 100) {
            return Err(inconsistent(
                "progress",
                format!("completion percentage {} exceeds 100", value),
            ));
        }

        let budget = expand_budget(budget, count)?;
        let risks = expand_risks(risks, count)?;
        let objectives = expand_objectives(objectives, count)?;
        let team = expand_team(team, count)?;

        check_series_len(
            "satisfaction",
            "periods",
            satisfaction.periods.len(),
            count,
        )?;
        for (i, record) in satisfaction.periods.iter().enumerate() {
            record.validate(&periods.get(i).label)?;
        }

        Ok(Self {
            meta: project.project,
            periods,
            progress: project.progress,
            budget,
            risks,
            objectives,
            team,
            satisfaction: satisfaction.periods,
        })
    }

    /// Returns the project metadata.
    pub fn meta(&self) -> &ProjectMeta {
        &self.meta
    }

    /// Returns the period catalog.
    pub fn periods(&self) -> &PeriodCatalog {
        &self.periods
    }

    /// Resolves a period label to its index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn resolve_period(&self, label: &str) -> MetricsResult<usize> {
        self.periods.index_of(label)
    }

    /// Overall completion percentage for the period at `index`.
    pub fn progress_at(&self, index: usize) -> u32 {
        self.progress[index]
    }

    /// Budget lines for the period at `index`, in catalog order.
    pub fn budget_at(&self, index: usize) -> &[BudgetLine] {
        &self.budget[index]
    }

    /// Risk records for the period at `index`.
    pub fn risks_at(&self, index: usize) -> &[RiskRecord] {
        &self.risks[index]
    }

    /// Objective records for the period at `index`.
    pub fn objectives_at(&self, index: usize) -> &[ObjectiveRecord] {
        &self.objectives[index]
    }

    /// Team member states for the period at `index`.
    pub fn team_at(&self, index: usize) -> &[TeamMemberState] {
        &self.team[index]
    }

    /// Satisfaction buckets for the period at `index`.
    pub fn satisfaction_at(&self, index: usize) -> &SatisfactionRecord {
        &self.satisfaction[index]
    }
}

fn inconsistent(table: &str, message: String) -> MetricsError {
    MetricsError::InconsistentTable {
        table: table.to_string(),
        message,
    }
}

fn check_series_len(table: &str, entity: &str, len: usize, expected: usize) -> MetricsResult<()> {
    if len != expected {
        return Err(inconsistent(
            table,
            format!(
                "series for {} has {} entries, expected {} periods",
                entity, len, expected
            ),
        ));
    }
    Ok(())
}

fn expand_budget(config: BudgetConfig, count: usize) -> MetricsResult<Vec<Vec<BudgetLine>>> {
    let mut categories = config.categories;
    for (i, entry) in categories.iter().enumerate() {
        if categories[..i].iter().any(|c| c.category == entry.category) {
            return Err(inconsistent(
                "budget",
                format!("category '{}' appears twice", entry.category.display_name()),
            ));
        }
        check_series_len("budget", entry.category.display_name(), entry.consumed.len(), count)?;
        let amounts = [entry.initial, entry.approved, entry.estimated];
        if amounts.iter().any(|a| a.is_sign_negative())
            || entry.consumed.iter().any(|a| a.is_sign_negative())
        {
            return Err(inconsistent(
                "budget",
                format!(
                    "category '{}' holds a negative amount",
                    entry.category.display_name()
                ),
            ));
        }
    }
    categories.sort_by_key(|c| c.category.catalog_index());

    let rows = (0..count)
        .map(|i| {
            categories
                .iter()
                .map(|c| BudgetLine {
                    category: c.category,
                    initial: c.initial,
                    approved: c.approved,
                    estimated: c.estimated,
                    consumed: c.consumed[i],
                })
                .collect()
        })
        .collect();
    Ok(rows)
}

fn expand_risks(config: RiskConfig, count: usize) -> MetricsResult<Vec<Vec<RiskRecord>>> {
    for (i, risk) in config.risks.iter().enumerate() {
        if config.risks[..i].iter().any(|r| r.name == risk.name) {
            return Err(inconsistent(
                "risks",
                format!("risk '{}' appears twice", risk.name),
            ));
        }
        check_series_len("risks", &risk.name, risk.severity.len(), count)?;
        check_series_len("risks", &risk.name, risk.impact.len(), count)?;
        if let Some(impact) = risk.impact.iter().find(|i| !(1..=10).contains(*i)) {
            return Err(inconsistent(
                "risks",
                format!("impact score {} for '{}' is outside 1..=10", impact, risk.name),
            ));
        }
    }

    let rows = (0..count)
        .map(|i| {
            config
                .risks
                .iter()
                .map(|r| {
                    // Trend compares with the next period; the last period is Flat.
                    let trend = if i + 1 < count {
                        Trend::between(r.severity[i], r.severity[i + 1])
                    } else {
                        Trend::Flat
                    };
                    RiskRecord::new(r.name.clone(), r.severity[i], trend, r.impact[i])
                })
                .collect()
        })
        .collect();
    Ok(rows)
}

fn expand_objectives(
    config: ObjectivesConfig,
    count: usize,
) -> MetricsResult<Vec<Vec<ObjectiveRecord>>> {
    for (i, objective) in config.objectives.iter().enumerate() {
        if config.objectives[..i].iter().any(|o| o.name == objective.name) {
            return Err(inconsistent(
                "objectives",
                format!("objective '{}' appears twice", objective.name),
            ));
        }
        check_series_len("objectives", &objective.name, objective.achieved.len(), count)?;
    }

    let rows = (0..count)
        .map(|i| {
            config
                .objectives
                .iter()
                .map(|o| ObjectiveRecord {
                    name: o.name.clone(),
                    target: o.target,
                    achieved: o.achieved[i],
                })
                .collect()
        })
        .collect();
    Ok(rows)
}

fn expand_team(config: TeamConfig, count: usize) -> MetricsResult<Vec<Vec<TeamMemberState>>> {
    for (i, member) in config.members.iter().enumerate() {
        if config.members[..i].iter().any(|m| m.name == member.name) {
            return Err(inconsistent(
                "team",
                format!("member '{}' appears twice", member.name),
            ));
        }
        check_series_len("team", &member.name, member.states.len(), count)?;
    }

    let rows = (0..count)
        .map(|i| {
            config
                .members
                .iter()
                .map(|m| {
                    // Trend compares with the previous period; the first period is Flat.
                    let trend = if i == 0 {
                        Trend::Flat
                    } else {
                        Trend::between(m.states[i - 1], m.states[i])
                    };
                    TeamMemberState {
                        member: m.name.clone(),
                        state: m.states[i],
                        trend,
                    }
                })
                .collect()
        })
        .collect();
    Ok(rows)
}
