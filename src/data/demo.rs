//! Built-in demo dataset.
//!
//! The hand-authored mock tables for the 2025 community road race
//! project: 14 weekly reporting periods, 7 budget categories, 4 tracked
//! risks, 4 SMART objectives and a 9-member organizing team. Tests and
//! examples use this dataset so they need no file I/O.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{BudgetCategory, RiskLevel, SatisfactionRecord, TeamState};

use super::tables::{
    BudgetConfig, CategoryBudget, MemberSeries, ObjectiveSeries, ObjectivesConfig, PeriodSpec,
    ProjectConfig, ProjectData, ProjectMeta, RiskConfig, RiskSeries, SatisfactionConfig,
    TeamConfig,
};

/// Number of reporting periods in the demo timeline.
const PERIOD_COUNT: u32 = 14;

impl ProjectData {
    /// Returns the built-in demo dataset.
    ///
    /// The tables are authored in code and fully deterministic, so every
    /// call returns the same data.
    ///
    /// # Example
    ///
    /// ```
    /// use race_metrics::data::ProjectData;
    ///
    /// let data = ProjectData::demo();
    /// assert_eq!(data.periods().len(), 14);
    /// ```
    pub fn demo() -> Self {
        Self::new(
            demo_project(),
            demo_budget(),
            demo_risks(),
            demo_objectives(),
            demo_team(),
            demo_satisfaction(),
        )
        .expect("demo dataset is internally consistent")
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("demo date is well-formed")
}

fn demo_project() -> ProjectConfig {
    let dates = [
        "2025-02-24",
        "2025-03-03",
        "2025-03-10",
        "2025-03-17",
        "2025-03-24",
        "2025-03-31",
        "2025-04-07",
        "2025-04-14",
        "2025-04-21",
        "2025-04-28",
        "2025-05-05",
        "2025-05-12",
        "2025-05-19",
        "2025-05-26",
    ];
    ProjectConfig {
        project: ProjectMeta {
            name: "Jamais Seul community road race".to_string(),
            version: "2025".to_string(),
            source_url: "https://docs.google.com/spreadsheets/d/1NZX1-ZxpK5vkV1O5e1yBhYtq5k9lzWJy"
                .to_string(),
        },
        periods: dates
            .iter()
            .enumerate()
            .map(|(i, d)| PeriodSpec {
                label: format!("S{}", i + 1),
                date: date(d),
            })
            .collect(),
        progress: vec![7, 14, 21, 28, 35, 42, 50, 60, 70, 80, 86, 92, 96, 100],
    }
}

/// Spending ramps linearly toward `total` over the timeline, capped at
/// `cap` each period.
fn ramp(total: Decimal, cap: Decimal) -> Vec<Decimal> {
    (1..=PERIOD_COUNT)
        .map(|i| {
            let spend = (total * Decimal::from(i) / Decimal::from(PERIOD_COUNT)).round_dp(2);
            spend.min(cap)
        })
        .collect()
}

fn demo_budget() -> BudgetConfig {
    // Communication is the known overspend: 2070 consumed against a 1490
    // approved budget. Every other category ramps at 110% pace but is
    // capped at its approved amount.
    let overspend_pace = Decimal::new(11, 1);
    let fixed = [
        (BudgetCategory::Logistics, 2000, 1900, 1900),
        (BudgetCategory::SafetyRescue, 900, 900, 900),
        (BudgetCategory::Communication, 1490, 1490, 1490),
        (BudgetCategory::Registrations, 600, 600, 600),
        (BudgetCategory::Entertainment, 1000, 1100, 1100),
        (BudgetCategory::RiskPrevention, 1000, 1000, 1000),
        (BudgetCategory::Contingency, 200, 200, 200),
    ];

    let categories = fixed
        .iter()
        .map(|(category, initial, approved, estimated)| {
            let approved = Decimal::from(*approved);
            let consumed = if *category == BudgetCategory::Communication {
                let total = Decimal::from(2070);
                ramp(total, total)
            } else {
                ramp(approved * overspend_pace, approved)
            };
            CategoryBudget {
                category: *category,
                initial: Decimal::from(*initial),
                approved,
                estimated: Decimal::from(*estimated),
                consumed,
            }
        })
        .collect();

    BudgetConfig { categories }
}

fn severity_series(pattern: [u8; 14]) -> Vec<RiskLevel> {
    pattern
        .iter()
        .map(|p| match p {
            0 => RiskLevel::Minor,
            1 => RiskLevel::Moderate,
            _ => RiskLevel::Major,
        })
        .collect()
}

/// Impact tracks inversely with severity: 9 for minor, 7 for moderate,
/// 5 for major.
fn impact_series(pattern: [u8; 14]) -> Vec<u8> {
    pattern.iter().map(|p| 9 - p * 2).collect()
}

fn demo_risks() -> RiskConfig {
    let patterns: [(&str, [u8; 14]); 4] = [
        (
            "Volunteer withdrawals",
            [0, 0, 0, 1, 1, 2, 2, 2, 1, 1, 0, 0, 0, 0],
        ),
        (
            "Health and safety incidents",
            [2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ),
        (
            "Participant turnout shortfall",
            [0, 0, 1, 1, 2, 2, 2, 2, 1, 1, 0, 0, 0, 0],
        ),
        (
            "Extreme weather conditions",
            [0, 0, 0, 0, 1, 2, 2, 1, 1, 0, 0, 0, 0, 0],
        ),
    ];

    RiskConfig {
        risks: patterns
            .iter()
            .map(|(name, pattern)| RiskSeries {
                name: name.to_string(),
                severity: severity_series(*pattern),
                impact: impact_series(*pattern),
            })
            .collect(),
    }
}

fn demo_objectives() -> ObjectivesConfig {
    ObjectivesConfig {
        objectives: vec![
            ObjectiveSeries {
                name: "Participants".to_string(),
                target: 700,
                achieved: vec![
                    35, 70, 105, 140, 210, 280, 350, 420, 490, 560, 630, 700, 840, 910,
                ],
            },
            ObjectiveSeries {
                name: "Volunteers".to_string(),
                target: 40,
                achieved: vec![4, 8, 10, 12, 16, 20, 24, 30, 32, 34, 36, 38, 40, 42],
            },
            ObjectiveSeries {
                name: "Partners".to_string(),
                target: 10,
                achieved: vec![0, 1, 1, 2, 3, 4, 4, 5, 6, 7, 8, 9, 9, 10],
            },
            ObjectiveSeries {
                name: "Satisfaction".to_string(),
                target: 100,
                achieved: vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 60, 70, 80, 90],
            },
        ],
    }
}

fn demo_team() -> TeamConfig {
    let members: [(&str, [u8; 14]); 9] = [
        ("Adèle", [1, 2, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4]),
        ("Alexia", [1, 2, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4]),
        ("Hoang", [1, 2, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4]),
        ("Margaux", [1, 2, 2, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4]),
        ("Salma", [1, 2, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4]),
        ("Nordine", [1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 4, 4, 4]),
        ("Antoine", [1, 1, 1, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4]),
        ("Alexandre", [1, 1, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 4, 4]),
        ("Moumene", [1, 1, 0, 2, 2, 0, 3, 3, 0, 3, 0, 4, 0, 4]),
    ];

    TeamConfig {
        members: members
            .iter()
            .map(|(name, states)| MemberSeries {
                name: name.to_string(),
                states: states
                    .iter()
                    .map(|s| match s {
                        0 => TeamState::Absent,
                        1 => TeamState::Forming,
                        2 => TeamState::Confronting,
                        3 => TeamState::Normalizing,
                        _ => TeamState::Performing,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn demo_satisfaction() -> SatisfactionConfig {
    let rows: [(u32, u32, u32, u32, u32); 14] = [
        (94, 3, 1, 1, 1),
        (94, 3, 1, 1, 1),
        (95, 2, 1, 1, 1),
        (95, 2, 1, 1, 1),
        (95, 2, 1, 1, 1),
        (96, 2, 1, 1, 0),
        (97, 2, 1, 0, 0),
        (97, 2, 1, 0, 0),
        (98, 1, 1, 0, 0),
        (98, 1, 1, 0, 0),
        (99, 1, 0, 0, 0),
        (99, 1, 0, 0, 0),
        (99, 1, 0, 0, 0),
        (100, 0, 0, 0, 0),
    ];

    SatisfactionConfig {
        periods: rows
            .iter()
            .map(
                |(very_satisfied, satisfied, neutral, unsatisfied, very_unsatisfied)| {
                    SatisfactionRecord {
                        very_satisfied: *very_satisfied,
                        satisfied: *satisfied,
                        neutral: *neutral,
                        unsatisfied: *unsatisfied,
                        very_unsatisfied: *very_unsatisfied,
                    }
                },
            )
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskPriority, Trend};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_demo_has_fourteen_periods() {
        let data = ProjectData::demo();
        assert_eq!(data.periods().len(), 14);
        assert_eq!(data.periods().get(0).label, "S1");
        assert_eq!(data.periods().get(13).label, "S14");
        assert_eq!(data.progress_at(13), 100);
    }

    #[test]
    fn test_communication_overspends_from_s11() {
        let data = ProjectData::demo();
        let communication = |index: usize| {
            data.budget_at(index)
                .iter()
                .find(|l| l.category == BudgetCategory::Communication)
                .unwrap()
                .clone()
        };

        // 2070 * 10/14 = 1478.57, still within the 1490 approved budget
        assert!(!communication(9).over_budget());
        // 2070 * 11/14 = 1626.43, over budget from S11 onwards
        assert!(communication(10).over_budget());
        assert_eq!(communication(13).consumed, dec("2070"));
    }

    #[test]
    fn test_capped_category_never_overspends() {
        let data = ProjectData::demo();
        for index in 0..14 {
            let logistics = data
                .budget_at(index)
                .iter()
                .find(|l| l.category == BudgetCategory::Logistics)
                .unwrap();
            assert!(!logistics.over_budget());
        }
        // Fully consumed by the final period
        assert_eq!(data.budget_at(13)[0].consumed, dec("1900"));
    }

    #[test]
    fn test_risk_profile_at_s7() {
        let data = ProjectData::demo();
        let risks = data.risks_at(6);
        let majors = risks.iter().filter(|r| r.level == RiskLevel::Major).count();
        assert_eq!(majors, 3);

        // Major risks carry impact 5 and are always urgent
        let turnout = risks
            .iter()
            .find(|r| r.name == "Participant turnout shortfall")
            .unwrap();
        assert_eq!(turnout.impact, 5);
        assert_eq!(turnout.priority, RiskPriority::Urgent);
    }

    #[test]
    fn test_health_risk_recedes() {
        let data = ProjectData::demo();
        let health = data
            .risks_at(1)
            .iter()
            .find(|r| r.name == "Health and safety incidents")
            .unwrap()
            .clone();
        assert_eq!(health.level, RiskLevel::Major);
        assert_eq!(health.trend, Trend::Down);
    }

    #[test]
    fn test_objectives_at_s9() {
        let data = ProjectData::demo();
        let objectives = data.objectives_at(8);

        let by_name = |name: &str| objectives.iter().find(|o| o.name == name).unwrap();
        assert_eq!(by_name("Participants").achieved, 490);
        assert_eq!(by_name("Participants").percentage(), 70);
        assert_eq!(by_name("Volunteers").percentage(), 80);
        assert_eq!(by_name("Partners").percentage(), 60);
        assert_eq!(by_name("Satisfaction").percentage(), 0);
    }

    #[test]
    fn test_team_at_s9() {
        let data = ProjectData::demo();
        let team = data.team_at(8);
        let performing = team
            .iter()
            .filter(|m| m.state == TeamState::Performing)
            .count();
        let absent = team.iter().filter(|m| m.state == TeamState::Absent).count();
        assert_eq!(performing, 6);
        assert_eq!(absent, 1);
        assert_eq!(team.len(), 9);
    }

    #[test]
    fn test_satisfaction_rows_always_sum_to_100() {
        let data = ProjectData::demo();
        for index in 0..14 {
            assert_eq!(data.satisfaction_at(index).total(), 100);
        }
    }
}
