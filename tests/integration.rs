//! Comprehensive integration tests for the reporting metrics engine.
//!
//! This test suite covers the full summary computation over the demo
//! dataset including:
//! - Headline metrics and period-over-period deltas
//! - Budget totals, consumption ratio and per-category breakdown
//! - Risk tallies and threshold alerts
//! - Objective tracking and team maturity
//! - Period validation and error cases
//! - Dataset loading from YAML files

use rust_decimal::Decimal;
use std::str::FromStr;

use race_metrics::aggregation::Aggregator;
use race_metrics::data::ProjectData;
use race_metrics::error::MetricsError;
use race_metrics::models::{
    AlertSeverity, BudgetCategory, RiskLevel, Summary, TeamState, Trend,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_aggregator() -> Aggregator {
    Aggregator::new(ProjectData::demo())
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn summary_for(period: &str) -> Summary {
    create_aggregator()
        .compute_summary(period)
        .expect("period is in the demo catalog")
}

// =============================================================================
// Headline metrics
// =============================================================================

#[test]
fn test_headline_metrics_at_s9() {
    let summary = summary_for("S9");

    assert_eq!(summary.progress.current, dec("70"));
    assert_eq!(summary.progress.previous, dec("60"));
    assert_eq!(summary.progress.delta, dec("10"));

    // Objective percentages 70, 80, 60, 0 average to 52
    assert_eq!(summary.objective_average.current, dec("52"));

    assert_eq!(summary.risk_counts.major, 0);
    assert_eq!(summary.major_risks.previous, dec("2"));

    let participants = summary.participants.expect("demo tracks participants");
    assert_eq!(participants.current, dec("490"));
    assert_eq!(participants.delta, dec("70"));
}

#[test]
fn test_first_period_deltas_are_zero() {
    let summary = summary_for("S1");

    assert_eq!(summary.progress.current, dec("7"));
    assert_eq!(summary.progress.delta, dec("0"));
    assert_eq!(summary.progress.delta_percent, dec("0"));
    assert_eq!(summary.objective_average.delta, dec("0"));
    assert_eq!(summary.major_risks.delta, dec("0"));
}

#[test]
fn test_delta_equals_difference_of_consecutive_summaries() {
    let aggregator = create_aggregator();
    let labels: Vec<String> = aggregator
        .data()
        .periods()
        .periods()
        .iter()
        .map(|p| p.label.clone())
        .collect();

    for window in labels.windows(2) {
        let previous = aggregator.compute_summary(&window[0]).unwrap();
        let current = aggregator.compute_summary(&window[1]).unwrap();
        assert_eq!(
            current.progress.delta,
            current.progress.current - previous.progress.current,
            "progress delta mismatch between {} and {}",
            window[0],
            window[1]
        );
    }
}

// =============================================================================
// Budget
// =============================================================================

#[test]
fn test_budget_totals_at_s9() {
    let summary = summary_for("S9");

    assert_eq!(summary.budget.initial, dec("7190"));
    assert_eq!(summary.budget.approved, dec("7190"));
    assert_eq!(summary.budget.consumed, dec("5361.43"));
    assert_eq!(summary.budget.remaining, dec("1828.57"));
    assert_eq!(summary.budget.consumption_ratio.round_dp(2), dec("74.57"));
}

#[test]
fn test_final_period_is_over_budget() {
    let summary = summary_for("S14");

    assert_eq!(summary.budget.consumed, dec("7770"));
    assert_eq!(summary.budget.remaining, dec("-580"));
    assert_eq!(summary.budget.consumption_ratio.round_dp(2), dec("108.07"));

    // Communication is the only overspent category and tops the ranking
    let overspent: Vec<BudgetCategory> = summary
        .budget_by_category
        .iter()
        .filter(|b| b.over_budget)
        .map(|b| b.category)
        .collect();
    assert_eq!(overspent, vec![BudgetCategory::Communication]);
    assert_eq!(
        summary.budget_by_category[0].category,
        BudgetCategory::Communication
    );
}

#[test]
fn test_category_shares_sum_to_100_every_period() {
    let aggregator = create_aggregator();

    for period in aggregator.data().periods().periods().to_vec() {
        let breakdown = aggregator.budget_by_category(&period.label).unwrap();
        let total: Decimal = breakdown.iter().map(|b| b.share_of_total).sum();
        assert_eq!(
            total.round_dp(6),
            dec("100"),
            "shares for {} do not sum to 100",
            period.label
        );
    }
}

#[test]
fn test_budget_evolution_ends_at_selected_period() {
    let aggregator = create_aggregator();
    let evolution = aggregator.budget_evolution("S5").unwrap();

    assert_eq!(evolution.len(), 5);
    assert_eq!(
        evolution.last().unwrap().consumed,
        aggregator.budget_totals("S5").unwrap().consumed
    );
}

// =============================================================================
// Risks and alerts
// =============================================================================

#[test]
fn test_risk_counts_cover_all_tracked_risks() {
    let aggregator = create_aggregator();

    for period in aggregator.data().periods().periods().to_vec() {
        let counts = aggregator.risk_counts(&period.label).unwrap();
        assert_eq!(counts.total(), 4, "risk tally wrong for {}", period.label);
    }
}

#[test]
fn test_risk_peak_at_s7() {
    let summary = summary_for("S7");

    assert_eq!(summary.risk_counts.major, 3);
    assert_eq!(summary.risk_counts.minor, 1);

    // Every major risk is urgent
    for risk in summary.risks.iter().filter(|r| r.level == RiskLevel::Major) {
        assert_eq!(
            risk.priority,
            race_metrics::models::RiskPriority::Urgent
        );
    }
}

#[test]
fn test_alerts_at_s9_in_declared_order() {
    let summary = summary_for("S9");
    let ids: Vec<&str> = summary.alerts.iter().map(|a| a.rule_id.as_str()).collect();

    // Volunteers (80%) and participants (70%) are on track; the prevention
    // gate, the weather window and Moumene's absence fire.
    assert_eq!(
        ids,
        vec!["prevention_measures", "weather_validation", "team_attendance"]
    );
    assert_eq!(summary.alerts[2].severity, AlertSeverity::Moderate);
}

#[test]
fn test_alerts_at_s5() {
    let summary = summary_for("S5");
    let ids: Vec<&str> = summary.alerts.iter().map(|a| a.rule_id.as_str()).collect();

    // Volunteers at 40% and participants at 30% are both short; the
    // weather window has not opened yet and Moumene is present.
    assert_eq!(
        ids,
        vec![
            "volunteer_confirmations",
            "prevention_measures",
            "participant_registrations",
        ]
    );
    assert_eq!(
        summary.alerts[0].message,
        "Only 16/40 volunteers confirmed"
    );
    assert_eq!(
        summary.alerts[2].message,
        "Only 210/700 participants registered"
    );
}

#[test]
fn test_no_alerts_at_the_finish_line() {
    let summary = summary_for("S14");
    assert!(summary.alerts.is_empty());
}

// =============================================================================
// Objectives and team
// =============================================================================

#[test]
fn test_objective_status_rows_at_s12() {
    let summary = summary_for("S12");
    let participants = summary
        .objectives
        .iter()
        .find(|o| o.name == "Participants")
        .unwrap();

    assert_eq!(participants.target, 700);
    assert_eq!(participants.achieved, 700);
    assert_eq!(participants.percentage, 100);
}

#[test]
fn test_team_counts_at_s9() {
    let summary = summary_for("S9");

    assert_eq!(summary.team.performing, 6);
    assert_eq!(summary.team.normalizing, 2);
    assert_eq!(summary.team.absent, 1);
    assert_eq!(summary.team.active_total(), 8);
    assert_eq!(summary.members.len(), 9);
}

#[test]
fn test_member_trend_reflects_progression() {
    let summary = summary_for("S9");
    let nordine = summary
        .members
        .iter()
        .find(|m| m.member == "Nordine")
        .unwrap();

    // Nordine moves from normalizing in S8 to performing in S9
    assert_eq!(nordine.state, TeamState::Performing);
    assert_eq!(nordine.trend, Trend::Up);
}

#[test]
fn test_satisfaction_buckets_sum_to_100() {
    for period in ["S1", "S7", "S14"] {
        let summary = summary_for(period);
        assert_eq!(summary.satisfaction.total(), 100);
    }
}

// =============================================================================
// Validation and serialization
// =============================================================================

#[test]
fn test_unknown_period_fails_with_invalid_period() {
    let aggregator = create_aggregator();
    let result = aggregator.compute_summary("S99");

    match result {
        Err(MetricsError::InvalidPeriod { period }) => {
            assert_eq!(period, "S99");
        }
        _ => panic!("Expected InvalidPeriod error"),
    }
}

#[test]
fn test_summary_round_trips_through_json() {
    let summary = summary_for("S9");

    let json = serde_json::to_string(&summary).unwrap();
    let back: Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(summary, back);
}

#[test]
fn test_loaded_dataset_matches_demo_tables() {
    let loaded = Aggregator::new(
        ProjectData::load("./datasets/demo").expect("demo dataset directory is checked in"),
    );
    let built_in = create_aggregator();

    for period in ["S1", "S9", "S14"] {
        let from_files = loaded.compute_summary(period).unwrap();
        let from_code = built_in.compute_summary(period).unwrap();

        assert_eq!(from_files.budget, from_code.budget);
        assert_eq!(from_files.budget_by_category, from_code.budget_by_category);
        assert_eq!(from_files.risk_counts, from_code.risk_counts);
        assert_eq!(from_files.risks, from_code.risks);
        assert_eq!(from_files.objectives, from_code.objectives);
        assert_eq!(from_files.team, from_code.team);
        assert_eq!(from_files.members, from_code.members);
        assert_eq!(from_files.satisfaction, from_code.satisfaction);
        assert_eq!(from_files.alerts, from_code.alerts);
    }
}
