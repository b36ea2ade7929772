//! Threshold alert rules.
//!
//! Alerting is table-driven: [`ALERT_RULES`] declares every rule with its
//! identifier, severity and condition, and [`evaluate_alerts`] walks the
//! table uniformly. Output order is the declared order of the table, not
//! the order conditions happen to fire in, so alert banners are stable
//! across periods. Adding a rule means adding a table entry; call sites
//! never change.

use serde_json::json;

use crate::models::{Alert, AlertSeverity, ObjectiveRecord, TeamMemberState};

/// Name of the participants objective the registration rule watches.
pub const PARTICIPANTS_OBJECTIVE: &str = "Participants";

/// Name of the volunteers objective the confirmation rule watches.
pub const VOLUNTEERS_OBJECTIVE: &str = "Volunteers";

/// Volunteer confirmations below this percentage trigger an alert.
const VOLUNTEER_THRESHOLD: u32 = 75;

/// Participant registrations below this percentage trigger an alert.
const PARTICIPANT_THRESHOLD: u32 = 70;

/// First period index (zero-based) with prevention measures fully in place.
const PREVENTION_COMPLETE_INDEX: usize = 9;

/// Period index range (zero-based) of the weather validation window.
const WEATHER_WINDOW: std::ops::RangeInclusive<usize> = 8..=10;

/// The data an alert rule's condition is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct AlertContext<'a> {
    /// Zero-based index of the selected period.
    pub period_index: usize,
    /// Objective records for the selected period.
    pub objectives: &'a [ObjectiveRecord],
    /// Team member states for the selected period.
    pub team: &'a [TeamMemberState],
}

impl AlertContext<'_> {
    fn objective(&self, name: &str) -> Option<&ObjectiveRecord> {
        self.objectives.iter().find(|o| o.name == name)
    }
}

/// A declared threshold rule.
///
/// The condition returns the rendered message and detail payload when it
/// holds for the given period, and `None` otherwise.
pub struct AlertRule {
    /// Stable identifier of the rule.
    pub id: &'static str,
    /// Human-readable rule name.
    pub name: &'static str,
    /// Severity attached to every alert the rule produces.
    pub severity: AlertSeverity,
    check: fn(&AlertContext<'_>) -> Option<(String, serde_json::Value)>,
}

fn check_volunteers(ctx: &AlertContext<'_>) -> Option<(String, serde_json::Value)> {
    let objective = ctx.objective(VOLUNTEERS_OBJECTIVE)?;
    if objective.percentage() >= VOLUNTEER_THRESHOLD {
        return None;
    }
    Some((
        format!(
            "Only {}/{} volunteers confirmed",
            objective.achieved, objective.target
        ),
        json!({
            "achieved": objective.achieved,
            "target": objective.target,
            "percentage": objective.percentage(),
            "threshold": VOLUNTEER_THRESHOLD,
        }),
    ))
}

fn check_prevention(ctx: &AlertContext<'_>) -> Option<(String, serde_json::Value)> {
    if ctx.period_index >= PREVENTION_COMPLETE_INDEX {
        return None;
    }
    Some((
        "Health prevention measures are not yet fully in place".to_string(),
        json!({
            "period_index": ctx.period_index,
            "complete_from_index": PREVENTION_COMPLETE_INDEX,
        }),
    ))
}

fn check_participants(ctx: &AlertContext<'_>) -> Option<(String, serde_json::Value)> {
    let objective = ctx.objective(PARTICIPANTS_OBJECTIVE)?;
    if objective.percentage() >= PARTICIPANT_THRESHOLD {
        return None;
    }
    Some((
        format!(
            "Only {}/{} participants registered",
            objective.achieved, objective.target
        ),
        json!({
            "achieved": objective.achieved,
            "target": objective.target,
            "percentage": objective.percentage(),
            "threshold": PARTICIPANT_THRESHOLD,
        }),
    ))
}

fn check_weather(ctx: &AlertContext<'_>) -> Option<(String, serde_json::Value)> {
    if !WEATHER_WINDOW.contains(&ctx.period_index) {
        return None;
    }
    Some((
        "Weather forecast for the event window has not been validated".to_string(),
        json!({
            "period_index": ctx.period_index,
            "window_start": *WEATHER_WINDOW.start(),
            "window_end": *WEATHER_WINDOW.end(),
        }),
    ))
}

fn check_attendance(ctx: &AlertContext<'_>) -> Option<(String, serde_json::Value)> {
    let absent = ctx.team.iter().filter(|m| !m.state.is_active()).count();
    if absent == 0 {
        return None;
    }
    let names: Vec<&str> = ctx
        .team
        .iter()
        .filter(|m| !m.state.is_active())
        .map(|m| m.member.as_str())
        .collect();
    Some((
        format!("{} team member(s) absent this period", absent),
        json!({ "absent": absent, "members": names }),
    ))
}

/// Every threshold rule, in the stable order alerts are reported in.
pub const ALERT_RULES: &[AlertRule] = &[
    AlertRule {
        id: "volunteer_confirmations",
        name: "Volunteer confirmations",
        severity: AlertSeverity::Critical,
        check: check_volunteers,
    },
    AlertRule {
        id: "prevention_measures",
        name: "Prevention measures",
        severity: AlertSeverity::Critical,
        check: check_prevention,
    },
    AlertRule {
        id: "participant_registrations",
        name: "Participant registrations",
        severity: AlertSeverity::Critical,
        check: check_participants,
    },
    AlertRule {
        id: "weather_validation",
        name: "Weather validation",
        severity: AlertSeverity::Critical,
        check: check_weather,
    },
    AlertRule {
        id: "team_attendance",
        name: "Team attendance",
        severity: AlertSeverity::Moderate,
        check: check_attendance,
    },
];

/// Evaluates every declared rule against the period's data.
///
/// Returns the alerts for the rules whose conditions hold, in declared
/// rule order.
pub fn evaluate_alerts(ctx: &AlertContext<'_>) -> Vec<Alert> {
    ALERT_RULES
        .iter()
        .filter_map(|rule| {
            (rule.check)(ctx).map(|(message, details)| Alert {
                rule_id: rule.id.to_string(),
                name: rule.name.to_string(),
                severity: rule.severity,
                message,
                details,
            })
        })
        .collect()
}
