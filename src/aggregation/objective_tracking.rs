//! Objective completion tracking.

use crate::models::{ObjectiveRecord, ObjectiveStatus};

/// Arithmetic mean of all objective completion percentages for one
/// period, truncated toward zero. Returns 0 when no objectives are
/// tracked.
///
/// # Example
///
/// ```
/// use race_metrics::aggregation::objective_average;
/// use race_metrics::models::ObjectiveRecord;
///
/// let objectives = vec![
///     ObjectiveRecord { name: "Participants".to_string(), target: 100, achieved: 10 },
///     ObjectiveRecord { name: "Volunteers".to_string(), target: 100, achieved: 20 },
///     ObjectiveRecord { name: "Partners".to_string(), target: 100, achieved: 30 },
/// ];
/// assert_eq!(objective_average(&objectives), 20);
/// ```
pub fn objective_average(objectives: &[ObjectiveRecord]) -> u32 {
    if objectives.is_empty() {
        return 0;
    }
    let sum: u64 = objectives.iter().map(|o| u64::from(o.percentage())).sum();
    (sum / objectives.len() as u64) as u32
}

/// Status rows for every objective in one period, in authored order.
pub fn objective_status(objectives: &[ObjectiveRecord]) -> Vec<ObjectiveStatus> {
    objectives
        .iter()
        .map(|o| ObjectiveStatus {
            name: o.name.clone(),
            target: o.target,
            achieved: o.achieved,
            percentage: o.percentage(),
        })
        .collect()
}
