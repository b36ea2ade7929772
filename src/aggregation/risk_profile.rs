//! Risk severity tally.

use crate::models::{RiskCounts, RiskLevel, RiskRecord};

/// Tallies risks by severity level for one period.
///
/// Every level is present in the result, defaulting to zero, so the
/// presentation layer never has to special-case missing levels.
///
/// # Example
///
/// ```
/// use race_metrics::aggregation::risk_counts;
/// use race_metrics::models::{RiskLevel, RiskRecord, Trend};
///
/// let risks = vec![
///     RiskRecord::new("Turnout".to_string(), RiskLevel::Major, Trend::Flat, 5),
///     RiskRecord::new("Weather".to_string(), RiskLevel::Minor, Trend::Flat, 9),
/// ];
///
/// let counts = risk_counts(&risks);
/// assert_eq!(counts.major, 1);
/// assert_eq!(counts.moderate, 0);
/// assert_eq!(counts.total(), 2);
/// ```
pub fn risk_counts(risks: &[RiskRecord]) -> RiskCounts {
    let mut counts = RiskCounts::default();
    for risk in risks {
        match risk.level {
            RiskLevel::Minor => counts.minor += 1,
            RiskLevel::Moderate => counts.moderate += 1,
            RiskLevel::Major => counts.major += 1,
        }
    }
    counts
}
