//! Satisfaction survey models.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

/// Survey bucket counts for one reporting period.
///
/// The five counts are percentages of respondents and must sum to 100.
///
/// # Example
///
/// ```
/// use race_metrics::models::SatisfactionRecord;
///
/// let record = SatisfactionRecord {
///     very_satisfied: 94,
///     satisfied: 3,
///     neutral: 1,
///     unsatisfied: 1,
///     very_unsatisfied: 1,
/// };
/// assert_eq!(record.total(), 100);
/// assert_eq!(record.positive_share(), 97);
/// assert!(record.validate("S1").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionRecord {
    /// Respondents who were very satisfied.
    pub very_satisfied: u32,
    /// Respondents who were satisfied.
    pub satisfied: u32,
    /// Respondents who were neutral.
    pub neutral: u32,
    /// Respondents who were unsatisfied.
    pub unsatisfied: u32,
    /// Respondents who were very unsatisfied.
    pub very_unsatisfied: u32,
}

impl SatisfactionRecord {
    /// Sum of all five buckets.
    pub fn total(&self) -> u32 {
        self.very_satisfied + self.satisfied + self.neutral + self.unsatisfied
            + self.very_unsatisfied
    }

    /// Combined share of the two positive buckets.
    pub fn positive_share(&self) -> u32 {
        self.very_satisfied + self.satisfied
    }

    /// Checks the sum-to-100 invariant.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentTable` naming the period when the counts do
    /// not sum to 100.
    pub fn validate(&self, period: &str) -> MetricsResult<()> {
        let total = self.total();
        if total != 100 {
            return Err(MetricsError::InconsistentTable {
                table: "satisfaction".to_string(),
                message: format!("bucket counts for {} sum to {}, expected 100", period, total),
            });
        }
        Ok(())
    }
}
