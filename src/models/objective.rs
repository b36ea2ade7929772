//! SMART objective tracking models.

use serde::{Deserialize, Serialize};

/// One objective's target and achieved values for one reporting period.
///
/// # Example
///
/// ```
/// use race_metrics::models::ObjectiveRecord;
///
/// let record = ObjectiveRecord {
///     name: "Participants".to_string(),
///     target: 700,
///     achieved: 490,
/// };
/// assert_eq!(record.percentage(), 70);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveRecord {
    /// The objective's name (e.g., "Participants").
    pub name: String,
    /// The target value.
    pub target: u32,
    /// The value achieved so far. May exceed the target.
    pub achieved: u32,
}

impl ObjectiveRecord {
    /// Completion percentage, floored: `achieved / target * 100` truncated
    /// toward zero, or 0 when the target is 0.
    pub fn percentage(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        (u64::from(self.achieved) * 100 / u64::from(self.target)) as u32
    }
}
