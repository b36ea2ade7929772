//! Trend indicator shared by risk and team-maturity tracking.

use serde::{Deserialize, Serialize};

/// Direction of change between two ordered observations.
///
/// Risk trends compare the current severity with the NEXT period's; team
/// trends compare the current maturity state with the PREVIOUS period's.
/// Both reduce to an ordinal comparison handled by [`Trend::between`].
///
/// # Example
///
/// ```
/// use race_metrics::models::Trend;
///
/// assert_eq!(Trend::between(1, 3), Trend::Up);
/// assert_eq!(Trend::between(3, 1), Trend::Down);
/// assert_eq!(Trend::between(2, 2), Trend::Flat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// The observation decreased.
    Down,
    /// The observation did not change.
    Flat,
    /// The observation increased.
    Up,
}

impl Trend {
    /// Compares two ordered values and returns the direction from the
    /// first to the second.
    pub fn between<T: Ord>(from: T, to: T) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Trend::Up,
            std::cmp::Ordering::Less => Trend::Down,
            std::cmp::Ordering::Equal => Trend::Flat,
        }
    }
}
