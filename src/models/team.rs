//! Team maturity models.
//!
//! Members progress through the classic team-maturity ladder; the ordinal
//! ordering of the states drives trend derivation.

use serde::{Deserialize, Serialize};

use super::Trend;

/// A team member's maturity state in one reporting period.
///
/// The ordering is the maturity progression; `Absent` sits below every
/// active state and is excluded from active-member totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamState {
    /// Not participating this period.
    Absent,
    /// Getting oriented, learning the project.
    Forming,
    /// Working through friction and role conflicts.
    Confronting,
    /// Settling into stable collaboration.
    Normalizing,
    /// Fully effective.
    Performing,
}

impl TeamState {
    /// All states in ladder order.
    pub const ALL: [TeamState; 5] = [
        TeamState::Absent,
        TeamState::Forming,
        TeamState::Confronting,
        TeamState::Normalizing,
        TeamState::Performing,
    ];

    /// Returns true for every state except `Absent`.
    pub fn is_active(&self) -> bool {
        *self != TeamState::Absent
    }
}

/// One member's state for one reporting period.
///
/// The trend compares this period's state with the previous period's
/// (Flat at the first period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberState {
    /// The member's name.
    pub member: String,
    /// Maturity state for the period.
    pub state: TeamState,
    /// Direction of change since the previous period.
    pub trend: Trend,
}
