//! Team maturity tally.

use crate::data::ProjectData;
use crate::models::{TeamMemberState, TeamState, TeamStateCounts};

/// Tallies team members by maturity state for one period.
///
/// Absent members are reported in their own bucket and excluded from
/// [`TeamStateCounts::active_total`].
///
/// # Example
///
/// ```
/// use race_metrics::aggregation::team_state_counts;
/// use race_metrics::models::{TeamMemberState, TeamState, Trend};
///
/// let member = |name: &str, state| TeamMemberState {
///     member: name.to_string(),
///     state,
///     trend: Trend::Flat,
/// };
/// let team = vec![
///     member("Adèle", TeamState::Performing),
///     member("Hoang", TeamState::Performing),
///     member("Antoine", TeamState::Forming),
///     member("Moumene", TeamState::Absent),
/// ];
///
/// let counts = team_state_counts(&team);
/// assert_eq!(counts.performing, 2);
/// assert_eq!(counts.forming, 1);
/// assert_eq!(counts.absent, 1);
/// assert_eq!(counts.active_total(), 3);
/// ```
pub fn team_state_counts(team: &[TeamMemberState]) -> TeamStateCounts {
    let mut counts = TeamStateCounts::default();
    for member in team {
        match member.state {
            TeamState::Absent => counts.absent += 1,
            TeamState::Forming => counts.forming += 1,
            TeamState::Confronting => counts.confronting += 1,
            TeamState::Normalizing => counts.normalizing += 1,
            TeamState::Performing => counts.performing += 1,
        }
    }
    counts
}

/// Team tallies for every period from the first through `through_index`,
/// in period order. Feeds the team evolution area chart.
pub fn team_evolution(data: &ProjectData, through_index: usize) -> Vec<TeamStateCounts> {
    (0..=through_index)
        .map(|i| team_state_counts(data.team_at(i)))
        .collect()
}
