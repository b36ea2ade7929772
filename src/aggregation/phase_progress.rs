//! Project phase completion.
//!
//! The four phases advance on a fixed schedule relative to the period
//! index: initiation completes by S4, planning by S7, execution by S12
//! and control runs through the final periods.

use rust_decimal::Decimal;

use crate::models::{PhaseProgress, ProjectPhase};

/// Completion percentages of the four project phases as of the period
/// at `index`, in chronological phase order.
///
/// # Example
///
/// ```
/// use race_metrics::aggregation::phase_progress;
/// use race_metrics::models::ProjectPhase;
/// use rust_decimal::Decimal;
///
/// let phases = phase_progress(6);
/// assert_eq!(phases[0].phase, ProjectPhase::Initiation);
/// assert_eq!(phases[0].percent, Decimal::from(100));
/// assert_eq!(phases[3].percent, Decimal::ZERO);
/// ```
pub fn phase_progress(index: usize) -> Vec<PhaseProgress> {
    let hundred = Decimal::ONE_HUNDRED;
    let third = Decimal::new(3333, 2);
    let fifth = Decimal::new(20, 0);

    let initiation = if index >= 3 {
        hundred
    } else {
        (Decimal::from(index as u32 + 1) * third).min(hundred)
    };

    let planning = if index < 3 {
        Decimal::ZERO
    } else if index >= 6 {
        hundred
    } else {
        (Decimal::from(index as u32 - 2) * third).min(hundred)
    };

    let execution = if index < 6 {
        Decimal::ZERO
    } else if index >= 11 {
        hundred
    } else {
        (Decimal::from(index as u32 - 5) * fifth).min(hundred)
    };

    let control = if index < 11 {
        Decimal::ZERO
    } else {
        (Decimal::from(index as u32 - 10) * third).min(hundred)
    };

    let percents = [initiation, planning, execution, control];
    ProjectPhase::ALL
        .iter()
        .zip(percents)
        .map(|(phase, percent)| PhaseProgress {
            phase: *phase,
            percent,
        })
        .collect()
}
