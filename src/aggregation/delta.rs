//! Period-over-period delta computation.
//!
//! Every headline metric on the dashboard pairs its current value with
//! the movement since the previous period. The functions here implement
//! that comparison once, with the two edge policies every caller relies
//! on: the first period is its own predecessor (delta 0), and a zero
//! previous value yields a zero percentage rather than an error.

use rust_decimal::Decimal;

use crate::models::{MetricDelta, PeriodCatalog};

/// Computes the movement between two metric observations.
///
/// `delta_percent` is `delta / previous * 100`, or 0 when `previous` is 0
/// (guarded division, not an error).
///
/// # Examples
///
/// ```
/// use race_metrics::aggregation::compute_delta;
/// use rust_decimal::Decimal;
///
/// let delta = compute_delta(Decimal::from(70), Decimal::from(60));
/// assert_eq!(delta.delta, Decimal::from(10));
///
/// // Zero previous value guards the division
/// let delta = compute_delta(Decimal::from(70), Decimal::ZERO);
/// assert_eq!(delta.delta_percent, Decimal::ZERO);
/// ```
pub fn compute_delta(current: Decimal, previous: Decimal) -> MetricDelta {
    let delta = current - previous;
    let delta_percent = if previous.is_zero() {
        Decimal::ZERO
    } else {
        delta / previous * Decimal::ONE_HUNDRED
    };
    MetricDelta {
        current,
        previous,
        delta,
        delta_percent,
    }
}

/// Looks up a metric for a period and its predecessor and computes the
/// movement between them.
///
/// `value_at` maps a period index to the metric's value; it is invoked
/// for the selected index and for its clamped predecessor, so the first
/// period always reports a delta of zero.
pub fn current_vs_previous<F>(catalog: &PeriodCatalog, index: usize, value_at: F) -> MetricDelta
where
    F: Fn(usize) -> Decimal,
{
    let current = value_at(index);
    let previous = value_at(catalog.predecessor(index));
    compute_delta(current, previous)
}
