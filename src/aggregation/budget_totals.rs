//! Budget totals computation.
//!
//! Sums the four budget figures across every category for a period and
//! derives the consumption ratio against the approved budget, which is
//! the ratio denominator used throughout the engine.

use rust_decimal::Decimal;

use crate::data::ProjectData;
use crate::models::{BudgetLine, BudgetTotals};

/// Sums the budget figures across all categories for one period.
///
/// `consumption_ratio` is `consumed / approved * 100`, or 0 when the
/// approved total is 0. `remaining` goes negative when the project as a
/// whole is over budget.
///
/// # Example
///
/// ```
/// use race_metrics::aggregation::budget_totals;
/// use race_metrics::models::{BudgetCategory, BudgetLine};
/// use rust_decimal::Decimal;
///
/// let lines = vec![
///     BudgetLine {
///         category: BudgetCategory::Logistics,
///         initial: Decimal::from(1000),
///         approved: Decimal::from(1000),
///         estimated: Decimal::from(1000),
///         consumed: Decimal::from(1100),
///     },
///     BudgetLine {
///         category: BudgetCategory::Communication,
///         initial: Decimal::from(500),
///         approved: Decimal::from(500),
///         estimated: Decimal::from(500),
///         consumed: Decimal::from(400),
///     },
/// ];
///
/// let totals = budget_totals(&lines);
/// assert_eq!(totals.consumed, Decimal::from(1500));
/// assert_eq!(totals.consumption_ratio, Decimal::from(100));
/// ```
pub fn budget_totals(lines: &[BudgetLine]) -> BudgetTotals {
    let initial: Decimal = lines.iter().map(|l| l.initial).sum();
    let approved: Decimal = lines.iter().map(|l| l.approved).sum();
    let estimated: Decimal = lines.iter().map(|l| l.estimated).sum();
    let consumed: Decimal = lines.iter().map(|l| l.consumed).sum();

    let consumption_ratio = if approved.is_zero() {
        Decimal::ZERO
    } else {
        consumed / approved * Decimal::ONE_HUNDRED
    };

    BudgetTotals {
        initial,
        approved,
        estimated,
        consumed,
        remaining: approved - consumed,
        consumption_ratio,
    }
}

/// Budget totals for every period from the first through `through_index`,
/// in period order. Feeds the budget evolution line chart.
pub fn budget_evolution(data: &ProjectData, through_index: usize) -> Vec<BudgetTotals> {
    (0..=through_index)
        .map(|i| budget_totals(data.budget_at(i)))
        .collect()
}
