//! Per-category budget breakdown.

use rust_decimal::Decimal;

use crate::models::{BudgetLine, CategoryBreakdown};

/// Ranks categories by their share of the period's consumed spend.
///
/// Each row carries the category's consumed amount, its share of the
/// total consumed (0 for every category when nothing was consumed), and
/// whether the category exceeded its approved budget. Rows are ordered
/// by descending share; ties fall back to the fixed catalog order.
///
/// # Example
///
/// ```
/// use race_metrics::aggregation::budget_by_category;
/// use race_metrics::models::{BudgetCategory, BudgetLine};
/// use rust_decimal::Decimal;
///
/// let lines = vec![
///     BudgetLine {
///         category: BudgetCategory::Logistics,
///         initial: Decimal::from(1000),
///         approved: Decimal::from(1000),
///         estimated: Decimal::from(1000),
///         consumed: Decimal::from(300),
///     },
///     BudgetLine {
///         category: BudgetCategory::Communication,
///         initial: Decimal::from(1500),
///         approved: Decimal::from(1500),
///         estimated: Decimal::from(1500),
///         consumed: Decimal::from(700),
///     },
/// ];
///
/// let breakdown = budget_by_category(&lines);
/// assert_eq!(breakdown[0].category, BudgetCategory::Communication);
/// assert_eq!(breakdown[0].share_of_total, Decimal::from(70));
/// ```
pub fn budget_by_category(lines: &[BudgetLine]) -> Vec<CategoryBreakdown> {
    let total: Decimal = lines.iter().map(|l| l.consumed).sum();

    let mut breakdown: Vec<CategoryBreakdown> = lines
        .iter()
        .map(|line| {
            let share_of_total = if total.is_zero() {
                Decimal::ZERO
            } else {
                line.consumed / total * Decimal::ONE_HUNDRED
            };
            CategoryBreakdown {
                category: line.category,
                consumed: line.consumed,
                share_of_total,
                over_budget: line.over_budget(),
            }
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.share_of_total
            .cmp(&a.share_of_total)
            .then_with(|| a.category.catalog_index().cmp(&b.category.catalog_index()))
    });
    breakdown
}
