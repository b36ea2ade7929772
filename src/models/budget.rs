//! Budget models.
//!
//! This module defines the fixed spending categories and the per-period
//! budget lines tracked for each of them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed budget spending category.
///
/// The set of categories is closed and their declaration order is the
/// catalog order used to break ties when ranking categories by spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    /// Venue, transport and equipment logistics.
    Logistics,
    /// Safety marshals, first aid and rescue coverage.
    SafetyRescue,
    /// Posters, videos and outreach campaigns.
    Communication,
    /// Registration handling and the sign-up platform.
    Registrations,
    /// On-site entertainment and activities.
    Entertainment,
    /// Risk prevention measures.
    RiskPrevention,
    /// Contingency reserve.
    Contingency,
}

impl BudgetCategory {
    /// All categories in catalog order.
    pub const ALL: [BudgetCategory; 7] = [
        BudgetCategory::Logistics,
        BudgetCategory::SafetyRescue,
        BudgetCategory::Communication,
        BudgetCategory::Registrations,
        BudgetCategory::Entertainment,
        BudgetCategory::RiskPrevention,
        BudgetCategory::Contingency,
    ];

    /// Returns the position of the category in the fixed catalog order.
    pub fn catalog_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .expect("category is in the catalog")
    }

    /// Returns the human-readable category name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BudgetCategory::Logistics => "Logistics",
            BudgetCategory::SafetyRescue => "Safety & rescue",
            BudgetCategory::Communication => "Communication",
            BudgetCategory::Registrations => "Registrations & platform",
            BudgetCategory::Entertainment => "Entertainment",
            BudgetCategory::RiskPrevention => "Risk prevention",
            BudgetCategory::Contingency => "Contingency",
        }
    }
}

/// One category's budget figures for one reporting period.
///
/// All four amounts are non-negative currency values. Consumed spend is
/// not constrained to stay below the approved budget; overspend is a
/// valid, detectable state.
///
/// # Example
///
/// ```
/// use race_metrics::models::{BudgetCategory, BudgetLine};
/// use rust_decimal::Decimal;
///
/// let line = BudgetLine {
///     category: BudgetCategory::Communication,
///     initial: Decimal::from(1490),
///     approved: Decimal::from(1490),
///     estimated: Decimal::from(1490),
///     consumed: Decimal::from(2070),
/// };
/// assert!(line.over_budget());
/// assert_eq!(line.remaining(), Decimal::from(-580));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// The spending category this line belongs to.
    pub category: BudgetCategory,
    /// The initially planned budget.
    pub initial: Decimal,
    /// The last approved budget.
    pub approved: Decimal,
    /// The current cost estimate.
    pub estimated: Decimal,
    /// The amount consumed so far.
    pub consumed: Decimal,
}

impl BudgetLine {
    /// Returns true when consumed spend exceeds the approved budget.
    pub fn over_budget(&self) -> bool {
        self.consumed > self.approved
    }

    /// Returns the approved budget left to spend. Negative when the
    /// category is over budget.
    pub fn remaining(&self) -> Decimal {
        self.approved - self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(category: BudgetCategory, approved: &str, consumed: &str) -> BudgetLine {
        BudgetLine {
            category,
            initial: dec(approved),
            approved: dec(approved),
            estimated: dec(approved),
            consumed: dec(consumed),
        }
    }

    #[test]
    fn test_catalog_order_is_stable() {
        assert_eq!(BudgetCategory::Logistics.catalog_index(), 0);
        assert_eq!(BudgetCategory::Contingency.catalog_index(), 6);
        assert_eq!(BudgetCategory::ALL.len(), 7);
    }

    #[test]
    fn test_over_budget_detection() {
        assert!(line(BudgetCategory::Communication, "1490", "2070").over_budget());
        assert!(!line(BudgetCategory::Logistics, "1900", "1900").over_budget());
        assert!(!line(BudgetCategory::Contingency, "200", "50").over_budget());
    }

    #[test]
    fn test_remaining_can_go_negative() {
        assert_eq!(
            line(BudgetCategory::Communication, "1490", "2070").remaining(),
            dec("-580")
        );
        assert_eq!(
            line(BudgetCategory::SafetyRescue, "900", "450").remaining(),
            dec("450")
        );
    }

    #[test]
    fn test_category_serialization_uses_snake_case() {
        let json = serde_json::to_string(&BudgetCategory::SafetyRescue).unwrap();
        assert_eq!(json, "\"safety_rescue\"");

        let back: BudgetCategory = serde_json::from_str("\"risk_prevention\"").unwrap();
        assert_eq!(back, BudgetCategory::RiskPrevention);
    }

    #[test]
    fn test_budget_line_round_trip() {
        let original = line(BudgetCategory::Entertainment, "1100", "825.50");
        let json = serde_json::to_string(&original).unwrap();
        let back: BudgetLine = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
