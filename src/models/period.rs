//! Reporting period catalog.
//!
//! This module defines the [`Period`] and [`PeriodCatalog`] types. The
//! catalog is the ordered list of reporting intervals the project is
//! tracked over; every fact table is aligned with it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

/// A single reporting interval (one week of the project timeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The period label shown to users (e.g., "S9").
    pub label: String,
    /// The reference date the period starts on (a Monday).
    pub reference_date: NaiveDate,
}

/// The ordered catalog of reporting periods.
///
/// Period order matches chronological sequence, and "previous period" is
/// the immediate predecessor in this order, clamped to the first period
/// when no predecessor exists.
///
/// # Example
///
/// ```
/// use race_metrics::models::{Period, PeriodCatalog};
/// use chrono::NaiveDate;
///
/// let catalog = PeriodCatalog::new(vec![
///     Period {
///         label: "S1".to_string(),
///         reference_date: NaiveDate::from_ymd_opt(2025, 2, 24).unwrap(),
///     },
///     Period {
///         label: "S2".to_string(),
///         reference_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     },
/// ]).unwrap();
///
/// assert_eq!(catalog.index_of("S2").unwrap(), 1);
/// assert_eq!(catalog.predecessor(1), 0);
/// assert_eq!(catalog.predecessor(0), 0); // first period is its own predecessor
/// assert!(catalog.index_of("S99").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCatalog {
    periods: Vec<Period>,
}

impl PeriodCatalog {
    /// Creates a catalog from an ordered list of periods.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentTable` when the list is empty or contains a
    /// duplicate label.
    pub fn new(periods: Vec<Period>) -> MetricsResult<Self> {
        if periods.is_empty() {
            return Err(MetricsError::InconsistentTable {
                table: "periods".to_string(),
                message: "the period catalog is empty".to_string(),
            });
        }
        for (i, period) in periods.iter().enumerate() {
            if periods[..i].iter().any(|p| p.label == period.label) {
                return Err(MetricsError::InconsistentTable {
                    table: "periods".to_string(),
                    message: format!("duplicate period label '{}'", period.label),
                });
            }
        }
        Ok(Self { periods })
    }

    /// Returns the number of periods in the catalog.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if the catalog holds no periods. Never true for a
    /// catalog built through [`PeriodCatalog::new`].
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns all periods in catalog order.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Returns the period at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range. Indices obtained from
    /// [`PeriodCatalog::index_of`] are always in range.
    pub fn get(&self, index: usize) -> &Period {
        &self.periods[index]
    }

    /// Resolves a period label to its index in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the label is not in the catalog.
    pub fn index_of(&self, label: &str) -> MetricsResult<usize> {
        self.periods
            .iter()
            .position(|p| p.label == label)
            .ok_or_else(|| MetricsError::InvalidPeriod {
                period: label.to_string(),
            })
    }

    /// Returns the index of the predecessor period, clamped to the first
    /// period when no predecessor exists.
    pub fn predecessor(&self, index: usize) -> usize {
        index.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_catalog(labels: &[&str]) -> PeriodCatalog {
        let base = make_date("2025-02-24");
        let periods = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Period {
                label: label.to_string(),
                reference_date: base + chrono::Duration::weeks(i as i64),
            })
            .collect();
        PeriodCatalog::new(periods).unwrap()
    }

    #[test]
    fn test_index_of_known_label() {
        let catalog = make_catalog(&["S1", "S2", "S3"]);
        assert_eq!(catalog.index_of("S1").unwrap(), 0);
        assert_eq!(catalog.index_of("S3").unwrap(), 2);
    }

    #[test]
    fn test_index_of_unknown_label_returns_invalid_period() {
        let catalog = make_catalog(&["S1", "S2", "S3"]);
        let result = catalog.index_of("S99");

        match result {
            Err(MetricsError::InvalidPeriod { period }) => {
                assert_eq!(period, "S99");
            }
            _ => panic!("Expected InvalidPeriod error"),
        }
    }

    #[test]
    fn test_predecessor_clamps_at_first_period() {
        let catalog = make_catalog(&["S1", "S2", "S3"]);
        assert_eq!(catalog.predecessor(0), 0);
        assert_eq!(catalog.predecessor(1), 0);
        assert_eq!(catalog.predecessor(2), 1);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = PeriodCatalog::new(vec![]);
        assert!(matches!(
            result,
            Err(MetricsError::InconsistentTable { .. })
        ));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let base = make_date("2025-02-24");
        let result = PeriodCatalog::new(vec![
            Period {
                label: "S1".to_string(),
                reference_date: base,
            },
            Period {
                label: "S1".to_string(),
                reference_date: base + chrono::Duration::weeks(1),
            },
        ]);

        match result {
            Err(MetricsError::InconsistentTable { table, message }) => {
                assert_eq!(table, "periods");
                assert!(message.contains("S1"));
            }
            _ => panic!("Expected InconsistentTable error"),
        }
    }

    #[test]
    fn test_period_serialization() {
        let period = Period {
            label: "S9".to_string(),
            reference_date: make_date("2025-04-21"),
        };

        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"label\":\"S9\""));
        assert!(json.contains("\"reference_date\":\"2025-04-21\""));

        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
