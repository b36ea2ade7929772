//! Risk tracking models.
//!
//! This module defines the severity ladder, the derived priority ranking
//! and the per-period risk records.

use serde::{Deserialize, Serialize};

use super::Trend;

/// Severity level of a tracked risk.
///
/// The ordering `Minor < Moderate < Major` drives trend derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low-severity risk, watched but not acted on.
    Minor,
    /// Medium-severity risk requiring mitigation.
    Moderate,
    /// High-severity risk requiring immediate attention.
    Major,
}

impl RiskLevel {
    /// All levels in ascending severity order.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Minor, RiskLevel::Moderate, RiskLevel::Major];
}

/// Priority label derived from severity and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPriority {
    /// Minor risks.
    Low,
    /// Moderate risks with limited impact.
    Normal,
    /// Moderate risks with impact above 6.
    High,
    /// Major risks, regardless of impact.
    Urgent,
}

/// One tracked risk's assessment for one reporting period.
///
/// The trend compares this period's severity with the next period's
/// (Flat at the last period); the priority is derived from severity and
/// impact through [`RiskRecord::new`].
///
/// # Example
///
/// ```
/// use race_metrics::models::{RiskLevel, RiskPriority, RiskRecord, Trend};
///
/// let record = RiskRecord::new(
///     "Volunteer withdrawals".to_string(),
///     RiskLevel::Moderate,
///     Trend::Up,
///     7,
/// );
/// assert_eq!(record.priority, RiskPriority::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecord {
    /// The risk's name.
    pub name: String,
    /// Severity level for the period.
    pub level: RiskLevel,
    /// Direction the severity is heading (compared with the next period).
    pub trend: Trend,
    /// Impact score, bounded to 1..=10.
    pub impact: u8,
    /// Priority label derived from severity and impact.
    pub priority: RiskPriority,
}

impl RiskRecord {
    /// Creates a record, deriving the priority label.
    ///
    /// Major risks are Urgent; Moderate risks are High when impact
    /// exceeds 6 and Normal otherwise; Minor risks are Low.
    pub fn new(name: String, level: RiskLevel, trend: Trend, impact: u8) -> Self {
        let priority = match level {
            RiskLevel::Major => RiskPriority::Urgent,
            RiskLevel::Moderate if impact > 6 => RiskPriority::High,
            RiskLevel::Moderate => RiskPriority::Normal,
            RiskLevel::Minor => RiskPriority::Low,
        };
        Self {
            name,
            level,
            trend,
            impact,
            priority,
        }
    }
}
