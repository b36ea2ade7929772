//! Error types for the reporting metrics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a project dataset
//! or computing reporting summaries.

use thiserror::Error;

/// The main error type for the reporting metrics engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use race_metrics::error::MetricsError;
///
/// let error = MetricsError::InvalidPeriod {
///     period: "S99".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown reporting period: S99");
/// ```
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The requested period label is absent from the period catalog.
    #[error("Unknown reporting period: {period}")]
    InvalidPeriod {
        /// The period label that was not found.
        period: String,
    },

    /// A dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A dataset file could not be parsed.
    #[error("Failed to parse dataset file '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A fact table failed validation against the period catalog.
    #[error("Inconsistent {table} table: {message}")]
    InconsistentTable {
        /// The name of the offending table.
        table: String,
        /// A description of what made the table inconsistent.
        message: String,
    },
}

/// A type alias for Results that return MetricsError.
pub type MetricsResult<T> = Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_displays_label() {
        let error = MetricsError::InvalidPeriod {
            period: "S99".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown reporting period: S99");
    }

    #[test]
    fn test_dataset_not_found_displays_path() {
        let error = MetricsError::DatasetNotFound {
            path: "/missing/budget.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Dataset file not found: /missing/budget.yaml"
        );
    }

    #[test]
    fn test_dataset_parse_error_displays_path_and_message() {
        let error = MetricsError::DatasetParseError {
            path: "/data/risks.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse dataset file '/data/risks.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_inconsistent_table_displays_table_and_message() {
        let error = MetricsError::InconsistentTable {
            table: "satisfaction".to_string(),
            message: "bucket counts for S3 sum to 98, expected 100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Inconsistent satisfaction table: bucket counts for S3 sum to 98, expected 100"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<MetricsError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_period() -> MetricsResult<()> {
            Err(MetricsError::InvalidPeriod {
                period: "S0".to_string(),
            })
        }

        fn propagates_error() -> MetricsResult<()> {
            returns_invalid_period()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
