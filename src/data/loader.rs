//! Dataset loading functionality.
//!
//! This module provides [`ProjectData::load`] for reading a project
//! dataset from a directory of YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{MetricsError, MetricsResult};

use super::tables::{
    BudgetConfig, ObjectivesConfig, ProjectConfig, ProjectData, RiskConfig, SatisfactionConfig,
    TeamConfig,
};

impl ProjectData {
    /// Loads a project dataset from the specified directory.
    ///
    /// # Directory Structure
    ///
    /// The dataset directory should have the following structure:
    /// ```text
    /// datasets/demo/
    /// ├── project.yaml       # Metadata, period catalog, progress series
    /// ├── budget.yaml        # Per-category budget figures and spend series
    /// ├── risks.yaml         # Per-risk severity and impact series
    /// ├── objectives.yaml    # Per-objective targets and achieved series
    /// ├── team.yaml          # Per-member maturity state series
    /// └── satisfaction.yaml  # Survey bucket counts per period
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required file is missing (`DatasetNotFound`)
    /// - Any file contains invalid YAML (`DatasetParseError`)
    /// - Any table fails validation against the period catalog
    ///   (`InconsistentTable`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use race_metrics::data::ProjectData;
    ///
    /// let data = ProjectData::load("./datasets/demo")?;
    /// println!("Tracking {} periods", data.periods().len());
    /// # Ok::<(), race_metrics::error::MetricsError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> MetricsResult<Self> {
        let path = path.as_ref();

        let project = load_yaml::<ProjectConfig>(&path.join("project.yaml"))?;
        let budget = load_yaml::<BudgetConfig>(&path.join("budget.yaml"))?;
        let risks = load_yaml::<RiskConfig>(&path.join("risks.yaml"))?;
        let objectives = load_yaml::<ObjectivesConfig>(&path.join("objectives.yaml"))?;
        let team = load_yaml::<TeamConfig>(&path.join("team.yaml"))?;
        let satisfaction = load_yaml::<SatisfactionConfig>(&path.join("satisfaction.yaml"))?;

        let data = Self::new(project, budget, risks, objectives, team, satisfaction)?;

        info!(
            path = %path.display(),
            periods = data.periods().len(),
            project = %data.meta().name,
            "Loaded project dataset"
        );

        Ok(data)
    }
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> MetricsResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| MetricsError::DatasetNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| MetricsError::DatasetParseError {
        path: path_str,
        message: e.to_string(),
    })
}
