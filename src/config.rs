//! Chart configuration file support.
//!
//! Gantt row geometry is host-tunable through a small TOML file so the
//! rendering layer and this engine agree on pixel sizing without either
//! hardcoding the other's constants.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Chart configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub gantt: GanttSettings,
}

/// Gantt row geometry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttSettings {
    /// Vertical pixels allotted per stacked child bar.
    #[serde(default = "default_row_unit_px")]
    pub row_unit_px: f64,
    /// Smallest height any row may have, children or not.
    #[serde(default = "default_min_bar_height_px")]
    pub min_bar_height_px: f64,
}

fn default_row_unit_px() -> f64 {
    24.0
}

fn default_min_bar_height_px() -> f64 {
    32.0
}

impl Default for GanttSettings {
    fn default() -> Self {
        Self {
            row_unit_px: default_row_unit_px(),
            min_bar_height_px: default_min_bar_height_px(),
        }
    }
}

impl ChartConfig {
    /// Load chart configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ChartConfig)` if successful
    /// * `Err(AnalyticsError)` if the file cannot be read, parsed, or holds
    ///   unusable values
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnalyticsResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AnalyticsError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: ChartConfig = toml::from_str(&content).map_err(|e| {
            AnalyticsError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load chart configuration from the default location.
    ///
    /// Searches for `worklog.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// A missing file is not an error; defaults apply. A file that exists
    /// but does not parse is still reported.
    pub fn from_default_location() -> AnalyticsResult<Self> {
        let search_paths = vec![
            PathBuf::from("worklog.toml"),
            PathBuf::from("config/worklog.toml"),
            PathBuf::from("../worklog.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    fn validate(&self) -> AnalyticsResult<()> {
        if self.gantt.row_unit_px <= 0.0 {
            return Err(AnalyticsError::configuration(
                "gantt.row_unit_px must be positive",
            ));
        }
        if self.gantt.min_bar_height_px <= 0.0 {
            return Err(AnalyticsError::configuration(
                "gantt.min_bar_height_px must be positive",
            ));
        }
        Ok(())
    }
}
