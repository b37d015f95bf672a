//! Planning configuration file support.
//!
//! Layout tuning knobs can be read from a TOML file so the frontend and
//! the backend agree on pagination without recompiling. Every field has
//! a default matching the documented baseline behavior.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level planning configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    #[serde(default)]
    pub layout: LayoutSettings,
}

/// Timeline layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Maximum number of rows (person rows plus header rows) per page.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    /// Two label midpoints closer than this (in days) get staggered
    /// vertical offsets so the texts do not overlap.
    #[serde(default = "default_proximity_threshold_days")]
    pub proximity_threshold_days: f64,
    /// Magnitude of the alternating label offset, in row-height units.
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,
    /// Months of padding added on each side of the shared date axis.
    #[serde(default = "default_axis_padding_months")]
    pub axis_padding_months: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            proximity_threshold_days: default_proximity_threshold_days(),
            label_offset: default_label_offset(),
            axis_padding_months: default_axis_padding_months(),
        }
    }
}

fn default_rows_per_page() -> usize {
    15
}

fn default_proximity_threshold_days() -> f64 {
    20.0
}

fn default_label_offset() -> f64 {
    0.15
}

fn default_axis_padding_months() -> u32 {
    1
}

impl PlanningConfig {
    /// Reads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse planning config TOML")
    }
}
