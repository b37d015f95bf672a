use pyo3::prelude::*;
use std::path::PathBuf;

use crate::config::PlanningConfig;
use crate::io::loaders::GridLoader;
use crate::services::planning::build_planning;

/// Build the full planning from a CSV file.
///
/// Args:
///     file_path: Path to the exported planning CSV.
///
/// Returns:
///     str: JSON-encoded planning (records, paginated timeline, axis).
#[pyfunction]
pub fn load_planning(file_path: &str) -> PyResult<String> {
    let path = PathBuf::from(file_path);

    let grid = GridLoader::load_from_file(&path).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to load grid: {}", e))
    })?;

    planning_json(&grid)
}

/// Build the full planning from CSV text already fetched by the caller
/// (uploaded buffer or published Google Sheets export).
#[pyfunction]
pub fn planning_from_csv_str(csv_text: &str) -> PyResult<String> {
    let grid = GridLoader::load_from_csv_str(csv_text).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to parse CSV: {}", e))
    })?;

    planning_json(&grid)
}

fn planning_json(grid: &crate::core::grid::Grid) -> PyResult<String> {
    let planning = build_planning(grid, &PlanningConfig::default());

    serde_json::to_string(&planning).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize planning: {}", e))
    })
}
