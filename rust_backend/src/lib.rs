//! Leave-planning backend: parses free-text leave spreadsheets into
//! typed records and lays them out as a paginated, color-coded timeline
//! for the rendering frontend.

pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod services;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module exposing the planning pipeline to the Streamlit app.
#[cfg(feature = "python")]
#[pymodule]
fn conges_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::loaders::load_planning, m)?)?;
    m.add_function(wrap_pyfunction!(python::loaders::planning_from_csv_str, m)?)?;
    Ok(())
}
