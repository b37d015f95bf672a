//! Grid ingestion helpers.
//!
//! Loads the raw text grid from CSV sources. Fetching bytes over HTTP
//! (Google Sheets exports) and spreadsheet formats beyond CSV stay on
//! the frontend side; this module only turns bytes it is handed into a
//! rectangular [`crate::core::grid::Grid`].

pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use loaders::GridLoader;
