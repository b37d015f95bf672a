//! Rectangular text grid handed over by the ingestion side.
//!
//! The grid makes no assumption about headers: row 0 is data like any
//! other row. Column 0 is the label column; the remaining columns carry
//! free-text leave periods.

use thiserror::Error;

/// Input-contract violation on the grid shape.
///
/// Shape problems are reported as hard errors, unlike unrecognized cell
/// content which simply contributes no record.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid has rows but no columns")]
    NoColumns,
}

/// A rectangular grid of text cells, row-major.
///
/// Rows of uneven width are padded with empty cells on construction so
/// every row exposes the same number of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    num_cols: usize,
}

impl Grid {
    /// Builds a grid from raw rows, padding short rows to the widest one.
    ///
    /// A grid with zero rows is valid (it yields no records downstream);
    /// a non-empty grid whose widest row has zero columns is not.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, GridError> {
        let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        if !rows.is_empty() && num_cols == 0 {
            return Err(GridError::NoColumns);
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(num_cols, String::new());
                row
            })
            .collect();

        Ok(Self { rows, num_cols })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
