//! CSV grid loading with encoding fallback.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::WINDOWS_1252;

use crate::core::grid::Grid;

/// Unified interface for loading the raw text grid from CSV data.
pub struct GridLoader;

impl GridLoader {
    /// Loads a grid from a file path; only `.csv` is supported here.
    pub fn load_from_file(path: &Path) -> Result<Grid> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        if extension.to_lowercase() != "csv" {
            anyhow::bail!("Unsupported file format: {}", extension);
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::load_from_bytes(&bytes)
    }

    /// Loads a grid from raw CSV bytes.
    ///
    /// Hand-filled exports are not always UTF-8; invalid UTF-8 falls
    /// back to Windows-1252, which covers the Latin-1 accents these
    /// sheets actually contain.
    pub fn load_from_bytes(bytes: &[u8]) -> Result<Grid> {
        let text: Cow<'_, str> = match std::str::from_utf8(bytes) {
            Ok(utf8) => Cow::Borrowed(utf8),
            Err(_) => {
                log::warn!("CSV input is not valid UTF-8, decoding as Windows-1252");
                let (decoded, _, _) = WINDOWS_1252.decode(bytes);
                decoded
            }
        };
        Self::load_from_csv_str(&text)
    }

    /// Loads a grid from CSV text.
    ///
    /// No header row is assumed, rows may have uneven widths, and
    /// quoted cells may span multiple lines (names carry their
    /// leave-balance note on a second line).
    pub fn load_from_csv_str(text: &str) -> Result<Grid> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Failed to read CSV record")?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Grid::from_rows(rows).context("CSV did not produce a usable grid")
    }
}
