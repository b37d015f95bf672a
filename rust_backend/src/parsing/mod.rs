//! Parsers for the free-text leave spreadsheet.
//!
//! This module turns loosely structured cell text and row shapes into
//! typed leave records.
//!
//! # Parsers
//!
//! - [`date_text`]: extract date ranges and isolated days from one cell
//! - [`table`]: walk the raw grid, classify rows and emit leave records

pub mod date_text;
pub mod table;
