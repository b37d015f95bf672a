//! Grid walking: row classification and leave record extraction.
//!
//! Rows are processed top to bottom while threading the current team as
//! fold state. A row whose label cell is filled but whose period cells
//! are all blank names the team for the rows below it; a row with a
//! label and at least one filled period cell describes one person's
//! leave periods.

use chrono::{NaiveDate, Utc};

use crate::core::domain::{LeaveRecord, DEFAULT_TEAM};
use crate::core::grid::Grid;
use crate::parsing::date_text;

/// Label substrings that mark a header-shaped row as boilerplate rather
/// than a team name (section titles, instructions, period captions).
/// Matching is case-sensitive.
const NOISE_MARKERS: &[&str] = &["Période", "CONGES", "FORMULAIRE", "Instructions"];

/// Classification of one grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// Names the team for subsequent person rows.
    TeamHeader(String),
    /// One person's leave row; carries the person name (first line of
    /// the label cell, auxiliary note lines discarded).
    Person(String),
    /// Contributes nothing and leaves the team context untouched.
    Noise,
}

/// Classifies a row by its shape.
///
/// The header heuristic (filled label, blank period cells) deliberately
/// keeps a person with no leave at all out of the team list: such a row
/// is header-shaped and ends up rebinding the team, which is accepted
/// as a structural ambiguity rather than rejected.
pub fn classify_row(cells: &[String]) -> RowClass {
    let label = cells.first().map(|c| c.trim()).unwrap_or("");
    if label.is_empty() {
        return RowClass::Noise;
    }

    let has_period_content = cells.iter().skip(1).any(|c| !c.trim().is_empty());
    if !has_period_content {
        if NOISE_MARKERS.iter().any(|marker| label.contains(marker)) {
            return RowClass::Noise;
        }
        return RowClass::TeamHeader(label.to_string());
    }

    let person = label.lines().next().unwrap_or(label).trim().to_string();
    RowClass::Person(person)
}

/// Extracts the flat leave record list from a raw grid.
///
/// Partial isolated-day fragments that need a fallback year resolve it
/// against the current date; see [`extract_leave_records_at`].
pub fn extract_leave_records(grid: &Grid) -> Vec<LeaveRecord> {
    extract_leave_records_at(grid, Utc::now().date_naive())
}

/// Extracts leave records, resolving year-less fragments against `today`.
///
/// Records are emitted in row-then-column order; no sort is applied.
/// A single cell may contribute both a range and isolated days.
pub fn extract_leave_records_at(grid: &Grid, today: NaiveDate) -> Vec<LeaveRecord> {
    let initial = (Vec::new(), DEFAULT_TEAM.to_string());

    let (records, _team) = grid.rows().fold(initial, |(mut records, team), cells| {
        match classify_row(cells) {
            RowClass::Noise => (records, team),
            RowClass::TeamHeader(name) => {
                log::debug!("team context set to '{}'", name);
                (records, name)
            }
            RowClass::Person(person) => {
                for cell in cells.iter().skip(1) {
                    extract_cell(&mut records, &person, &team, cell, today);
                }
                (records, team)
            }
        }
    });

    records
}

/// Emits the records one period cell contributes for one person.
fn extract_cell(
    records: &mut Vec<LeaveRecord>,
    person: &str,
    team: &str,
    cell: &str,
    today: NaiveDate,
) {
    if let Some((start, end)) = date_text::parse_date_range(cell) {
        if start <= end {
            records.push(LeaveRecord::range(person, team, start, end));
        } else {
            log::warn!(
                "ignoring reversed range {} -> {} for '{}'",
                start,
                end,
                person
            );
        }
    }

    for day in date_text::parse_extra_days_at(cell, today) {
        records.push(LeaveRecord::isolated(person, team, day));
    }
}
