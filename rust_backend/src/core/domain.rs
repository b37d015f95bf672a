//! Domain models for employee leave periods.
//!
//! A [`LeaveRecord`] is one contiguous absence for one person: either a
//! multi-day range declared as "du .. au ..", or a single isolated day
//! ("JS") that the merge stage may later coalesce with its neighbours.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Team name assumed while no team header row has been seen yet.
pub const DEFAULT_TEAM: &str = "General";

/// Kind of a leave record.
///
/// The kind is a closed set of two variants and flows through the whole
/// pipeline as a tag; the display label is never parsed back into
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveKind {
    /// A contiguous multi-day period ("du 14/05/25 au 17/05/25").
    Range,
    /// A single isolated day ("JS"), eligible for run merging.
    IsolatedDay,
}

/// One contiguous absence period for one person.
///
/// Invariant: `start <= end`. The label is a derived display string.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use conges_rust::core::domain::LeaveRecord;
///
/// let start = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap();
/// let record = LeaveRecord::range("Dupont Jean", "ADMINISTRATION", start, end);
///
/// assert_eq!(record.label, "14/05 - 17/05");
/// assert_eq!(record.duration_days(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub person: String,
    pub team: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub kind: LeaveKind,
}

impl LeaveRecord {
    /// Creates a range record with the derived "DD/MM - DD/MM" label.
    ///
    /// This is also the typed entry point for callers that already hold
    /// parsed dates and bypass the text parsers entirely.
    pub fn range(person: &str, team: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            person: person.to_string(),
            team: team.to_string(),
            start,
            end,
            label: range_label(start, end),
            kind: LeaveKind::Range,
        }
    }

    /// Creates an isolated-day record (start == end) labeled "JS".
    pub fn isolated(person: &str, team: &str, day: NaiveDate) -> Self {
        Self {
            person: person.to_string(),
            team: team.to_string(),
            start: day,
            end: day,
            label: "JS".to_string(),
            kind: LeaveKind::IsolatedDay,
        }
    }

    /// Number of calendar days covered, endpoints inclusive.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Display label for a date range: "DD/MM - DD/MM".
pub fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%d/%m"), end.format("%d/%m"))
}
