//! Timeline layout: vertical stacking, pagination and draw instructions.
//!
//! The layout is built bottom-up: teams are stacked in reverse
//! first-appearance order, each team's people (also reversed) first and
//! the team header band above them, so the first-appearing team ends up
//! on top of the visual stack. The resulting row sequence is hard-cut
//! into pages of a fixed row budget, page order is reversed so page 1
//! holds the top of the stack, and every page restarts its local row
//! coordinates at zero. All pages share one padded date axis.

use chrono::{Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LayoutSettings;
use crate::core::domain::LeaveRecord;
use crate::services::colors::{first_appearance_people, first_appearance_teams, ColorAssignments};

/// Placeholder drawn when no leave data was extracted at all.
pub const NO_DATA_TEXT: &str = "No leave data found.";

/// Swatch used when a record has no color assignment, which only
/// happens when layout and color assignment saw different inputs.
const FALLBACK_COLOR: &str = "#9E9E9E";

/// Kind of a layout row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutRowKind {
    Person,
    TeamHeader,
}

/// One vertical slot on a page, either a person line or a team header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub kind: LayoutRowKind,
    pub name: String,
    pub team: String,
    /// Vertical slot in fixed row units, counted from the page bottom.
    pub slot: usize,
}

/// One leave bar with its label placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarInstruction {
    pub start: NaiveDate,
    pub duration_days: i64,
    pub row: usize,
    pub color: String,
    pub label: String,
    /// Vertical label offset in row-height units; alternates between
    /// positive and negative when neighbouring labels would collide.
    pub label_y_offset: f64,
}

/// Full-width band behind a team header, spanning the shared axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderBandInstruction {
    pub row: usize,
    /// Left-aligned bold text drawn on the band.
    pub label: String,
    pub color: String,
}

/// One bounded-height slice of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub rows: Vec<LayoutRow>,
    pub bars: Vec<BarInstruction>,
    pub bands: Vec<HeaderBandInstruction>,
    pub placeholder: Option<String>,
}

impl Page {
    /// (row slot, person name) tick labels for the left axis.
    pub fn tick_labels(&self) -> Vec<(usize, &str)> {
        self.rows
            .iter()
            .filter(|row| row.kind == LayoutRowKind::Person)
            .map(|row| (row.slot, row.name.as_str()))
            .collect()
    }
}

/// Shared date axis, identical on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl AxisRange {
    /// Dataset min/max padded by `padding_months` on each side.
    fn from_records(records: &[LeaveRecord], padding_months: u32) -> Self {
        let mut min = records[0].start;
        let mut max = records[0].end;
        for record in records {
            min = min.min(record.start);
            max = max.max(record.end);
        }
        Self::padded(min, max, padding_months)
    }

    fn around(day: NaiveDate, padding_months: u32) -> Self {
        Self::padded(day, day, padding_months)
    }

    fn padded(min: NaiveDate, max: NaiveDate, padding_months: u32) -> Self {
        let pad = Months::new(padding_months);
        Self {
            min: min.checked_sub_months(pad).unwrap_or(min),
            max: max.checked_add_months(pad).unwrap_or(max),
        }
    }

    /// First and last calendar year covered, for the chart title.
    pub fn year_span(&self) -> (i32, i32) {
        (self.min.year(), self.max.year())
    }
}

/// The paginated layout handed to the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub axis: AxisRange,
    pub pages: Vec<Page>,
}

/// Lays out the merged record list into pages of draw instructions.
///
/// An empty input yields a single placeholder page instead of failing:
/// "no leave data extracted" is a valid outcome, distinct from an
/// unreadable source.
pub fn build_timeline(
    records: &[LeaveRecord],
    colors: &ColorAssignments,
    settings: &LayoutSettings,
) -> Timeline {
    if records.is_empty() {
        return Timeline {
            axis: AxisRange::around(Utc::now().date_naive(), settings.axis_padding_months),
            pages: vec![Page {
                rows: Vec::new(),
                bars: Vec::new(),
                bands: Vec::new(),
                placeholder: Some(NO_DATA_TEXT.to_string()),
            }],
        };
    }

    let axis = AxisRange::from_records(records, settings.axis_padding_months);
    let stacked = stack_rows(records);

    let budget = settings.rows_per_page.max(1);
    let mut pages: Vec<Page> = stacked
        .chunks(budget)
        .map(|chunk| build_page(chunk, records, colors, settings))
        .collect();
    pages.reverse();

    Timeline { axis, pages }
}

/// Builds the global bottom-up row sequence with absolute slots.
///
/// The absolute slots only order the rows for chunking; each page
/// recomputes local coordinates afterwards.
fn stack_rows(records: &[LeaveRecord]) -> Vec<LayoutRow> {
    let teams = first_appearance_teams(records);
    let mut rows = Vec::new();
    let mut slot = 0usize;

    for team in teams.iter().rev() {
        for person in first_appearance_people(records, team).iter().rev() {
            rows.push(LayoutRow {
                kind: LayoutRowKind::Person,
                name: person.to_string(),
                team: team.to_string(),
                slot,
            });
            slot += 1;
        }
        // Header goes above the team's people, so it is emitted after.
        rows.push(LayoutRow {
            kind: LayoutRowKind::TeamHeader,
            name: team.to_string(),
            team: team.to_string(),
            slot,
        });
        slot += 1;
    }

    rows
}

fn build_page(
    chunk: &[LayoutRow],
    records: &[LeaveRecord],
    colors: &ColorAssignments,
    settings: &LayoutSettings,
) -> Page {
    let mut rows = Vec::with_capacity(chunk.len());
    let mut bars = Vec::new();
    let mut bands = Vec::new();

    for (local_slot, stacked_row) in chunk.iter().enumerate() {
        let row = LayoutRow {
            slot: local_slot,
            ..stacked_row.clone()
        };

        match row.kind {
            LayoutRowKind::Person => {
                bars.extend(person_bars(&row, records, colors, settings));
            }
            LayoutRowKind::TeamHeader => {
                let color = colors
                    .team_color(&row.team)
                    .unwrap_or(FALLBACK_COLOR)
                    .to_string();
                bands.push(HeaderBandInstruction {
                    row: local_slot,
                    label: row.name.clone(),
                    color,
                });
            }
        }

        rows.push(row);
    }

    Page {
        rows,
        bars,
        bands,
        placeholder: None,
    }
}

/// Bars for one person row, with collision-avoiding label offsets.
///
/// A single stateful left-to-right pass over the date-sorted intervals:
/// when two midpoints fall within the proximity threshold the label
/// offset alternates between the positive and negative stagger value,
/// and resets to center as soon as there is room again.
fn person_bars(
    row: &LayoutRow,
    records: &[LeaveRecord],
    colors: &ColorAssignments,
    settings: &LayoutSettings,
) -> Vec<BarInstruction> {
    let mut intervals: Vec<&LeaveRecord> = records
        .iter()
        .filter(|r| r.person == row.name && r.team == row.team)
        .collect();
    intervals.sort_by_key(|r| r.start);

    let color = colors
        .person_color(&row.name, &row.team)
        .unwrap_or(FALLBACK_COLOR)
        .to_string();

    let mut bars = Vec::with_capacity(intervals.len());
    let mut last_midpoint = f64::NEG_INFINITY;
    let mut last_offset = 0.0f64;

    for interval in intervals {
        let duration = interval.duration_days();
        let start_num = interval.start.num_days_from_ce() as f64;
        let midpoint = start_num + duration as f64 / 2.0;

        let offset = if midpoint - last_midpoint < settings.proximity_threshold_days {
            if last_offset > 0.0 {
                -settings.label_offset
            } else {
                settings.label_offset
            }
        } else {
            0.0
        };
        last_midpoint = midpoint;
        last_offset = offset;

        bars.push(BarInstruction {
            start: interval.start,
            duration_days: duration,
            row: row.slot,
            color: color.clone(),
            label: interval.label.clone(),
            label_y_offset: offset,
        });
    }

    bars
}
