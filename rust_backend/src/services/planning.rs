//! End-to-end planning pipeline.
//!
//! Wires the stages together: grid walk -> record extraction -> run
//! merge -> color assignment -> timeline layout. Each stage consumes an
//! immutable input and returns a fresh collection, so the pipeline is
//! safe to re-run on the same data.

use serde::Serialize;

use crate::config::PlanningConfig;
use crate::core::domain::LeaveRecord;
use crate::core::grid::Grid;
use crate::parsing::table;
use crate::services::colors::{self, assign_colors};
use crate::services::layout::{build_timeline, Timeline};
use crate::transformations::merge_isolated_runs;

/// The full pipeline output handed to the rendering side.
#[derive(Debug, Clone, Serialize)]
pub struct Planning {
    /// Merged leave records, after isolated-day coalescing.
    pub records: Vec<LeaveRecord>,
    pub timeline: Timeline,
    pub num_people: usize,
    pub num_teams: usize,
}

impl Planning {
    /// Distinguishes "nothing extracted" (placeholder page, still a
    /// valid result) from a hard ingestion failure upstream.
    pub fn has_leave_data(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Runs the full pipeline on a raw text grid.
pub fn build_planning(grid: &Grid, config: &PlanningConfig) -> Planning {
    let records = table::extract_leave_records(grid);
    build_planning_from_records(records, config)
}

/// Runs the pipeline from already-typed records.
///
/// Entry point for non-text sources whose dates were parsed elsewhere;
/// build the records with [`LeaveRecord::range`] and
/// [`LeaveRecord::isolated`].
pub fn build_planning_from_records(records: Vec<LeaveRecord>, config: &PlanningConfig) -> Planning {
    let merged = merge_isolated_runs(records);
    let color_assignments = assign_colors(&merged);
    let timeline = build_timeline(&merged, &color_assignments, &config.layout);

    let num_teams = colors::first_appearance_teams(&merged).len();
    let num_people = merged
        .iter()
        .map(|r| (&r.person, &r.team))
        .collect::<std::collections::HashSet<_>>()
        .len();

    log::info!(
        "planning built: {} records, {} people, {} teams, {} pages",
        merged.len(),
        num_people,
        num_teams,
        timeline.pages.len()
    );

    Planning {
        records: merged,
        timeline,
        num_people,
        num_teams,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn typed_records_skip_text_parsing() {
        let records = vec![
            LeaveRecord::range("A", "T", date(2025, 1, 1), date(2025, 1, 5)),
            LeaveRecord::isolated("A", "T", date(2025, 1, 10)),
            LeaveRecord::isolated("A", "T", date(2025, 1, 11)),
        ];

        let planning = build_planning_from_records(records, &PlanningConfig::default());

        assert!(planning.has_leave_data());
        assert_eq!(planning.records.len(), 2);
        assert_eq!(planning.num_people, 1);
        assert_eq!(planning.num_teams, 1);
        assert!(planning.records.iter().any(|r| r.label == "2 JS"));
    }

    #[test]
    fn empty_records_still_produce_a_page() {
        let planning = build_planning_from_records(vec![], &PlanningConfig::default());

        assert!(!planning.has_leave_data());
        assert_eq!(planning.timeline.pages.len(), 1);
        assert!(planning.timeline.pages[0].placeholder.is_some());
    }

    #[test]
    fn planning_serializes_to_json() {
        let records = vec![LeaveRecord::range("A", "T", date(2025, 1, 1), date(2025, 1, 5))];
        let planning = build_planning_from_records(records, &PlanningConfig::default());

        let json = serde_json::to_string(&planning).unwrap();
        assert!(json.contains("\"timeline\""));
        assert!(json.contains("2025-01-01"));
    }
}
