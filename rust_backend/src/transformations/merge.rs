//! Coalescing of consecutive isolated days into runs.
//!
//! Isolated days are partitioned by (person, team) and merged greedily:
//! a day extends the current run when it starts exactly one day after
//! the run ends. A closed run is re-emitted as a plain range record
//! labeled "JS" (one day) or "k JS" (k days), which makes the merge
//! idempotent: its output no longer carries the isolated-day kind.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::core::domain::{LeaveKind, LeaveRecord};

/// Merges consecutive isolated-day records into runs.
///
/// Range records pass through unchanged. Output order is ranges first,
/// then runs grouped by (person, team); downstream consumers re-sort
/// per person where ordering matters.
pub fn merge_isolated_runs(records: Vec<LeaveRecord>) -> Vec<LeaveRecord> {
    let (isolated, mut merged): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|r| r.kind == LeaveKind::IsolatedDay);

    if isolated.is_empty() {
        return merged;
    }

    let mut groups: BTreeMap<(String, String), Vec<LeaveRecord>> = BTreeMap::new();
    for record in isolated {
        groups
            .entry((record.person.clone(), record.team.clone()))
            .or_default()
            .push(record);
    }

    for ((person, team), mut days) in groups {
        days.sort_by_key(|r| r.start);

        let mut run_start = days[0].start;
        let mut run_end = days[0].end;
        let mut count: u32 = 1;

        for day in days.iter().skip(1) {
            if day.start == run_end + Duration::days(1) {
                run_end = day.end;
                count += 1;
            } else {
                merged.push(close_run(&person, &team, run_start, run_end, count));
                run_start = day.start;
                run_end = day.end;
                count = 1;
            }
        }
        merged.push(close_run(&person, &team, run_start, run_end, count));
    }

    merged
}

fn close_run(person: &str, team: &str, start: NaiveDate, end: NaiveDate, count: u32) -> LeaveRecord {
    let label = if count > 1 {
        format!("{} JS", count)
    } else {
        "JS".to_string()
    };

    LeaveRecord {
        person: person.to_string(),
        team: team.to_string(),
        start,
        end,
        label,
        kind: LeaveKind::Range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::LeaveRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn js(person: &str, team: &str, day: NaiveDate) -> LeaveRecord {
        LeaveRecord::isolated(person, team, day)
    }

    #[test]
    fn three_consecutive_days_merge_into_one_run() {
        let records = vec![
            js("A", "T", date(2026, 2, 24)),
            js("A", "T", date(2026, 2, 25)),
            js("A", "T", date(2026, 2, 26)),
        ];

        let merged = merge_isolated_runs(records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].start, date(2026, 2, 24));
        assert_eq!(merged[0].end, date(2026, 2, 26));
        assert_eq!(merged[0].label, "3 JS");
        assert_eq!(merged[0].kind, LeaveKind::Range);
    }

    #[test]
    fn gap_splits_runs() {
        let records = vec![
            js("A", "T", date(2026, 2, 24)),
            js("A", "T", date(2026, 2, 26)),
        ];

        let merged = merge_isolated_runs(records);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].label, "JS");
        assert_eq!(merged[1].label, "JS");
        assert_eq!(merged[0].start, merged[0].end);
    }

    #[test]
    fn unsorted_input_still_merges() {
        let records = vec![
            js("A", "T", date(2026, 2, 26)),
            js("A", "T", date(2026, 2, 24)),
            js("A", "T", date(2026, 2, 25)),
        ];

        let merged = merge_isolated_runs(records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].label, "3 JS");
    }

    #[test]
    fn runs_never_cross_person_or_team() {
        let records = vec![
            js("A", "T", date(2026, 2, 24)),
            js("B", "T", date(2026, 2, 25)),
            js("A", "U", date(2026, 2, 25)),
        ];

        let merged = merge_isolated_runs(records);
        assert_eq!(merged.len(), 3);
        assert!(merged.iter().all(|r| r.label == "JS"));
    }

    #[test]
    fn ranges_pass_through_unchanged() {
        let range = LeaveRecord::range("A", "T", date(2025, 1, 1), date(2025, 1, 5));
        let records = vec![range.clone(), js("A", "T", date(2025, 1, 10))];

        let merged = merge_isolated_runs(records);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], range);
        assert_eq!(merged[1].label, "JS");
    }

    #[test]
    fn merge_is_idempotent() {
        let records = vec![
            js("A", "T", date(2026, 2, 24)),
            js("A", "T", date(2026, 2, 25)),
            js("B", "T", date(2026, 3, 1)),
        ];

        let once = merge_isolated_runs(records);
        let twice = merge_isolated_runs(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn year_boundary_days_are_consecutive() {
        let records = vec![
            js("A", "T", date(2025, 12, 31)),
            js("A", "T", date(2026, 1, 1)),
        ];

        let merged = merge_isolated_runs(records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].label, "2 JS");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge_isolated_runs(vec![]).is_empty());
    }
}
