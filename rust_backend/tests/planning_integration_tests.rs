//! End-to-end pipeline tests: CSV text in, paginated timeline out.

use chrono::NaiveDate;

use conges_rust::config::PlanningConfig;
use conges_rust::core::domain::LeaveKind;
use conges_rust::io::loaders::GridLoader;
use conges_rust::parsing::table::extract_leave_records_at;
use conges_rust::services::planning::build_planning_from_records;
use conges_rust::transformations::merge_isolated_runs;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn csv_row_under_team_header_yields_range_and_merged_run() {
    let csv = "\
FORMULAIRE CONGES 2025,,,
ADMINISTRATION,,,
Dupont Jean,Du 01/01/25 au 05/01/25,(+1 JS : 10/01/25),
";
    let grid = GridLoader::load_from_csv_str(csv).unwrap();
    let records = extract_leave_records_at(&grid, date(2025, 6, 1));
    let merged = merge_isolated_runs(records);

    assert_eq!(merged.len(), 2);
    assert!(merged
        .iter()
        .all(|r| r.person == "Dupont Jean" && r.team == "ADMINISTRATION"));

    let range = merged.iter().find(|r| r.label == "01/01 - 05/01").unwrap();
    assert_eq!(range.start, date(2025, 1, 1));
    assert_eq!(range.end, date(2025, 1, 5));
    assert_eq!(range.kind, LeaveKind::Range);

    let run = merged.iter().find(|r| r.label == "JS").unwrap();
    assert_eq!(run.start, date(2025, 1, 10));
    assert_eq!(run.end, date(2025, 1, 10));
}

#[test]
fn noise_rows_are_skipped_without_touching_the_team() {
    let csv = "\
ADMINISTRATION,,
Période de référence,,
Dupont Jean,Du 01/01/25 au 05/01/25,
";
    let grid = GridLoader::load_from_csv_str(csv).unwrap();
    let records = extract_leave_records_at(&grid, date(2025, 6, 1));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].team, "ADMINISTRATION");
}

#[test]
fn full_pipeline_produces_pages_and_colors() {
    let csv = "\
ADMINISTRATION,,
Dupont Jean,Du 01/01/25 au 05/01/25,(+2 JS : 24 et 25/02/25)
Martin Claire,Du 10/03/25 au 14/03/25,
TECHNIQUE,,
Petit Luc,(+1 JS : 28/02/25),
";
    let grid = GridLoader::load_from_csv_str(csv).unwrap();
    let records = extract_leave_records_at(&grid, date(2025, 6, 1));
    let planning = build_planning_from_records(records, &PlanningConfig::default());

    assert!(planning.has_leave_data());
    assert_eq!(planning.num_teams, 2);
    assert_eq!(planning.num_people, 3);
    assert_eq!(planning.timeline.pages.len(), 1);

    let page = &planning.timeline.pages[0];
    // 3 person rows + 2 header rows
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.bands.len(), 2);
    assert!(page.placeholder.is_none());

    // The two consecutive February days were merged into one bar.
    let dupont_bars: Vec<_> = page
        .bars
        .iter()
        .filter(|b| {
            page.rows[b.row].name == "Dupont Jean"
        })
        .collect();
    assert_eq!(dupont_bars.len(), 2);
    assert!(dupont_bars.iter().any(|b| b.label == "2 JS"));
}

#[test]
fn dataset_without_leave_text_yields_placeholder_page() {
    let csv = "\
Instructions,,
remplir une ligne par personne,notes libres,
";
    let grid = GridLoader::load_from_csv_str(csv).unwrap();
    let records = extract_leave_records_at(&grid, date(2025, 6, 1));
    let planning = build_planning_from_records(records, &PlanningConfig::default());

    assert!(!planning.has_leave_data());
    assert_eq!(planning.timeline.pages.len(), 1);
    assert!(planning.timeline.pages[0].placeholder.is_some());
}

#[test]
fn planning_json_contains_draw_instructions() {
    let csv = "Dupont Jean,Du 01/01/25 au 05/01/25\n";
    let grid = GridLoader::load_from_csv_str(csv).unwrap();
    let records = extract_leave_records_at(&grid, date(2025, 6, 1));
    let planning = build_planning_from_records(records, &PlanningConfig::default());

    let json = serde_json::to_string_pretty(&planning).unwrap();
    assert!(json.contains("\"bars\""));
    assert!(json.contains("\"axis\""));
    assert!(json.contains("01/01 - 05/01"));
}
