//! Deterministic color assignment for teams and people.
//!
//! Teams cycle through Material Design palette families in
//! first-appearance order; the family's second swatch backs the team
//! header band, and the team's members get a light-to-dark gradient of
//! the same family. Reruns over the same record enumeration produce
//! identical mappings.

use std::collections::HashMap;

use crate::core::domain::{LeaveRecord, DEFAULT_TEAM};

/// Material Design palette families (shades 50 to 900, light to dark).
pub const COLOR_PALETTES: [[&str; 10]; 12] = [
    // Blue
    [
        "#E3F2FD", "#BBDEFB", "#90CAF9", "#64B5F6", "#42A5F5", "#2196F3", "#1E88E5", "#1976D2",
        "#1565C0", "#0D47A1",
    ],
    // Red
    [
        "#FFEBEE", "#FFCDD2", "#EF9A9A", "#E57373", "#EF5350", "#F44336", "#E53935", "#D32F2F",
        "#C62828", "#B71C1C",
    ],
    // Green
    [
        "#E8F5E9", "#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A", "#4CAF50", "#43A047", "#388E3C",
        "#2E7D32", "#1B5E20",
    ],
    // Orange
    [
        "#FFF3E0", "#FFE0B2", "#FFCC80", "#FFB74D", "#FFA726", "#FF9800", "#FB8C00", "#F57C00",
        "#EF6C00", "#E65100",
    ],
    // Purple
    [
        "#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC", "#9C27B0", "#8E24AA", "#7B1FA2",
        "#6A1B9A", "#4A148C",
    ],
    // Teal
    [
        "#E0F2F1", "#B2DFDB", "#80CBC4", "#4DB6AC", "#26A69A", "#009688", "#00897B", "#00796B",
        "#00695C", "#004D40",
    ],
    // Indigo
    [
        "#E8EAF6", "#C5CAE9", "#9FA8DA", "#7986CB", "#5C6BC0", "#3F51B5", "#3949AB", "#303F9F",
        "#283593", "#1A237E",
    ],
    // Amber
    [
        "#FFF8E1", "#FFECB3", "#FFE082", "#FFD54F", "#FFCA28", "#FFC107", "#FFB300", "#FFA000",
        "#FF8F00", "#FF6F00",
    ],
    // Pink
    [
        "#FCE4EC", "#F8BBD0", "#F48FB1", "#F06292", "#EC407A", "#E91E63", "#D81B60", "#C2185B",
        "#AD1457", "#880E4F",
    ],
    // Cyan
    [
        "#E0F7FA", "#B2EBF2", "#80DEEA", "#4DD0E1", "#26C6DA", "#00BCD4", "#00ACC1", "#0097A7",
        "#00838F", "#006064",
    ],
    // Brown
    [
        "#EFEBE9", "#D7CCC8", "#BCAAA4", "#A1887F", "#8D6E63", "#795548", "#6D4C41", "#5D4037",
        "#4E342E", "#3E2723",
    ],
    // Blue Grey
    [
        "#ECEFF1", "#CFD8DC", "#B0BEC5", "#90A4AE", "#78909C", "#607D8B", "#546E7A", "#455A64",
        "#37474F", "#263238",
    ],
];

/// Swatch index backing a team's header band.
const HEADER_SHADE: usize = 1;
/// Gradient bounds for members of an explicit team.
const GRADIENT_LOW: usize = 3;
const GRADIENT_HIGH: usize = 8;
/// Middle shade used when a team has exactly one member.
const SINGLE_PERSON_SHADE: usize = 5;
/// Wider gradient used when no team attribution exists at all.
const FLAT_GRADIENT_LOW: usize = 2;

/// Color mappings for people and teams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignments {
    /// (person, team) -> swatch. Keyed by the pair so the same name in
    /// two teams gets two swatches.
    pub person_colors: HashMap<(String, String), String>,
    /// team -> header swatch.
    pub team_colors: HashMap<String, String>,
}

impl ColorAssignments {
    pub fn person_color(&self, person: &str, team: &str) -> Option<&str> {
        self.person_colors
            .get(&(person.to_string(), team.to_string()))
            .map(String::as_str)
    }

    pub fn team_color(&self, team: &str) -> Option<&str> {
        self.team_colors.get(team).map(String::as_str)
    }
}

/// Assigns swatches to every (person, team) pair and every team.
///
/// Teams are enumerated in first-appearance order and take palette
/// family `i % 12`; the wraparound beyond twelve teams is intentional
/// so output stays reproducible. When the records carry no team
/// attribution at all (only the implicit default team), people spread
/// across a wider gradient of the first family instead.
pub fn assign_colors(records: &[LeaveRecord]) -> ColorAssignments {
    let teams = first_appearance_teams(records);

    if teams.len() == 1 && teams[0] == DEFAULT_TEAM {
        return assign_colors_flat(records);
    }

    let mut assignments = ColorAssignments::default();

    for (team_idx, team) in teams.iter().enumerate() {
        let palette = &COLOR_PALETTES[team_idx % COLOR_PALETTES.len()];
        assignments
            .team_colors
            .insert(team.to_string(), palette[HEADER_SHADE].to_string());

        let people = first_appearance_people(records, team);
        let indices = if people.len() == 1 {
            vec![SINGLE_PERSON_SHADE]
        } else {
            gradient_indices(GRADIENT_LOW, GRADIENT_HIGH, people.len())
        };

        for (i, person) in people.iter().enumerate() {
            assignments.person_colors.insert(
                (person.to_string(), team.to_string()),
                palette[indices[i]].to_string(),
            );
        }
    }

    assignments
}

/// Teamless variant: everyone on the implicit default team, spread over
/// a wider gradient of the first palette family.
fn assign_colors_flat(records: &[LeaveRecord]) -> ColorAssignments {
    let mut assignments = ColorAssignments::default();
    let palette = &COLOR_PALETTES[0];

    assignments
        .team_colors
        .insert(DEFAULT_TEAM.to_string(), palette[HEADER_SHADE].to_string());

    let people = first_appearance_people(records, DEFAULT_TEAM);
    let indices = gradient_indices(FLAT_GRADIENT_LOW, GRADIENT_HIGH, people.len());

    for (i, person) in people.iter().enumerate() {
        assignments.person_colors.insert(
            (person.to_string(), DEFAULT_TEAM.to_string()),
            palette[indices[i]].to_string(),
        );
    }

    assignments
}

/// Teams in first-appearance order.
pub fn first_appearance_teams(records: &[LeaveRecord]) -> Vec<&str> {
    let mut teams: Vec<&str> = Vec::new();
    for record in records {
        if !teams.contains(&record.team.as_str()) {
            teams.push(&record.team);
        }
    }
    teams
}

/// People of one team in first-appearance order.
pub fn first_appearance_people<'a>(records: &'a [LeaveRecord], team: &str) -> Vec<&'a str> {
    let mut people: Vec<&str> = Vec::new();
    for record in records {
        if record.team == team && !people.contains(&record.person.as_str()) {
            people.push(&record.person);
        }
    }
    people
}

/// Evenly spaced integer positions over `[low, high]`, truncated toward
/// zero, with the endpoint pinned exactly to `high`.
fn gradient_indices(low: usize, high: usize, n: usize) -> Vec<usize> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) as f64 / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        high
                    } else {
                        (low as f64 + step * i as f64) as usize
                    }
                })
                .collect()
        }
    }
}
