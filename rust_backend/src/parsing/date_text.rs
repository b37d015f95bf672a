//! Date extraction from one free-text cell.
//!
//! Two grammars are recognized, both produced by hand-filled French
//! planning spreadsheets:
//!
//! - a range: `du 14/05/25 au 17/05/25`, case-insensitive, with any
//!   surrounding prose ("inclus", notes, trailing parentheses) ignored;
//! - isolated days: `(+2 JS : 24 et 25/02/26)`, where fragments shrink
//!   from full `D/M/Y` dates down to bare day numbers and borrow their
//!   missing year/month from the fragment to their right.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"du\s+(\d{1,2}/\d{1,2}/\d{2,4})\s+au\s+(\d{1,2}/\d{1,2}/\d{2,4})")
        .expect("valid range regex")
});

static EXTRA_DAYS_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(\+\d+\s*JS\s*:\s*(.*?)\)").expect("valid JS group regex"));

static FULL_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{2,4})").expect("valid date regex"));

static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})").expect("valid day/month regex"));

static DAY_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})$").expect("valid day regex"));

/// Extracts a (start, end) range from text like "Du 14/05/25 au 17/05/25".
///
/// Only the first match in the cell is used. Returns `None` when the
/// pattern is absent or either date does not exist (e.g. day 32); an
/// unrecognized cell is not an error.
pub fn parse_date_range(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let normalized = text.to_lowercase().replace('\n', " ");
    let caps = RANGE_RE.captures(&normalized)?;

    let start = parse_day_first(caps.get(1)?.as_str())?;
    let end = parse_day_first(caps.get(2)?.as_str())?;
    Some((start, end))
}

/// Extracts isolated days from every `(+N JS : ...)` group in the cell,
/// resolving partial fragments against the current date for a missing
/// year. See [`parse_extra_days_at`].
pub fn parse_extra_days(text: &str) -> Vec<NaiveDate> {
    parse_extra_days_at(text, Utc::now().date_naive())
}

/// Extracts isolated days from every `(+N JS : ...)` group in the cell.
///
/// Fragments are comma/"et"-separated and resolved right to left in a
/// single pass, so a trailing full date supplies year and month context
/// for the partial fragments before it:
///
/// - `D/M/Y`: fully qualified, two-digit years normalized to `20YY`;
/// - `D/M`: year borrowed from the context, or from `today` when no
///   fragment has resolved yet;
/// - `D`: month and year borrowed from the context, silently dropped
///   when there is none.
///
/// The declared count `N` is informational only and never validated.
/// Malformed fragments are skipped without failing the group.
pub fn parse_extra_days_at(text: &str, today: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();

    for group in EXTRA_DAYS_GROUP_RE.captures_iter(text) {
        let content = group[1].replace(" et ", ",").replace(" ET ", ",");
        let fragments: Vec<&str> = content.split(',').map(str::trim).collect();

        // Reverse fold carrying the most recently resolved date, then
        // re-reversed so the output keeps document order.
        let mut resolved = Vec::new();
        let mut context: Option<NaiveDate> = None;

        for fragment in fragments.iter().rev() {
            if let Some(caps) = FULL_DATE_RE.captures(fragment) {
                if let Some(date) = build_date(&caps[3], &caps[2], &caps[1]) {
                    resolved.push(date);
                    context = Some(date);
                }
                continue;
            }

            if let Some(caps) = DAY_MONTH_RE.captures(fragment) {
                let year = context.map(|d| d.year()).unwrap_or_else(|| today.year());
                if let Some(date) = build_date_ymd(year, &caps[2], &caps[1]) {
                    resolved.push(date);
                    context = Some(date);
                }
                continue;
            }

            if let Some(caps) = DAY_ONLY_RE.captures(fragment) {
                match context {
                    Some(ctx) => {
                        if let Some(date) = build_date_in_month(ctx, &caps[1]) {
                            resolved.push(date);
                        }
                    }
                    None => {
                        log::warn!("dropping day fragment '{}' with no date context", fragment)
                    }
                }
            }
        }

        resolved.reverse();
        days.extend(resolved);
    }

    days
}

/// Parses a day-first `D/M/Y` string, normalizing two-digit years.
fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    build_date(year, month, day)
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = normalize_year(year)?;
    build_date_ymd(year, month, day)
}

fn build_date_ymd(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn build_date_in_month(context: NaiveDate, day: &str) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(context.year(), context.month(), day)
}

/// Two-digit years are prefixed with "20"; four-digit years pass through.
fn normalize_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    if year.len() == 2 {
        Some(2000 + value)
    } else {
        Some(value)
    }
}
