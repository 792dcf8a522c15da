//! Date of birth normalisation
//!
//! Sources write dates day-first (`15-08-1990`, `15/08/1990`) or, when already
//! normalised upstream, year-first (`1990-08-15`). Day and month may be one or
//! two digits. Output is always `YYYY-MM-DD`.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DAY_FIRST: Regex = Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4})$").unwrap();
    static ref YEAR_FIRST: Regex = Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$").unwrap();
}

/// Reformat a source date as ISO-8601 (`YYYY-MM-DD`)
///
/// Returns `None` for anything that is not a real calendar date in one of the
/// accepted shapes.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();

    let (year, month, day) = if let Some(caps) = DAY_FIRST.captures(raw) {
        (caps[3].parse().ok()?, caps[2].parse().ok()?, caps[1].parse().ok()?)
    } else if let Some(caps) = YEAR_FIRST.captures(raw) {
        (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
    } else {
        return None;
    };

    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Parse a four-digit year of birth
pub fn normalize_year(raw: &str) -> Option<u16> {
    let raw = raw.trim();
    if raw.len() != 4 {
        return None;
    }
    raw.parse::<u16>().ok().filter(|year| *year >= 1800)
}
