use chrono::{Datelike, NaiveDate};

/// Parse a conversation date label ("Jan 16 • 2:30 PM") into a calendar
/// date.
///
/// Only the part before the bullet is read. Labels normally carry no year,
/// so the month/day is resolved against `today` as its most recent
/// occurrence: a month/day later than `today` belongs to the previous
/// year. A trailing year in the label ("Jan 16, 2025") is honored when
/// present. Returns None for anything unparseable.
pub fn parse_date_label(label: &str, today: NaiveDate) -> Option<NaiveDate> {
    let date_part = label.split('•').next().unwrap_or(label).trim();
    let mut tokens = date_part.split_whitespace();

    let month = month_from_abbrev(tokens.next()?)?;
    let day: u32 = tokens.next()?.trim_end_matches(',').parse().ok()?;

    if let Some(year_token) = tokens.next() {
        let year: i32 = year_token.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(date) if date <= today => Some(date),
        // Future this year, or invalid this year (Feb 29): previous year.
        _ => NaiveDate::from_ymd_opt(today.year() - 1, month, day),
    }
}

/// Month number from an English three-letter abbreviation, case-insensitive.
fn month_from_abbrev(token: &str) -> Option<u32> {
    let token = token.trim_end_matches(',').to_ascii_lowercase();
    match token.get(..3)? {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
