//! Month-grid arithmetic for the shell: weekday layout, month lengths, and
//! month-name parsing. Grids are Monday-first; cells outside the month are
//! zero, so a week is always `[u32; 7]`.

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// English month name for 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Accepts a month as a number (`"3"`) or a name/prefix of at least three
/// letters (`"march"`, `"Mar"`), case-insensitive.
pub fn parse_month(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }

    let query = trimmed.to_lowercase();
    if query.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(&query))
        .map(|i| i as u32 + 1)
}

/// Number of days in the month, or None if chrono rejects the year/month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first.signed_duration_since(first).num_days() as u32)
}

/// The month laid out as Monday-first weeks, out-of-month cells as 0.
pub fn month_weeks(year: i32, month: u32) -> Option<Vec<[u32; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = days_in_month(year, month)?;
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [0u32; 7];
    let mut slot = lead;

    for day in 1..=days {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0u32; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    Some(weeks)
}
