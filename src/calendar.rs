//! Month matrix calculation for an arbitrary first weekday.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::RenderError;
use crate::types::{DAYS_PER_WEEK, WeekStart};

/// One calendar week; `None` marks a day outside the month.
pub type Week = [Option<u32>; DAYS_PER_WEEK];

/// Check if a year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Get weekday order based on week start day.
pub fn weekday_order(week_start: WeekStart) -> [Weekday; DAYS_PER_WEEK] {
    std::array::from_fn(|i| (0..i).fold(week_start.weekday(), |day, _| day.succ()))
}

/// Number of leading blank cells before day 1 in the first week row.
pub fn leading_blanks(first_day: Weekday, week_start: WeekStart) -> usize {
    let first = first_day.num_days_from_monday() as usize;
    let start = week_start.index() as usize;
    (first + DAYS_PER_WEEK - start) % DAYS_PER_WEEK
}

/// Build the week rows of a month.
///
/// Every row holds exactly seven cells; the first and last rows are padded
/// with `None`. A month spans four to six rows.
pub fn month_matrix(year: i32, month: u32, week_start: WeekStart) -> Result<Vec<Week>, RenderError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(RenderError::InvalidDate { year, month })?;

    let offset = leading_blanks(first.weekday(), week_start);
    let days = days_in_month(year, month) as usize;
    let rows = (offset + days).div_ceil(DAYS_PER_WEEK);

    let mut weeks = vec![[None; DAYS_PER_WEEK]; rows];
    for day in 1..=days {
        let cell = offset + day - 1;
        weeks[cell / DAYS_PER_WEEK][cell % DAYS_PER_WEEK] = Some(day as u32);
    }

    Ok(weeks)
}
