//! Type definitions and constants for the calendar script filter.

use std::ops::RangeInclusive;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::formatter::default_first_weekday;

/// First day of the displayed week.
///
/// Stored as a chrono [`Weekday`], exchanged as an integer where
/// 0 is Monday and 6 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStart(Weekday);

impl WeekStart {
    pub const MONDAY: WeekStart = WeekStart(Weekday::Mon);
    pub const SUNDAY: WeekStart = WeekStart(Weekday::Sun);

    pub fn new(weekday: Weekday) -> Self {
        WeekStart(weekday)
    }

    pub fn weekday(self) -> Weekday {
        self.0
    }

    /// Integer form of the week start (0 = Monday .. 6 = Sunday).
    pub fn index(self) -> u8 {
        self.0.num_days_from_monday() as u8
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::MONDAY
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WEEKDAYS_FROM_MONDAY
            .get(value as usize)
            .map(|&weekday| WeekStart(weekday))
            .ok_or(ConfigError::InvalidFirstWeekDay(value))
    }
}

impl From<WeekStart> for u8 {
    fn from(start: WeekStart) -> Self {
        start.index()
    }
}

/// Result of parsing a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedQuery {
    /// Blank query: show the current month.
    Empty,
    /// Month of the current year.
    MonthOnly { month: u32 },
    /// Explicit month and year.
    MonthAndYear { month: u32, year: i32 },
}

/// Per-invocation configuration of the calendar command.
///
/// Every key is optional in the on-disk file; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Free-text query: `""`, `"<month>"` or `"<month> <year>"`.
    pub query: String,
    /// First day of the week (0 = Monday .. 6 = Sunday).
    pub first_week_day: WeekStart,
    /// Format used when the query names no month.
    pub default_datetime_format: String,
    /// Format used when the query names a month (and maybe a year).
    pub specified_datetime_format: String,
    /// Locale for weekday abbreviations, e.g. `en_US`. Taken from the environment when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            query: String::new(),
            first_week_day: default_first_weekday(),
            default_datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            specified_datetime_format: SPECIFIED_DATETIME_FORMAT.to_string(),
            locale: None,
        }
    }
}

const WEEKDAYS_FROM_MONDAY: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Title of the single item returned for a query that cannot be parsed.
pub const USAGE: &str = "usage: alc [month (1-12)] [year (1900-9999)]";

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y/%m/%d (%a)\t%H:%M:%S";
pub const SPECIFIED_DATETIME_FORMAT: &str = "%Y/%m";

pub const MONTH_RANGE: RangeInclusive<i64> = 1..=12;
pub const YEAR_RANGE: RangeInclusive<i64> = 0..=9999;

pub const DAYS_PER_WEEK: usize = 7;
