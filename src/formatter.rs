//! Calendar formatting: date/time strings, weekday header and week rows.

use std::fmt::Write;
use std::sync::atomic::{AtomicU8, Ordering};

use chrono::format::{DelayedFormat, StrftimeItems};
use chrono::{Datelike, Locale, NaiveDate, NaiveDateTime, Weekday};

use crate::calendar::{Week, month_matrix, weekday_order};
use crate::error::RenderError;
use crate::types::WeekStart;

/// Process-wide first weekday, 0 = Monday .. 6 = Sunday.
static FIRST_WEEKDAY: AtomicU8 = AtomicU8::new(0);

/// Set the weekday that starts each week for formatters built with [`CalendarFormatter::new`].
///
/// The setting persists until changed again, so a long-lived process must set
/// it before every rendering.
pub fn set_first_weekday(week_start: WeekStart) {
    FIRST_WEEKDAY.store(week_start.index(), Ordering::SeqCst);
}

/// Current process-wide first weekday.
pub fn first_weekday() -> WeekStart {
    WeekStart::try_from(FIRST_WEEKDAY.load(Ordering::SeqCst)).unwrap_or_default()
}

/// Week start used when configuration omits it. Always Monday.
pub fn default_first_weekday() -> WeekStart {
    WeekStart::MONDAY
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    locale_from_env(|key| std::env::var(key).ok())
}

/// Pick the locale from `LC_ALL`, `LC_TIME`, `LANG` in that order.
///
/// An empty variable counts as unset.
pub fn locale_from_env(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .find_map(|key| lookup(key).filter(|value| !value.is_empty()))
        .map(|name| parse_locale(&name))
        .unwrap_or(Locale::en_US)
}

/// Parse a POSIX locale name such as `ja_JP.UTF-8` or `de_DE@euro`.
///
/// Unknown names fall back to `en_US`.
pub fn parse_locale(name: &str) -> Locale {
    name.split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Locale from an explicit name, or from the environment when absent.
pub fn resolve_locale(name: Option<&str>) -> Locale {
    match name {
        Some(name) => parse_locale(name),
        None => get_system_locale(),
    }
}

/// Get 2-character weekday abbreviation for a locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    // 2000-01-03 is a Monday
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap_or_default();
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + chrono::Duration::days(offset);
    let day_name = date.format_localized("%a", locale).to_string();
    day_name.chars().take(2).collect()
}

/// Render one week as seven tab-terminated cells.
///
/// In-month days are zero-padded to two digits; other cells are empty.
pub fn format_week(week: &Week) -> String {
    let mut line = String::with_capacity(week.len() * 3);
    for cell in week {
        if let Some(day) = cell {
            let _ = write!(line, "{:02}", day);
        }
        line.push('\t');
    }
    line
}

/// Formats one resolved date for display.
#[derive(Debug, Clone)]
pub struct CalendarFormatter {
    datetime: NaiveDateTime,
    week_start: WeekStart,
    locale: Locale,
}

impl CalendarFormatter {
    /// Create a formatter that uses the process-wide first weekday.
    pub fn new(datetime: NaiveDateTime, locale: Locale) -> Self {
        Self::with_week_start(datetime, first_weekday(), locale)
    }

    pub fn with_week_start(datetime: NaiveDateTime, week_start: WeekStart, locale: Locale) -> Self {
        CalendarFormatter {
            datetime,
            week_start,
            locale,
        }
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Apply a strftime-style format to the date.
    ///
    /// The format is not validated up front; a specifier chrono rejects
    /// (including `%z`/`%Z`, since the date carries no offset) yields
    /// [`RenderError::DateFormat`].
    pub fn format_datetime(&self, format: &str) -> Result<String, RenderError> {
        let items = StrftimeItems::new_with_locale(format, self.locale);
        let delayed = DelayedFormat::new_with_locale(
            Some(self.datetime.date()),
            Some(self.datetime.time()),
            items,
            self.locale,
        );

        let mut out = String::new();
        write!(out, "{}", delayed).map_err(|_| RenderError::DateFormat {
            format: format.to_string(),
        })?;
        Ok(out)
    }

    /// Tab-joined weekday abbreviations starting from the week start.
    pub fn week_header(&self) -> String {
        weekday_order(self.week_start)
            .iter()
            .map(|&weekday| get_weekday_short_name(weekday, self.locale))
            .collect::<Vec<_>>()
            .join("\t")
    }

    /// One line per calendar week of the month containing the date.
    pub fn week_rows(&self) -> Result<Vec<String>, RenderError> {
        let weeks = month_matrix(self.datetime.year(), self.datetime.month(), self.week_start)?;
        Ok(weeks.iter().map(format_week).collect())
    }
}
