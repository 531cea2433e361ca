//! Calendar command: query parsing, date resolution and rendering.
//!
//! The pipeline is `parse -> resolve -> render`. Any [`CommandError`] on the
//! way is replaced by a document holding the single usage item.

use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::debug;

use crate::error::{CommandError, ItemError, QueryError, RenderError};
use crate::formatter::{CalendarFormatter, resolve_locale, set_first_weekday};
use crate::script_filter::ScriptFilter;
use crate::types::{Config, MONTH_RANGE, ParsedQuery, USAGE, YEAR_RANGE};

/// Parse a query into an optional month and year.
///
/// Fields are separated by single spaces after trimming, so `"1  2014"`
/// has three fields and is rejected.
pub fn parse_query(query: &str) -> Result<ParsedQuery, QueryError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok(ParsedQuery::Empty);
    }

    let tokens: Vec<&str> = trimmed.split(' ').collect();
    match tokens.as_slice() {
        [month] => Ok(ParsedQuery::MonthOnly {
            month: parse_field("month", month, MONTH_RANGE)? as u32,
        }),
        [month, year] => Ok(ParsedQuery::MonthAndYear {
            month: parse_field("month", month, MONTH_RANGE)? as u32,
            year: parse_field("year", year, YEAR_RANGE)? as i32,
        }),
        _ => Err(QueryError::FieldCount {
            count: tokens.len(),
        }),
    }
}

/// Parse an integer field and check it against its range.
fn parse_field(
    field: &'static str,
    token: &str,
    range: RangeInclusive<i64>,
) -> Result<i64, QueryError> {
    let out_of_range = || QueryError::OutOfRange {
        field,
        token: token.to_string(),
        min: *range.start(),
        max: *range.end(),
    };

    let value = token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => QueryError::NotInteger {
            field,
            token: token.to_string(),
        },
    })?;

    if !range.contains(&value) {
        return Err(out_of_range());
    }
    Ok(value)
}

/// Date to render and the format for its first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDate {
    pub datetime: NaiveDateTime,
    pub format: String,
}

/// Resolve a parsed query against the current time.
///
/// A blank query shows `now`; a month (with or without year) shows midnight
/// on the first of that month, defaulting the year to the current one.
pub fn resolve(
    parsed: ParsedQuery,
    config: &Config,
    now: NaiveDateTime,
) -> Result<ResolvedDate, RenderError> {
    let (year, month) = match parsed {
        ParsedQuery::Empty => {
            return Ok(ResolvedDate {
                datetime: now,
                format: config.default_datetime_format.clone(),
            });
        }
        ParsedQuery::MonthOnly { month } => (now.year(), month),
        ParsedQuery::MonthAndYear { month, year } => (year, month),
    };

    let datetime = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(RenderError::InvalidDate { year, month })?;

    Ok(ResolvedDate {
        datetime,
        format: config.specified_datetime_format.clone(),
    })
}

/// Document holding only the usage item.
pub fn usage_document() -> Result<ScriptFilter, ItemError> {
    let mut sf = ScriptFilter::new();
    sf.append_title(USAGE)?;
    Ok(sf)
}

/// Builds the calendar item list for one configuration.
///
/// ```ignore
/// let config = Config { query: "1 2013".into(), ..Config::default() };
/// println!("{}", CalendarCommand::new(config).execute_at(now)?);
/// ```
#[derive(Debug, Clone)]
pub struct CalendarCommand {
    config: Config,
}

impl CalendarCommand {
    pub fn new(config: Config) -> Self {
        CalendarCommand { config }
    }

    /// Run against a fixed `now` and return the serialized document.
    ///
    /// Parse, range and formatting failures produce the usage document.
    /// Only an empty computed title is reported as an error.
    pub fn execute_at(&self, now: NaiveDateTime) -> Result<String, ItemError> {
        let sf = match self.render(now) {
            Ok(lines) => {
                let mut sf = ScriptFilter::new();
                for line in &lines {
                    sf.append_title(line)?;
                }
                sf
            }
            Err(e) => {
                debug!("query '{}' rejected: {}", self.config.query, e);
                usage_document()?
            }
        };
        Ok(sf.serialize())
    }

    /// Produce the display lines: formatted date, weekday header, week rows.
    pub fn render(&self, now: NaiveDateTime) -> Result<Vec<String>, CommandError> {
        let parsed = parse_query(&self.config.query)?;
        debug!("parsed query '{}' as {:?}", self.config.query, parsed);

        let resolved = resolve(parsed, &self.config, now)?;
        debug!("resolved {} with format {:?}", resolved.datetime, resolved.format);

        set_first_weekday(self.config.first_week_day);
        let locale = resolve_locale(self.config.locale.as_deref());
        let formatter =
            CalendarFormatter::with_week_start(resolved.datetime, self.config.first_week_day, locale);

        let mut lines = Vec::with_capacity(8);
        lines.push(formatter.format_datetime(&resolved.format)?);
        lines.push(formatter.week_header());
        lines.extend(formatter.week_rows()?);
        Ok(lines)
    }
}
