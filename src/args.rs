//! Command-line argument parsing using clap.
//!
//! The launcher passes its prompt text as the query: `alc [month [year]]`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::types::{Config, WeekStart};

#[derive(Parser, Debug)]
#[command(name = "alc")]
#[command(about = "Prints a month calendar as launcher script filter XML", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Query: empty, a month (1-12), or a month and year (0-9999).
    ///
    /// Words starting with `-` belong to the query unless they name an option;
    /// put the query after `--` to pass it through untouched.
    #[arg(
        value_name = "QUERY",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub query: Vec<String>,

    /// First day of the week (0 = Monday .. 6 = Sunday).
    #[arg(
        short = 'f',
        long,
        value_name = "day",
        value_parser = clap::value_parser!(u8).range(0..=6),
        help_heading = "Calendar options"
    )]
    pub first_week_day: Option<u8>,

    /// Format of the first item when no month is given.
    #[arg(long = "default-format", value_name = "fmt", help_heading = "Calendar options")]
    pub default_datetime_format: Option<String>,

    /// Format of the first item when a month is given.
    #[arg(long = "specified-format", value_name = "fmt", help_heading = "Calendar options")]
    pub specified_datetime_format: Option<String>,

    /// Locale for weekday names (e.g. en_US, ja_JP).
    #[arg(long, value_name = "locale", help_heading = "Calendar options")]
    pub locale: Option<String>,

    /// Configuration file (default: $ALC_CONFIG or the user config directory).
    #[arg(short = 'c', long, value_name = "path", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,

    /// Disable logging.
    #[arg(short = 'q', long, conflicts_with = "verbose", help_heading = "Output options")]
    pub quiet: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Launcher invocation:
  alc -- \"{query}\"

Examples:
  alc                Current month, headed by the current date and time
  alc 2              February of the current year
  alc 2 2026         February 2026
  alc -f 6 7 2014    July 2014, weeks starting on Sunday";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Query words joined by single spaces, if any were given.
    pub fn query(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.join(" "))
    }

    /// Overlay command-line values on a base configuration.
    pub fn apply(&self, base: Config) -> Config {
        let mut config = base;
        if let Some(query) = self.query() {
            config.query = query;
        }
        if let Some(day) = self.first_week_day {
            // clap already restricted the value to 0-6
            config.first_week_day = WeekStart::try_from(day).unwrap_or_default();
        }
        if let Some(format) = &self.default_datetime_format {
            config.default_datetime_format = format.clone();
        }
        if let Some(format) = &self.specified_datetime_format {
            config.specified_datetime_format = format.clone();
        }
        if let Some(locale) = &self.locale {
            config.locale = Some(locale.clone());
        }
        config
    }

    /// Log level selected by `-v`/`-q`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// Get the current local time, respecting the ALC_TEST_TIME environment variable for testing.
///
/// Accepts `%Y-%m-%dT%H:%M:%S` or `%Y-%m-%d` (midnight).
pub fn get_current_datetime() -> chrono::NaiveDateTime {
    if let Ok(test_time) = std::env::var("ALC_TEST_TIME") {
        if let Ok(datetime) =
            chrono::NaiveDateTime::parse_from_str(&test_time, "%Y-%m-%dT%H:%M:%S")
        {
            return datetime;
        }
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
            && let Some(datetime) = date.and_hms_opt(0, 0, 0)
        {
            return datetime;
        }
        log::warn!("ignoring malformed ALC_TEST_TIME '{}'", test_time);
    }
    chrono::Local::now().naive_local()
}
