//! Error types for query parsing, rendering, output items and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a query failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// Wrong number of fields or a field that is not an integer.
    Syntax,
    /// An integer outside the accepted range.
    Range,
}

/// A query that does not name a valid month and year.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("expected at most 2 fields, got {count}")]
    FieldCount { count: usize },

    #[error("invalid {field}: '{token}' is not an integer")]
    NotInteger { field: &'static str, token: String },

    #[error("invalid {field}: '{token}' (must be {min}-{max})")]
    OutOfRange {
        field: &'static str,
        token: String,
        min: i64,
        max: i64,
    },
}

impl QueryError {
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::FieldCount { .. } | QueryError::NotInteger { .. } => QueryErrorKind::Syntax,
            QueryError::OutOfRange { .. } => QueryErrorKind::Range,
        }
    }
}

/// Failure while turning a resolved date into display lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid date: {year}-{month:02}")]
    InvalidDate { year: i32, month: u32 },

    #[error("cannot format date with '{format}'")]
    DateFormat { format: String },
}

/// Any failure of the calendar pipeline that turns into the usage item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Output item contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item title is required")]
    InvalidTitle,
}

/// Configuration file and value errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid first_week_day: {0} (must be 0-6)")]
    InvalidFirstWeekDay(u8),

    #[error("could not determine config directory")]
    NoConfigDir,
}
