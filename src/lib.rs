//! Month calendar rendered as launcher script filter XML.
//!
//! Features:
//! - Query of an optional month and year (`""`, `"7"`, `"7 2014"`)
//! - Any of the seven weekdays as week start
//! - Locale-aware weekday abbreviations
//! - Usage item instead of an error for malformed queries

pub mod args;
pub mod calendar;
pub mod command;
pub mod config;
pub mod error;
pub mod formatter;
pub mod script_filter;
pub mod types;
