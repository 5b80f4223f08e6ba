//! Conversions from raw SQLite values to domain types. A failure here means
//! the stored data no longer matches what this crate writes.

use crate::{DbError, Result};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Corrupt {
        message: format!("invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(secs: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Corrupt {
        message: format!("invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_date(value: &str, column: &str) -> Result<NaiveDate> {
    NaiveDate::from_str(value).map_err(|e| DbError::Corrupt {
        message: format!("invalid date in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse a stored enum-ish string ("admin", "pending", ...) via FromStr.
#[track_caller]
pub(crate) fn parse_variant<T>(value: &str, column: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(value).map_err(|e| DbError::Corrupt {
        message: format!("invalid value in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
