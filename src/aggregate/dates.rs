//! Death date parsing and the deaths-over-time series.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

use crate::aggregate::error::{FieldError, require};
use crate::aggregate::fields::is_deceased;
use crate::record::{Field, RecordSet};
use crate::summary::Counts;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parses the calendar date out of a death date string.
///
/// Accepts RFC 3339, the Socrata floating timestamp, plain ISO dates and the
/// `dd/mm/yyyy` forms used by older exports.
#[must_use]
pub fn parse_death_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Deaths per calendar day, oldest first, keyed `YYYY-MM-DD`.
///
/// Only deceased records count; unparseable dates are dropped.
pub fn deaths_over_time(set: &RecordSet) -> Result<Counts, FieldError> {
    require(set, &[Field::DeathDate, Field::Status])?;

    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in set
        .records()
        .iter()
        .filter(|r| is_deceased(r))
        .filter_map(|r| r.death_date.as_deref())
        .filter_map(parse_death_date)
    {
        *by_day.entry(date).or_default() += 1;
    }

    Ok(by_day
        .into_iter()
        .map(|(date, n)| (date.format("%Y-%m-%d").to_string(), n))
        .collect())
}
