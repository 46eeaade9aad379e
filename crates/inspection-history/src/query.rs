//! Month selection for inspection records.
//!
//! This module provides [`YearMonth`], a validated calendar month, and the
//! month filter that selects the records falling inside one.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::inspection::InspectionRecord;

/// Default format for month labels, e.g. "January 2025".
pub const DEFAULT_MONTH_LABEL_FORMAT: &str = "%B %Y";

/// A validated calendar month.
///
/// Ordering follows the calendar: earlier months compare less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Create a year-month, rejecting months outside `1..=12`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMonth`] if `month` is out of range, or
    /// [`Error::YearOutOfRange`] if the year is outside the supported calendar.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { year, month });
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(Error::YearOutOfRange { year })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The Gregorian year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month, 1-indexed.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The month before this one, if representable.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    /// The month after this one, if representable.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    /// Check whether `date` falls within this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Render a display label using a `chrono` format string.
    #[must_use]
    pub fn label(&self, format: &str) -> String {
        render_date(self.first_day, format)
    }

    /// Select the records dated within this month, keeping input order.
    #[must_use]
    pub fn filter(&self, records: &[InspectionRecord]) -> Vec<InspectionRecord> {
        let selected: Vec<InspectionRecord> = records
            .iter()
            .filter(|record| self.contains(record.date))
            .cloned()
            .collect();

        debug!(
            month = %self,
            total = records.len(),
            selected = selected.len(),
            "Filtered inspections by month"
        );
        selected
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || Error::MonthParse {
            value: s.to_string(),
        };

        let (year, month) = s.trim().split_once('-').ok_or_else(parse_err)?;
        let year: i32 = year.parse().map_err(|_| parse_err())?;
        let month: u32 = month.parse().map_err(|_| parse_err())?;
        Self::new(year, month)
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Select the records dated within the given year and month.
///
/// Records keep their input order. A month with no records yields an empty
/// vector.
///
/// # Errors
///
/// Returns [`Error::InvalidMonth`] if `month` is outside `1..=12`.
pub fn filter_by_month(
    records: &[InspectionRecord],
    year: i32,
    month: u32,
) -> Result<Vec<InspectionRecord>> {
    let month = YearMonth::new(year, month)?;
    Ok(month.filter(records))
}

/// Sort records newest first.
///
/// The sort is stable, so records sharing a date keep their relative order.
#[must_use]
pub fn sort_descending_by_date(mut records: Vec<InspectionRecord>) -> Vec<InspectionRecord> {
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Format a date, or `None` if `format` is invalid or needs fields a date
/// does not carry (times, offsets).
pub(crate) fn try_render_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Format a date, falling back to ISO form if the format string is unusable.
pub(crate) fn render_date(date: NaiveDate, format: &str) -> String {
    try_render_date(date, format).unwrap_or_else(|| {
        trace!(format, "Unusable date format, falling back to ISO");
        date.format("%Y-%m-%d").to_string()
    })
}
