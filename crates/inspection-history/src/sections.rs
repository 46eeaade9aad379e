//! Day-grouped sections of inspection records.
//!
//! Sections are derived on every query and never stored. Each one holds the
//! records sharing a calendar day, and sections are ordered newest day first.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::inspection::InspectionRecord;
use crate::query::{filter_by_month, render_date, sort_descending_by_date};

/// Default format for section titles, e.g. "Fri, Jan 24, 2025".
pub const DEFAULT_SECTION_TITLE_FORMAT: &str = "%a, %b %-d, %Y";

/// Records sharing one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionSection {
    /// The day every member record shares. Serializes as `YYYY-MM-DD`.
    pub date_key: NaiveDate,
    /// Display label for the day.
    pub title: String,
    /// Member records, in the order they were encountered.
    pub records: Vec<InspectionRecord>,
}

impl InspectionSection {
    /// The canonical `YYYY-MM-DD` key.
    #[must_use]
    pub fn key(&self) -> String {
        self.date_key.format("%Y-%m-%d").to_string()
    }

    /// Number of records in this section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the section has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Group records by day, newest day first, using the default title format.
#[must_use]
pub fn build_sections(records: Vec<InspectionRecord>) -> Vec<InspectionSection> {
    build_sections_with_format(records, DEFAULT_SECTION_TITLE_FORMAT)
}

/// Group records by day, newest day first.
///
/// Every input record lands in exactly one section. Within a section records
/// keep their input order.
#[must_use]
pub fn build_sections_with_format(
    records: Vec<InspectionRecord>,
    title_format: &str,
) -> Vec<InspectionSection> {
    let mut by_day: BTreeMap<NaiveDate, Vec<InspectionRecord>> = BTreeMap::new();
    for record in records {
        by_day.entry(record.date).or_default().push(record);
    }

    let sections: Vec<InspectionSection> = by_day
        .into_iter()
        .rev()
        .map(|(date_key, records)| InspectionSection {
            date_key,
            title: render_date(date_key, title_format),
            records,
        })
        .collect();

    debug!(sections = sections.len(), "Built inspection sections");
    sections
}

/// Day-grouped sections for one month, using the default title format.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMonth`] if `month` is outside `1..=12`.
pub fn sections_for_month(
    records: &[InspectionRecord],
    year: i32,
    month: u32,
) -> Result<Vec<InspectionSection>> {
    sections_for_month_with_format(records, year, month, DEFAULT_SECTION_TITLE_FORMAT)
}

/// Day-grouped sections for one month.
///
/// Filters to the month, sorts newest first, then groups by day.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMonth`] if `month` is outside `1..=12`.
pub fn sections_for_month_with_format(
    records: &[InspectionRecord],
    year: i32,
    month: u32,
    title_format: &str,
) -> Result<Vec<InspectionSection>> {
    let selected = filter_by_month(records, year, month)?;
    Ok(build_sections_with_format(
        sort_descending_by_date(selected),
        title_format,
    ))
}
