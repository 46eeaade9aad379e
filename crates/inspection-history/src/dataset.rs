//! Inspection record store.
//!
//! An [`InspectionDataset`] is an immutable value holding one equipment
//! descriptor and its inspection history. It is built once, from the embedded
//! sample or a JSON document, and handed to whatever needs to query it.
//!
//! Malformed records are rejected when the dataset is built, so every query
//! downstream works on valid dates and statuses.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DataConfig;
use crate::error::{Error, Result};
use crate::inspection::{EquipmentDescriptor, InspectionRecord, InspectionStatus};
use crate::query::YearMonth;
use crate::sections::{
    build_sections_with_format, InspectionSection, DEFAULT_SECTION_TITLE_FORMAT,
};

/// The bundled sample dataset.
pub const SAMPLE_DATASET: &str = include_str!("../data/sample.json");

/// Date format used by dataset documents.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dataset document as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawDataset {
    equipment: EquipmentDescriptor,
    #[serde(default)]
    inspections: Vec<RawInspection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInspection {
    date: String,
    task_name: String,
    #[serde(default)]
    task_description: String,
    status: String,
}

impl RawInspection {
    fn validate(self, index: usize) -> Result<InspectionRecord> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|source| {
            Error::InvalidDate {
                index,
                value: self.date.clone(),
                source,
            }
        })?;
        let status = self
            .status
            .parse::<InspectionStatus>()
            .map_err(|_| Error::InvalidStatus {
                index,
                value: self.status.clone(),
            })?;

        Ok(InspectionRecord {
            date,
            task_name: self.task_name,
            task_description: self.task_description,
            status,
        })
    }
}

/// An immutable inspection history for one piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionDataset {
    equipment: EquipmentDescriptor,
    #[serde(rename = "inspections")]
    records: Vec<InspectionRecord>,
}

impl InspectionDataset {
    /// Create a dataset from already-validated parts.
    #[must_use]
    pub fn new(equipment: EquipmentDescriptor, records: Vec<InspectionRecord>) -> Self {
        Self { equipment, records }
    }

    /// The bundled sample dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails validation.
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_DATASET)
    }

    /// Parse and validate a dataset document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON, or [`Error::InvalidDate`] /
    /// [`Error::InvalidStatus`] naming the first bad record.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let records = raw
            .inspections
            .into_iter()
            .enumerate()
            .map(|(index, inspection)| inspection.validate(index))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            equipment = %raw.equipment.id,
            records = records.len(),
            "Parsed inspection dataset"
        );
        Ok(Self::new(raw.equipment, records))
    }

    /// Load and validate a dataset document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatasetRead`] if the file cannot be read, or any error
    /// from [`InspectionDataset::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_json_str(&json)?;
        info!(
            "Loaded {} inspections from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Build the dataset named by configuration, or the sample if none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dataset cannot be loaded.
    pub fn from_config(config: &DataConfig) -> Result<Self> {
        match &config.dataset_path {
            Some(path) => Self::load(path),
            None => {
                debug!("No dataset configured, using bundled sample");
                Self::sample()
            }
        }
    }

    /// The equipment these inspections belong to.
    #[must_use]
    pub fn equipment(&self) -> &EquipmentDescriptor {
        &self.equipment
    }

    /// Every record, in source order.
    #[must_use]
    pub fn records(&self) -> &[InspectionRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with the given status, in source order.
    pub fn with_status(
        &self,
        status: InspectionStatus,
    ) -> impl Iterator<Item = &InspectionRecord> + '_ {
        self.records.iter().filter(move |r| r.status == status)
    }

    /// Day-grouped sections for one month, newest day first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMonth`] if `month` is outside `1..=12`.
    pub fn sections_for_month(&self, year: i32, month: u32) -> Result<Vec<InspectionSection>> {
        let month = YearMonth::new(year, month)?;
        Ok(self.sections_for(month, DEFAULT_SECTION_TITLE_FORMAT))
    }

    /// Day-grouped sections for a validated month with a custom title format.
    #[must_use]
    pub fn sections_for(&self, month: YearMonth, title_format: &str) -> Vec<InspectionSection> {
        let selected = crate::query::sort_descending_by_date(month.filter(&self.records));
        build_sections_with_format(selected, title_format)
    }

    /// The month holding the newest record, or `None` for an empty dataset.
    #[must_use]
    pub fn latest_month(&self) -> Option<YearMonth> {
        self.records.iter().map(|r| r.date).max().map(YearMonth::of)
    }

    /// Every month holding at least one record, newest first.
    #[must_use]
    pub fn months(&self) -> Vec<MonthSummary> {
        let mut counts: BTreeMap<YearMonth, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(YearMonth::of(record.date)).or_default() += 1;
        }

        counts
            .into_iter()
            .rev()
            .map(|(month, records)| MonthSummary { month, records })
            .collect()
    }

    /// Summary statistics.
    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        let mut stats = DatasetStats {
            total_records: self.records.len(),
            ..DatasetStats::default()
        };

        for record in &self.records {
            match record.status {
                InspectionStatus::Satisfactory => stats.satisfactory += 1,
                InspectionStatus::Pending => stats.pending += 1,
                InspectionStatus::Failed => stats.failed += 1,
            }
        }
        stats.oldest = self.records.iter().map(|r| r.date).min();
        stats.newest = self.records.iter().map(|r| r.date).max();
        stats
    }
}

/// Number of records in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    /// The month.
    pub month: YearMonth,
    /// Records dated within it.
    pub records: usize,
}

/// Statistics about a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Total number of records.
    pub total_records: usize,
    /// Records with status `Satisfactory`.
    pub satisfactory: usize,
    /// Records with status `Pending`.
    pub pending: usize,
    /// Records with status `Failed`.
    pub failed: usize,
    /// Date of the oldest record.
    pub oldest: Option<NaiveDate>,
    /// Date of the newest record.
    pub newest: Option<NaiveDate>,
}

impl DatasetStats {
    /// Number of records with the given status.
    #[must_use]
    pub fn count(&self, status: InspectionStatus) -> usize {
        match status {
            InspectionStatus::Satisfactory => self.satisfactory,
            InspectionStatus::Pending => self.pending,
            InspectionStatus::Failed => self.failed,
        }
    }
}
