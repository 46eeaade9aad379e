//! Core inspection types.
//!
//! This module defines the records that make up an inspection history and the
//! descriptor of the equipment they belong to.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Outcome of a single inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionStatus {
    /// The inspection passed.
    Satisfactory,
    /// The inspection is awaiting completion or review.
    Pending,
    /// The inspection found a fault.
    Failed,
}

impl InspectionStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Satisfactory, Self::Pending, Self::Failed];

    /// The canonical name of this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Satisfactory => "Satisfactory",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for InspectionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Satisfactory" => Ok(Self::Satisfactory),
            "Pending" => Ok(Self::Pending),
            "Failed" => Ok(Self::Failed),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// A single logged inspection.
///
/// Dates carry no time of day; two records on the same calendar day are
/// indistinguishable by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    /// Day the inspection took place.
    pub date: NaiveDate,
    /// Short name of the inspection task.
    pub task_name: String,
    /// Longer description of the task.
    pub task_description: String,
    /// Outcome.
    pub status: InspectionStatus,
}

impl InspectionRecord {
    /// Create a new inspection record.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        task_name: impl Into<String>,
        task_description: impl Into<String>,
        status: InspectionStatus,
    ) -> Self {
        Self {
            date,
            task_name: task_name.into(),
            task_description: task_description.into(),
            status,
        }
    }
}

/// Static metadata identifying the inspected equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDescriptor {
    /// Display name, e.g. "Fire Pump".
    pub name: String,
    /// Equipment identifier.
    pub id: String,
    /// Asset tag.
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(InspectionStatus::Satisfactory.to_string(), "Satisfactory");
        assert_eq!(InspectionStatus::Pending.to_string(), "Pending");
        assert_eq!(InspectionStatus::Failed.to_string(), "Failed");
    }

    #[test]
    fn test_status_display_honours_width() {
        assert_eq!(format!("{:<8}|", InspectionStatus::Failed), "Failed  |");
    }

    #[test]
    fn test_status_from_str() {
        for status in InspectionStatus::ALL {
            assert_eq!(status.as_str().parse::<InspectionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        let err = "satisfactory".parse::<InspectionStatus>().unwrap_err();
        assert!(matches!(err, Error::UnknownStatus(ref s) if s == "satisfactory"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = InspectionRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, 24).unwrap(),
            "Pump check",
            "Check seals",
            InspectionStatus::Pending,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2025-01-24");
        assert_eq!(json["taskName"], "Pump check");
        assert_eq!(json["taskDescription"], "Check seals");
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn test_equipment_serialization() {
        let equipment = EquipmentDescriptor {
            name: "Fire Pump".to_string(),
            id: "TECFI00009".to_string(),
            tag: "FIR00009".to_string(),
        };

        let json = serde_json::to_string(&equipment).unwrap();
        let back: EquipmentDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(equipment, back);
    }
}
