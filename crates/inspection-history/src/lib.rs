//! `inspection-history` - Equipment inspection history queries
//!
//! This library holds an immutable inspection dataset for one piece of
//! equipment and answers the questions a history view asks of it: which
//! inspections fall in a given month, and how they group by day.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod inspection;
pub mod logging;
pub mod query;
pub mod sections;

pub use config::Config;
pub use dataset::{DatasetStats, InspectionDataset, MonthSummary};
pub use error::{Error, Result};
pub use inspection::{EquipmentDescriptor, InspectionRecord, InspectionStatus};
pub use logging::init_logging;
pub use query::{filter_by_month, sort_descending_by_date, YearMonth};
pub use sections::{build_sections, sections_for_month, InspectionSection};
