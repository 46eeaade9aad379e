//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::inspection::InspectionStatus;
use crate::query::YearMonth;

/// Equipment command arguments.
#[derive(Debug, Args)]
pub struct EquipmentCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// History command arguments.
#[derive(Debug, Args)]
pub struct HistoryCommand {
    /// Month to show, as YYYY-MM (defaults to the month of the newest inspection)
    #[arg(value_parser = parse_month)]
    pub month: Option<YearMonth>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Records command arguments.
#[derive(Debug, Args)]
pub struct RecordsCommand {
    /// Only show records with this status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Months command arguments.
#[derive(Debug, Args)]
pub struct MonthsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn parse_month(value: &str) -> Result<YearMonth, String> {
    value.parse().map_err(|e: crate::Error| e.to_string())
}

/// Inspection status argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Satisfactory inspections
    Satisfactory,
    /// Pending inspections
    Pending,
    /// Failed inspections
    Failed,
}

impl From<StatusArg> for InspectionStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Satisfactory => Self::Satisfactory,
            StatusArg::Pending => Self::Pending,
            StatusArg::Failed => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_arg_conversion() {
        assert_eq!(
            InspectionStatus::from(StatusArg::Satisfactory),
            InspectionStatus::Satisfactory
        );
        assert_eq!(
            InspectionStatus::from(StatusArg::Pending),
            InspectionStatus::Pending
        );
        assert_eq!(
            InspectionStatus::from(StatusArg::Failed),
            InspectionStatus::Failed
        );
    }

    #[test]
    fn test_history_command_debug() {
        let cmd = HistoryCommand {
            month: Some(YearMonth::new(2025, 1).unwrap()),
            json: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("month"));
        assert!(debug_str.contains("json: true"));
    }
}
