//! Command-line interface for inspection-history.
//!
//! This module provides the CLI structure for the `insphist` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, EquipmentCommand, HistoryCommand, MonthsCommand, RecordsCommand,
    StatsCommand, StatusArg,
};

/// insphist - Browse equipment inspection history
///
/// Shows inspections for one month at a time, grouped by day with the most
/// recent day first.
#[derive(Debug, Parser)]
#[command(name = "insphist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the inspected equipment
    Equipment(EquipmentCommand),

    /// Show inspections for a month, grouped by day
    History(HistoryCommand),

    /// List all inspection records
    Records(RecordsCommand),

    /// List months that have inspections
    Months(MonthsCommand),

    /// Show dataset statistics
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::YearMonth;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Stats(StatsCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "insphist");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        use crate::logging::Verbosity;

        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_history_with_month() {
        let cli = Cli::try_parse_from(["insphist", "history", "2024-12"]).unwrap();
        match cli.command {
            Command::History(cmd) => {
                assert_eq!(cmd.month, Some(YearMonth::new(2024, 12).unwrap()));
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_history_defaults_month() {
        let cli = Cli::try_parse_from(["insphist", "history", "--json"]).unwrap();
        match cli.command {
            Command::History(cmd) => {
                assert!(cmd.month.is_none());
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_history_rejects_bad_month() {
        assert!(Cli::try_parse_from(["insphist", "history", "2025-13"]).is_err());
        assert!(Cli::try_parse_from(["insphist", "history", "January"]).is_err());
    }

    #[test]
    fn test_parse_records_with_status() {
        let cli = Cli::try_parse_from(["insphist", "records", "--status", "failed"]).unwrap();
        match cli.command {
            Command::Records(cmd) => {
                assert_eq!(cmd.status, Some(StatusArg::Failed));
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_flag_on_listing_commands() {
        let cli = Cli::try_parse_from(["insphist", "history", "2025-01", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::History(HistoryCommand { json: true, .. })));

        let cli = Cli::try_parse_from(["insphist", "records", "-s", "pending", "-j"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Records(RecordsCommand {
                status: Some(StatusArg::Pending),
                json: true
            })
        ));

        assert!(Cli::try_parse_from(["insphist", "history", "--format", "json"]).is_err());
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["insphist", "config", "validate", "-f", "/tmp/c.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_global_flags() {
        let cli =
            Cli::try_parse_from(["insphist", "-c", "/custom/config.toml", "-v", "equipment"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Command::Equipment(_)));
    }
}
