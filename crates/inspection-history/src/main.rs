//! `insphist` - CLI for inspection-history
//!
//! This binary loads an inspection dataset and prints the equipment, monthly
//! day-grouped history, records and statistics.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use inspection_history::cli::{
    Cli, Command, ConfigCommand, HistoryCommand, MonthsCommand, RecordsCommand,
};
use inspection_history::{init_logging, Config, InspectionDataset, InspectionStatus};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // `config` subcommands read the file themselves so they still run when it is broken
    let path = cli.config;
    match cli.command {
        Command::Equipment(cmd) => {
            let config = load_config(path)?;
            handle_equipment(&load_dataset(&config)?, cmd.json)
        }
        Command::History(cmd) => {
            let config = load_config(path)?;
            handle_history(&config, &load_dataset(&config)?, &cmd)
        }
        Command::Records(cmd) => {
            let config = load_config(path)?;
            handle_records(&load_dataset(&config)?, &cmd)
        }
        Command::Months(cmd) => {
            let config = load_config(path)?;
            handle_months(&config, &load_dataset(&config)?, &cmd)
        }
        Command::Stats(cmd) => {
            let config = load_config(path)?;
            handle_stats(&load_dataset(&config)?, cmd.json)
        }
        Command::Config(cmd) => handle_config(path, cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    Config::load_from(path).context("failed to load configuration")
}

fn load_dataset(config: &Config) -> Result<InspectionDataset> {
    InspectionDataset::from_config(&config.data).context("failed to load inspection dataset")
}

fn handle_equipment(dataset: &InspectionDataset, json: bool) -> Result<()> {
    let equipment = dataset.equipment();
    if json {
        println!("{}", serde_json::to_string_pretty(equipment)?);
    } else {
        println!("{}", equipment.name);
        println!("  ID  : {}", equipment.id);
        println!("  Tag : {}", equipment.tag);
    }
    Ok(())
}

fn handle_history(
    config: &Config,
    dataset: &InspectionDataset,
    cmd: &HistoryCommand,
) -> Result<()> {
    let Some(month) = cmd.month.or_else(|| dataset.latest_month()) else {
        println!("No inspections recorded.");
        return Ok(());
    };

    let sections = dataset.sections_for(month, &config.display.section_title_format);

    if cmd.json {
        let output = serde_json::json!({
            "equipment": dataset.equipment(),
            "month": month,
            "previous": month.previous(),
            "next": month.next(),
            "sections": sections,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let label_format = &config.display.month_label_format;
    println!("Inspections in {}", month.label(label_format));
    println!("{}", "=".repeat(40));

    if sections.is_empty() {
        println!();
        println!("No inspections this month.");
    }

    for section in &sections {
        println!();
        println!("{}", section.title);
        for record in &section.records {
            println!(
                "  {:<12}  {}  {}",
                record.status, record.task_name, record.task_description
            );
        }
    }

    println!();
    let previous = month.previous().map(|m| m.label(label_format));
    let next = month.next().map(|m| m.label(label_format));
    println!(
        "Previous: {}    Next: {}",
        previous.as_deref().unwrap_or("-"),
        next.as_deref().unwrap_or("-")
    );
    Ok(())
}

fn handle_records(dataset: &InspectionDataset, cmd: &RecordsCommand) -> Result<()> {
    let records: Vec<_> = match cmd.status {
        Some(status) => dataset.with_status(InspectionStatus::from(status)).collect(),
        None => dataset.records().iter().collect(),
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in &records {
        println!(
            "{}  {:<12}  {}  {}",
            record.date, record.status, record.task_name, record.task_description
        );
    }
    println!();
    println!("{} record(s)", records.len());
    Ok(())
}

fn handle_months(
    config: &Config,
    dataset: &InspectionDataset,
    cmd: &MonthsCommand,
) -> Result<()> {
    let months = dataset.months();
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&months)?);
    } else {
        for summary in &months {
            println!(
                "{}  {:<16} {:>4}",
                summary.month,
                summary.month.label(&config.display.month_label_format),
                summary.records
            );
        }
    }
    Ok(())
}

fn handle_stats(dataset: &InspectionDataset, json: bool) -> Result<()> {
    let stats = dataset.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let date_or_dash =
        |d: Option<chrono::NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());

    println!("Inspection statistics");
    println!("---------------------");
    println!("Equipment:     {}", dataset.equipment().name);
    println!("Total:         {}", stats.total_records);
    for status in InspectionStatus::ALL {
        println!("{:<14} {}", format!("{status}:"), stats.count(status));
    }
    println!("Oldest:        {}", date_or_dash(stats.oldest));
    println!("Newest:        {}", date_or_dash(stats.newest));
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Data]");
                match &config.data.dataset_path {
                    Some(path) => println!("  Dataset path:         {}", path.display()),
                    None => println!("  Dataset path:         (bundled sample)"),
                }
                println!();
                println!("[Display]");
                println!(
                    "  Section title format: {}",
                    config.display.section_title_format
                );
                println!(
                    "  Month label format:   {}",
                    config.display.month_label_format
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            validate_config_file(path)?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

fn validate_config_file(path: PathBuf) -> Result<Config> {
    let shown = path.display().to_string();
    Config::load_from(Some(path)).with_context(|| format!("configuration at {shown} is invalid"))
}
