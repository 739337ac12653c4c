//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::view::{Filter, SortOrder};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Which prospects to show (defaults to the configured filter)
    #[arg(short, long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Sort order (defaults to the configured order)
    #[arg(short, long, value_enum)]
    pub sort: Option<SortArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Scan command arguments.
#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Scanned text: name and email on two lines (read from stdin if omitted)
    #[arg(conflicts_with = "clipboard")]
    pub payload: Option<String>,

    /// Read the scanned text from the clipboard
    #[arg(long)]
    pub clipboard: bool,
}

/// Toggle command arguments.
#[derive(Debug, Args)]
pub struct ToggleCommand {
    /// Prospect id, or a unique prefix of it
    pub id: String,
}

/// Remind command arguments.
#[derive(Debug, Args)]
pub struct RemindCommand {
    /// Prospect id, or a unique prefix of it
    pub id: String,

    /// Seconds until the reminder fires (defaults to the configured delay)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub delay_secs: Option<u64>,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Me command arguments.
#[derive(Debug, Args)]
pub struct MeCommand {
    /// Output the card fields as JSON instead of the scan text
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

/// Filter argument for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Everyone
    All,
    /// Contacted prospects only
    Contacted,
    /// Uncontacted prospects only
    Uncontacted,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Contacted => Self::Contacted,
            FilterArg::Uncontacted => Self::Uncontacted,
        }
    }
}

/// Sort argument for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Insertion order
    None,
    /// Name, A to Z
    NameAsc,
    /// Name, Z to A
    NameDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => Self::None,
            SortArg::NameAsc => Self::NameAscending,
            SortArg::NameDesc => Self::NameDescending,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
