//! Command-line interface for hotprospects.
//!
//! This module provides the CLI structure and output rendering for the
//! `prospects` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, FilterArg, ListCommand, MeCommand, OutputFormat, RemindCommand, ScanCommand,
    SortArg, StatusCommand, ToggleCommand,
};

/// prospects - Keep track of the people you meet
///
/// Captures contacts from QR-code scans, lists them by contact status, and
/// reminds you to follow up.
#[derive(Debug, Parser)]
#[command(name = "prospects")]
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
    /// List prospects
    List(ListCommand),

    /// Add a prospect from scanned text
    Scan(ScanCommand),

    /// Mark a prospect contacted or uncontacted
    Toggle(ToggleCommand),

    /// Schedule a reminder to contact a prospect
    Remind(RemindCommand),

    /// Show store status
    Status(StatusCommand),

    /// Print your own card: the text others scan to add you
    Me(MeCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.verbose, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn status_cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Status(StatusCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "prospects");
    }

    #[test]
    fn test_verbosity() {
        use crate::logging::Verbosity;

        assert_eq!(status_cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(status_cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(status_cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(status_cli(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let cli =
            Cli::try_parse_from(["prospects", "list", "-f", "contacted", "-s", "name-desc"])
                .unwrap();
        match cli.command {
            Command::List(cmd) => {
                assert_eq!(cmd.filter, Some(FilterArg::Contacted));
                assert_eq!(cmd.sort, Some(SortArg::NameDesc));
                assert_eq!(cmd.format, OutputFormat::Plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_scan_payload() {
        let cli = Cli::try_parse_from(["prospects", "scan", "Aldi\naldi@test.com"]).unwrap();
        match cli.command {
            Command::Scan(cmd) => {
                assert_eq!(cmd.payload.as_deref(), Some("Aldi\naldi@test.com"));
                assert!(!cmd.clipboard);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_scan_payload_conflicts_with_clipboard() {
        let result = Cli::try_parse_from(["prospects", "scan", "x\ny", "--clipboard"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_toggle() {
        let cli = Cli::try_parse_from(["prospects", "toggle", "6f9619ff"]).unwrap();
        assert!(matches!(cli.command, Command::Toggle(ToggleCommand { ref id }) if id == "6f9619ff"));
    }

    #[test]
    fn test_parse_remind_delay() {
        let cli = Cli::try_parse_from(["prospects", "remind", "6f9619ff", "-d", "60"]).unwrap();
        match cli.command {
            Command::Remind(cmd) => assert_eq!(cmd.delay_secs, Some(60)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_remind_rejects_zero_delay() {
        let result = Cli::try_parse_from(["prospects", "remind", "6f9619ff", "-d", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_me() {
        let cli = Cli::try_parse_from(["prospects", "me"]).unwrap();
        assert!(matches!(cli.command, Command::Me(MeCommand { json: false })));

        let cli = Cli::try_parse_from(["prospects", "me", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Me(MeCommand { json: true })));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["prospects", "-c", "/custom/config.toml", "status"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose_and_quiet() {
        let cli = Cli::try_parse_from(["prospects", "-vv", "status"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["prospects", "-q", "status"]).unwrap();
        assert!(cli.quiet);
    }
}
