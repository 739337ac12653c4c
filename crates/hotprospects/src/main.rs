//! `prospects` - CLI for hotprospects
//!
//! This binary provides the command-line interface for capturing prospects
//! from scans, listing them, marking them contacted and scheduling reminders.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::time::Duration;

use clap::Parser;
use tracing::debug;

use hotprospects::cli::output::{render_json, render_plain, render_table};
use hotprospects::cli::{
    Cli, Command, ConfigCommand, ListCommand, MeCommand, OutputFormat, RemindCommand,
    ScanCommand, ToggleCommand,
};
use hotprospects::scan::{ClipboardSource, LiteralSource, StdinSource};
use hotprospects::{
    card_payload, handle_scan, init_logging, project, schedule_reminder, Config, Filter,
    ProspectStore, ScanSource, ScheduleOutcome, SortOrder, StoreEvent, TerminalNotifier,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Scan(scan_cmd) => {
            handle_scan_command(&config, &scan_cmd);
            Ok(())
        }
        Command::Toggle(toggle_cmd) => handle_toggle(&config, &toggle_cmd),
        Command::Remind(remind_cmd) => handle_remind(&config, &remind_cmd).await,
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json),
        Command::Me(me_cmd) => handle_me(&config, &me_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn open_store(config: &Config) -> ProspectStore {
    let store = ProspectStore::load(config.data_path());
    debug!(
        "Opened store at {} with {} prospects",
        store.path().display(),
        store.len()
    );
    store
}

fn handle_list(config: &Config, cmd: &ListCommand) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config);
    let filter = cmd.filter.map_or(config.view.default_filter, Filter::from);
    let sort = cmd.sort.map_or(config.view.default_sort, SortOrder::from);
    let shown = project(store.people(), filter, sort);

    match cmd.format {
        OutputFormat::Plain => print!("{}", render_plain(filter.title(), &shown)),
        OutputFormat::Table => print!("{}", render_table(&shown)),
        OutputFormat::Json => println!("{}", render_json(&shown)?),
    }
    Ok(())
}

fn handle_scan_command(config: &Config, cmd: &ScanCommand) {
    let source: Box<dyn ScanSource> = if cmd.clipboard {
        Box::new(ClipboardSource)
    } else if let Some(payload) = &cmd.payload {
        Box::new(LiteralSource(payload.clone()))
    } else {
        Box::new(StdinSource)
    };

    let mut store = open_store(config);
    match handle_scan(&mut store, source.as_ref()) {
        Some(prospect) => {
            println!("Added {} <{}>", prospect.name, prospect.email_address);
            println!("  id: {}", prospect.id());
        }
        // Discarded scans are not an error
        None => debug!("Scan produced no prospect"),
    }
}

fn handle_toggle(config: &Config, cmd: &ToggleCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config);
    let id = store.resolve_id(&cmd.id)?;

    let mut events = store.subscribe();
    let updated = store.toggle(id)?;

    while let Ok(event) = events.try_recv() {
        debug!("Store event: {:?}", event);
        if let StoreEvent::WillToggle(before) = event {
            debug!(
                "{} was {}",
                before.name,
                if before.is_contacted() {
                    "contacted"
                } else {
                    "uncontacted"
                }
            );
        }
    }

    if updated.is_contacted() {
        println!("Marked {} contacted", updated.name);
    } else {
        println!("Marked {} uncontacted", updated.name);
    }
    Ok(())
}

async fn handle_remind(
    config: &Config,
    cmd: &RemindCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config);
    let id = store.resolve_id(&cmd.id)?;
    let prospect = store
        .get(id)
        .ok_or(hotprospects::Error::ProspectNotFound { id })?;

    if prospect.is_contacted() {
        println!(
            "{} is already contacted; no reminder scheduled.",
            prospect.name
        );
        return Ok(());
    }

    let delay = cmd
        .delay_secs
        .map_or_else(|| config.reminder_delay(), Duration::from_secs);
    let notifier = TerminalNotifier::new(config.reminders.allow_notifications);

    match schedule_reminder(&notifier, prospect, delay, config.reminders.sound).await? {
        ScheduleOutcome::Scheduled(reminder_id) => {
            println!(
                "Reminder {} scheduled in {}s. Waiting...",
                reminder_id,
                delay.as_secs()
            );
            notifier.wait_pending().await;
        }
        ScheduleOutcome::Denied => {
            println!("Notifications are not allowed; no reminder scheduled.");
        }
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config);
    let stats = store.stats();

    if json {
        let status = serde_json::json!({
            "data_path": store.path(),
            "total": stats.total,
            "contacted": stats.contacted,
            "uncontacted": stats.uncontacted,
            "file_size_bytes": stats.file_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("prospects status");
        println!("----------------");
        println!("Data file:     {}", store.path().display());
        println!("File size:     {} bytes", stats.file_size_bytes);
        println!("Prospects:     {}", stats.total);
        println!("  Contacted:   {}", stats.contacted);
        println!("  Uncontacted: {}", stats.uncontacted);
    }
    Ok(())
}

fn handle_me(config: &Config, cmd: &MeCommand) -> Result<(), Box<dyn std::error::Error>> {
    if cmd.json {
        let card = serde_json::json!({
            "name": config.me.name,
            "emailAddress": config.me.email_address,
        });
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        // Exactly the scan text, so it can be piped into a QR encoder
        print!("{}", card_payload(&config.me.name, &config.me.email_address));
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data path:          {}", config.data_path().display());
                println!();
                println!("[Reminders]");
                println!("  Delay (seconds):    {}", config.reminders.delay_secs);
                println!("  Sound:              {}", config.reminders.sound);
                println!(
                    "  Allow notifications: {}",
                    config.reminders.allow_notifications
                );
                println!();
                println!("[View]");
                println!("  Default filter:     {}", config.view.default_filter);
                println!("  Default sort:       {}", config.view.default_sort);
                println!();
                println!("[Me]");
                println!("  Name:               {}", config.me.name);
                println!("  Email address:      {}", config.me.email_address);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
