//! `hotprospects` - Track sales prospects captured from QR-code scans
//!
//! This library provides the prospect store (an in-memory list mirrored to a
//! JSON file), filtered and sorted projections of it, scan payload intake, and
//! reminder scheduling through a pluggable notifier.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prospect;
pub mod remind;
pub mod scan;
pub mod store;
pub mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use prospect::{Prospect, ProspectId};
pub use remind::{
    schedule_reminder, AuthorizationStatus, Notifier, Reminder, ScheduleOutcome, TerminalNotifier,
};
pub use scan::{card_payload, handle_scan, parse_payload, ScanSource};
pub use store::{ProspectStore, StoreEvent, StoreStats};
pub use view::{project, Filter, SortOrder};
