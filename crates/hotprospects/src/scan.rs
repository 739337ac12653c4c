//! Scan intake.
//!
//! A QR-code scan arrives as one text payload holding a name and an email
//! address on two lines. Anything else is discarded without touching the
//! store.

use std::io::Read;

use clipboard_rs::{Clipboard, ClipboardContext};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::prospect::Prospect;
use crate::store::ProspectStore;

/// Something that produces a scan payload.
pub trait ScanSource {
    /// The name of this source (for logging).
    fn name(&self) -> &'static str;

    /// Read one payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the source has nothing to offer or cannot be read.
    fn read_payload(&self) -> Result<String>;
}

/// A payload passed in directly, e.g. as a command-line argument.
#[derive(Debug, Clone)]
pub struct LiteralSource(pub String);

impl ScanSource for LiteralSource {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn read_payload(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Reads the payload from standard input.
///
/// A single trailing line terminator is dropped, since shells and `echo`
/// append one that a scanner would not.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl ScanSource for StdinSource {
    fn name(&self) -> &'static str {
        "stdin"
    }

    fn read_payload(&self) -> Result<String> {
        let mut payload = String::new();
        std::io::stdin().read_to_string(&mut payload)?;
        Ok(strip_line_terminator(payload))
    }
}

/// Reads the payload from the system clipboard.
///
/// Useful with desktop QR decoders that copy their result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardSource;

impl ScanSource for ClipboardSource {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn read_payload(&self) -> Result<String> {
        let ctx = ClipboardContext::new()
            .map_err(|e| Error::scan_source(self.name(), e.to_string()))?;
        let text = ctx
            .get_text()
            .map_err(|e| Error::scan_source(self.name(), e.to_string()))?;

        if text.is_empty() {
            return Err(Error::scan_source(self.name(), "clipboard holds no text"));
        }
        Ok(text)
    }
}

fn strip_line_terminator(mut payload: String) -> String {
    if payload.ends_with('\n') {
        payload.pop();
        if payload.ends_with('\r') {
            payload.pop();
        }
    }
    payload
}

/// Parse a scan payload into a new prospect.
///
/// The payload must split on `'\n'` into exactly two segments, taken
/// verbatim as name and email address.
///
/// # Errors
///
/// Returns [`Error::MalformedScan`] for any other number of segments.
pub fn parse_payload(payload: &str) -> Result<Prospect> {
    let details: Vec<&str> = payload.split('\n').collect();
    match details.as_slice() {
        [name, email] => Ok(Prospect::new(*name, *email)),
        _ => Err(Error::MalformedScan {
            segments: details.len(),
        }),
    }
}

/// Build the payload that adds `name` and `email_address` when scanned.
///
/// This is the user's own card, the text other people's scanners read.
/// [`parse_payload`] turns it back into the same name and address as long as
/// neither field contains a `'\n'`.
#[must_use]
pub fn card_payload(name: &str, email_address: &str) -> String {
    format!("{name}\n{email_address}")
}

/// Read a payload from `source` and add the resulting prospect to the store.
///
/// Source failures and malformed payloads are logged and discarded. Returns
/// the added prospect, if any.
pub fn handle_scan(store: &mut ProspectStore, source: &dyn ScanSource) -> Option<Prospect> {
    let payload = match source.read_payload() {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Scanning failed: {}", e);
            return None;
        }
    };

    match parse_payload(&payload) {
        Ok(prospect) => {
            info!("Scanned prospect {} via {}", prospect.id(), source.name());
            store.add(prospect.clone());
            Some(prospect)
        }
        Err(e) => {
            debug!("Discarding scan from {}: {}", source.name(), e);
            None
        }
    }
}
